//! Circle-method slot buffer.
//!
//! Slots are laid out as two rows: the top row runs `0..len/2` left to right,
//! the bottom row runs `len/2..len` right to left, so slot `i` faces slot
//! `len - 1 - i`. Slot 0 stays put; every other slot moves one place per
//! rotation (1 -> 2, ..., last -> 1). After `len - 1` rotations every pair of
//! slots has faced each other exactly once.

/// Owned arrangement of roster positions. `None` is the bye slot.
#[derive(Debug, Clone)]
pub(crate) struct Rotation {
    slots: Vec<Option<usize>>,
}

impl Rotation {
    /// `slots.len()` must be even.
    pub(crate) fn new(slots: Vec<Option<usize>>) -> Self {
        debug_assert!(slots.len() % 2 == 0, "rotation needs an even slot count");
        Self { slots }
    }

    /// Rotations per leg.
    pub(crate) fn rounds(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// `(home, away)` roster positions for the current arrangement.
    ///
    /// The fixed slot switches ends every other round; pairings against the
    /// bye are dropped.
    pub(crate) fn pairings(&self, round: usize) -> Vec<(usize, usize)> {
        let len = self.slots.len();
        (0..len / 2)
            .filter_map(|i| {
                let (top, bottom) = (self.slots[i]?, self.slots[len - 1 - i]?);
                if i == 0 && round % 2 == 1 {
                    Some((bottom, top))
                } else {
                    Some((top, bottom))
                }
            })
            .collect()
    }

    pub(crate) fn rotate(&mut self) {
        if self.slots.len() > 2 {
            self.slots[1..].rotate_right(1);
        }
    }
}
