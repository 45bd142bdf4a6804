use rand::seq::SliceRandom;
use rand::RngCore;

/// Source of the initial roster order.
///
/// Only decides which concrete pairings come first; the schedule invariants
/// hold for any order.
pub trait SlotShuffler {
    fn shuffle_slots(&mut self, slots: &mut [usize]);
}

impl<R: RngCore> SlotShuffler for R {
    fn shuffle_slots(&mut self, slots: &mut [usize]) {
        slots.shuffle(self);
    }
}

/// Keeps the roster in the order it was supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl SlotShuffler for KeepOrder {
    fn shuffle_slots(&mut self, _slots: &mut [usize]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_keep_order() {
        let mut slots = vec![0, 1, 2, 3];
        KeepOrder.shuffle_slots(&mut slots);
        assert_eq!(slots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_seeded_shuffle_is_repeatable() {
        let mut a: Vec<usize> = (0..16).collect();
        let mut b: Vec<usize> = (0..16).collect();
        ChaCha8Rng::seed_from_u64(42).shuffle_slots(&mut a);
        ChaCha8Rng::seed_from_u64(42).shuffle_slots(&mut b);
        assert_eq!(a, b);

        a.sort_unstable();
        assert_eq!(a, (0..16).collect::<Vec<_>>());
    }
}
