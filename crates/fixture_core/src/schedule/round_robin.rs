//! Double round-robin scheduler
//!
//! Home leg: `n - 1` rotations of the circle method over a shuffled copy of
//! the roster. Away leg: the same rotations with home and away swapped. The
//! caller's roster is only read.

use chrono::{DateTime, Utc};

use super::rotation::Rotation;
use super::shuffle::SlotShuffler;
use super::{Pairing, Schedule};
use crate::config::OddRosterPolicy;
use crate::error::{FixtureError, FixtureResult};
use crate::team::{LeagueId, Team};

pub struct RoundRobinScheduler<S> {
    shuffler: S,
    odd_policy: OddRosterPolicy,
    kickoff: Option<DateTime<Utc>>,
}

impl<S: SlotShuffler> RoundRobinScheduler<S> {
    pub fn new(shuffler: S) -> Self {
        Self { shuffler, odd_policy: OddRosterPolicy::default(), kickoff: None }
    }

    pub fn with_odd_policy(mut self, policy: OddRosterPolicy) -> Self {
        self.odd_policy = policy;
        self
    }

    pub fn with_kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.kickoff = Some(kickoff);
        self
    }

    pub fn odd_policy(&self) -> OddRosterPolicy {
        self.odd_policy
    }

    /// Generate the season for one league.
    ///
    /// `None` means the roster could not be produced and is an error; an
    /// empty or single-team roster yields an empty schedule.
    pub fn generate(
        &mut self,
        league_id: LeagueId,
        roster: Option<&[Team]>,
    ) -> FixtureResult<Schedule> {
        let roster = roster.ok_or(FixtureError::InvalidRoster { league_id })?;
        let team_count = roster.len();

        if team_count < 2 {
            return Ok(Schedule::empty(league_id));
        }

        let odd = team_count % 2 == 1;
        if odd && self.odd_policy == OddRosterPolicy::Reject {
            return Err(FixtureError::OddRoster { teams: team_count });
        }

        let mut order: Vec<usize> = (0..team_count).collect();
        self.shuffler.shuffle_slots(&mut order);

        let mut slots: Vec<Option<usize>> = order.into_iter().map(Some).collect();
        if odd {
            slots.push(None);
        }

        let home_leg = Self::home_leg(Rotation::new(slots), team_count);
        let scheduled_at = self.kickoff.unwrap_or_else(Utc::now);

        let away_leg = home_leg.iter().map(|&(home, away)| (away, home));
        let pairings: Vec<Pairing> = home_leg
            .iter()
            .copied()
            .chain(away_leg)
            .map(|(home, away)| {
                Pairing::new(roster[home].clone(), roster[away].clone(), league_id, scheduled_at)
            })
            .collect();

        log::debug!(
            "League {}: {} teams -> {} fixtures{}",
            league_id,
            team_count,
            pairings.len(),
            if odd { " (with bye)" } else { "" }
        );

        Ok(Schedule { league_id, pairings })
    }

    fn home_leg(mut rotation: Rotation, team_count: usize) -> Vec<(usize, usize)> {
        let mut leg = Vec::with_capacity(team_count * (team_count - 1) / 2);
        for round in 0..rotation.rounds() {
            leg.extend(rotation.pairings(round));
            rotation.rotate();
        }
        leg
    }
}
