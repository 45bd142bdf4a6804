//! Schedule module
//!
//! - Pairing / Schedule value types
//! - Circle-method rotation over an owned slot buffer
//! - Double round-robin scheduler
//! - Roster shuffling abstraction
//! - Invariant validation

mod rotation;
pub mod round_robin;
pub mod shuffle;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::team::{LeagueId, Team, TeamId};

pub use round_robin::RoundRobinScheduler;
pub use shuffle::{KeepOrder, SlotShuffler};
pub use validate::validate_schedule;

/// One scheduled match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub home: Team,
    pub away: Team,
    pub league_id: LeagueId,
    /// Placeholder until a fixture calendar assigns the real date.
    pub scheduled_at: DateTime<Utc>,
}

impl Pairing {
    pub fn new(home: Team, away: Team, league_id: LeagueId, scheduled_at: DateTime<Utc>) -> Self {
        Self { home, away, league_id, scheduled_at }
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }

    /// Opponent of `team_id` and whether `team_id` plays at home.
    pub fn opponent_of(&self, team_id: TeamId) -> Option<(&Team, bool)> {
        if self.home.id == team_id {
            Some((&self.away, true))
        } else if self.away.id == team_id {
            Some((&self.home, false))
        } else {
            None
        }
    }
}

/// The full fixture list of one league, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub league_id: LeagueId,
    pub pairings: Vec<Pairing>,
}

impl Schedule {
    pub fn empty(league_id: LeagueId) -> Self {
        Self { league_id, pairings: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pairing> {
        self.pairings.iter()
    }

    pub fn fixtures_for(&self, team_id: TeamId) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter().filter(move |p| p.involves(team_id))
    }

    pub fn home_count(&self, team_id: TeamId) -> usize {
        self.pairings.iter().filter(|p| p.home.id == team_id).count()
    }

    pub fn away_count(&self, team_id: TeamId) -> usize {
        self.pairings.iter().filter(|p| p.away.id == team_id).count()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}
