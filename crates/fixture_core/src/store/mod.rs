//! Storage collaborators
//!
//! The generator only talks to storage through these traits; it never builds
//! storage statements itself.

mod memory;

use thiserror::Error;

use crate::schedule::{Pairing, Schedule};
use crate::team::{LeagueId, Team, TeamId};

pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown league: {0}")]
    UnknownLeague(LeagueId),

    #[error("Duplicate team id {team_id} in league {league_id}")]
    DuplicateTeam { team_id: TeamId, league_id: LeagueId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Supplies leagues and their rosters.
pub trait RosterSource {
    /// Leagues to schedule, in a stable order.
    fn league_ids(&self) -> Result<Vec<LeagueId>, StoreError>;

    /// Teams of one league. `None` when the league has no roster on record.
    fn roster(&self, league_id: LeagueId) -> Result<Option<Vec<Team>>, StoreError>;
}

/// Receives finished schedules.
pub trait ScheduleSink {
    fn store_schedule(&mut self, schedule: &Schedule) -> Result<(), StoreError>;
}

/// Read side over stored fixtures.
pub trait FixtureQuery {
    /// Every stored fixture where the team plays home or away, in stored order.
    /// Unknown teams have no fixtures.
    fn upcoming_fixtures(&self, team_id: TeamId) -> Result<Vec<Pairing>, StoreError>;

    fn team_by_id(&self, team_id: TeamId) -> Result<Option<Team>, StoreError>;
}
