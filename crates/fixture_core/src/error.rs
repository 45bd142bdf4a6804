use thiserror::Error;

use crate::store::StoreError;
use crate::team::LeagueId;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("No roster available for league {league_id}")]
    InvalidRoster { league_id: LeagueId },

    #[error("Odd roster rejected: {teams} teams")]
    OddRoster { teams: usize },

    #[error("Schedule invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type FixtureResult<T> = std::result::Result<T, FixtureError>;
