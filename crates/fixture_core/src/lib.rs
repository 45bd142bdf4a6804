//! # fixture_core - Season Fixture Generation
//!
//! Builds a complete double round-robin season for every league: each pair of
//! teams meets twice, once at each ground.
//!
//! ## Features
//! - Circle-method scheduler over an owned, rotating slot buffer
//! - Seedable shuffling (same seed = same fixture list)
//! - Odd rosters handled by a bye slot or rejected, per config
//! - Storage kept behind `RosterSource` / `ScheduleSink` / `FixtureQuery`

pub mod config;
pub mod error;
pub mod generator;
pub mod schedule;
pub mod store;
pub mod team;

pub use config::{GeneratorConfig, OddRosterPolicy};
pub use error::{FixtureError, FixtureResult};
pub use generator::{FixtureGenerator, GenerationReport};
pub use schedule::{
    validate_schedule, KeepOrder, Pairing, RoundRobinScheduler, Schedule, SlotShuffler,
};
pub use store::{FixtureQuery, MemoryStore, RosterSource, ScheduleSink, StoreError};
pub use team::{League, LeagueId, Team, TeamId};
