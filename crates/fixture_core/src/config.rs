//! Generator configuration
//!
//! Loaded from JSON; every field is optional and falls back to `Default`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{FixtureError, FixtureResult};

/// What to do with a league that has an odd number of teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddRosterPolicy {
    /// Add a placeholder slot; whoever faces it sits the round out.
    #[default]
    Bye,
    /// Fail with `FixtureError::OddRoster`.
    Reject,
}

impl FromStr for OddRosterPolicy {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bye" => Ok(OddRosterPolicy::Bye),
            "reject" => Ok(OddRosterPolicy::Reject),
            other => Err(FixtureError::Config(format!(
                "unknown odd roster policy '{}' (expected 'bye' or 'reject')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// RNG seed for the roster shuffle. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub odd_policy: OddRosterPolicy,
    /// Shuffle each roster before rotating. Off keeps registration order.
    pub shuffle: bool,
    /// Placeholder date stamped on every pairing. `None` uses generation time.
    pub kickoff: Option<DateTime<Utc>>,
    /// Check every schedule against the round-robin invariants before storing.
    pub validate: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: None, odd_policy: OddRosterPolicy::Bye, shuffle: true, kickoff: None, validate: true }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> FixtureResult<Self> {
        serde_json::from_str(json).map_err(|e| FixtureError::Config(e.to_string()))
    }

    pub fn from_path(path: &Path) -> FixtureResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            FixtureError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_odd_policy(mut self, policy: OddRosterPolicy) -> Self {
        self.odd_policy = policy;
        self
    }

    pub fn with_kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.kickoff = Some(kickoff);
        self
    }
}
