use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::{FixtureQuery, RosterSource, ScheduleSink, StoreError};
use crate::schedule::{Pairing, Schedule};
use crate::team::{League, LeagueId, Team, TeamId};

/// In-process store for leagues, teams and generated fixtures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    leagues: BTreeMap<LeagueId, League>,
    fixtures: Vec<Pairing>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a league, or rename it if the id is already known.
    pub fn add_league(&mut self, id: LeagueId, name: impl Into<String>) {
        let name = name.into();
        self.leagues
            .entry(id)
            .and_modify(|l| l.name = name.clone())
            .or_insert_with(|| League::new(id, name));
    }

    /// Register a team in the league named by `team.league_id`.
    ///
    /// Team ids are unique across the whole store, since fixture lookups are
    /// keyed by team id alone.
    pub fn add_team(&mut self, team: Team) -> Result<(), StoreError> {
        if let Some(existing) = self.leagues.values().find(|l| l.find_team(team.id).is_some()) {
            return Err(StoreError::DuplicateTeam { team_id: team.id, league_id: existing.id });
        }
        let league = self
            .leagues
            .get_mut(&team.league_id)
            .ok_or(StoreError::UnknownLeague(team.league_id))?;
        league.add_team(team);
        Ok(())
    }

    pub fn league(&self, id: LeagueId) -> Option<&League> {
        self.leagues.get(&id)
    }

    pub fn leagues(&self) -> impl Iterator<Item = &League> {
        self.leagues.values()
    }

    pub fn fixtures(&self) -> &[Pairing] {
        &self.fixtures
    }

    pub fn fixtures_in_league(&self, league_id: LeagueId) -> impl Iterator<Item = &Pairing> {
        self.fixtures.iter().filter(move |p| p.league_id == league_id)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Store saved to {}", path.display());
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        let store = serde_json::from_str(&json)?;
        log::info!("Store loaded from {}", path.display());
        Ok(store)
    }
}

impl RosterSource for MemoryStore {
    fn league_ids(&self) -> Result<Vec<LeagueId>, StoreError> {
        Ok(self.leagues.keys().copied().collect())
    }

    fn roster(&self, league_id: LeagueId) -> Result<Option<Vec<Team>>, StoreError> {
        Ok(self.leagues.get(&league_id).map(|l| l.teams.clone()))
    }
}

impl ScheduleSink for MemoryStore {
    fn store_schedule(&mut self, schedule: &Schedule) -> Result<(), StoreError> {
        if !self.leagues.contains_key(&schedule.league_id) {
            return Err(StoreError::UnknownLeague(schedule.league_id));
        }
        self.fixtures.extend(schedule.pairings.iter().cloned());
        Ok(())
    }
}

impl FixtureQuery for MemoryStore {
    fn upcoming_fixtures(&self, team_id: TeamId) -> Result<Vec<Pairing>, StoreError> {
        Ok(self.fixtures.iter().filter(|p| p.involves(team_id)).cloned().collect())
    }

    fn team_by_id(&self, team_id: TeamId) -> Result<Option<Team>, StoreError> {
        Ok(self.leagues.values().find_map(|l| l.find_team(team_id)).cloned())
    }
}
