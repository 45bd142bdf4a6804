use serde::{Deserialize, Serialize};

pub type TeamId = u32;
pub type LeagueId = u32;

/// A club entered in one league.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub league_id: LeagueId,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, league_id: LeagueId) -> Self {
        Self { id, name: name.into(), league_id }
    }
}

/// A league and the teams registered to it.
///
/// The roster order is the order teams were registered in; the scheduler
/// shuffles its own copy and never reorders this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl League {
    pub fn new(id: LeagueId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), teams: Vec::new() }
    }

    /// Register a team, re-homing it to this league.
    pub fn add_team(&mut self, mut team: Team) {
        team.league_id = self.id;
        self.teams.push(team);
    }

    pub fn roster(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn find_team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }
}
