use std::collections::{HashMap, HashSet};

use super::Schedule;
use crate::error::{FixtureError, FixtureResult};
use crate::team::{Team, TeamId};

/// Check a schedule against the double round-robin invariants for `roster`.
///
/// Reports the first violation found. Rosters with duplicate team ids cannot
/// pass, since the checks are keyed by id.
pub fn validate_schedule(roster: &[Team], schedule: &Schedule) -> FixtureResult<()> {
    let n = roster.len();
    let expected_len = n * n.saturating_sub(1);
    if schedule.len() != expected_len {
        return Err(violation(format!(
            "expected {} fixtures for {} teams, found {}",
            expected_len,
            n,
            schedule.len()
        )));
    }

    let ids: HashSet<TeamId> = roster.iter().map(|t| t.id).collect();
    if ids.len() != n {
        return Err(violation("roster contains duplicate team ids".to_string()));
    }

    let mut seen: HashMap<(TeamId, TeamId), usize> = HashMap::with_capacity(expected_len);
    let mut home: HashMap<TeamId, usize> = HashMap::with_capacity(n);
    let mut away: HashMap<TeamId, usize> = HashMap::with_capacity(n);

    for pairing in schedule {
        let (h, a) = (pairing.home.id, pairing.away.id);
        if h == a {
            return Err(violation(format!("team {} drawn against itself", h)));
        }
        if !ids.contains(&h) || !ids.contains(&a) {
            return Err(violation(format!("fixture {} v {} uses a team outside the roster", h, a)));
        }
        if pairing.league_id != schedule.league_id {
            return Err(violation(format!(
                "fixture {} v {} belongs to league {}, not {}",
                h, a, pairing.league_id, schedule.league_id
            )));
        }

        let count = seen.entry((h, a)).or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(violation(format!("fixture {} v {} scheduled twice", h, a)));
        }
        *home.entry(h).or_insert(0) += 1;
        *away.entry(a).or_insert(0) += 1;
    }

    for id in &ids {
        let (h, a) = (home.get(id).copied().unwrap_or(0), away.get(id).copied().unwrap_or(0));
        if h != n - 1 || a != n - 1 {
            return Err(violation(format!(
                "team {} has {} home and {} away fixtures, expected {} each",
                id,
                h,
                a,
                n - 1
            )));
        }
    }

    Ok(())
}

fn violation(msg: String) -> FixtureError {
    FixtureError::InvariantViolation(msg)
}
