//! Season fixture generation across all leagues.
//!
//! Pulls each league's roster from a `RosterSource`, schedules it and hands
//! the result to a `ScheduleSink`. Leagues are independent of each other.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::FixtureResult;
use crate::schedule::{validate_schedule, KeepOrder, RoundRobinScheduler, Schedule, SlotShuffler};
use crate::store::{RosterSource, ScheduleSink};
use crate::team::{LeagueId, Team};

/// Roster ordering chosen by `GeneratorConfig::shuffle`.
enum RosterOrder {
    Shuffled(ChaCha8Rng),
    AsGiven(KeepOrder),
}

impl SlotShuffler for RosterOrder {
    fn shuffle_slots(&mut self, slots: &mut [usize]) {
        match self {
            RosterOrder::Shuffled(rng) => rng.shuffle_slots(slots),
            RosterOrder::AsGiven(keep) => keep.shuffle_slots(slots),
        }
    }
}

/// Outcome of one `FixtureGenerator::run`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub leagues: usize,
    pub fixtures: usize,
    /// Leagues with fewer than two teams; nothing was stored for them.
    pub empty_leagues: Vec<LeagueId>,
}

pub struct FixtureGenerator {
    config: GeneratorConfig,
    scheduler: RoundRobinScheduler<RosterOrder>,
}

impl FixtureGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let order = if config.shuffle {
            let rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            RosterOrder::Shuffled(rng)
        } else {
            RosterOrder::AsGiven(KeepOrder)
        };

        let mut scheduler = RoundRobinScheduler::new(order).with_odd_policy(config.odd_policy);
        if let Some(kickoff) = config.kickoff {
            scheduler = scheduler.with_kickoff(kickoff);
        }

        Self { config, scheduler }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Schedule one league, validating the result if configured to.
    pub fn generate_league(
        &mut self,
        league_id: LeagueId,
        roster: Option<&[Team]>,
    ) -> FixtureResult<Schedule> {
        let schedule = self.scheduler.generate(league_id, roster)?;
        if self.config.validate {
            if let Some(roster) = roster {
                validate_schedule(roster, &schedule)?;
            }
        }
        Ok(schedule)
    }

    /// Schedule every league in `source` and store the results in `sink`.
    ///
    /// Stops at the first failing league; schedules already handed to the
    /// sink stay there.
    pub fn run<R, K>(&mut self, source: &R, sink: &mut K) -> FixtureResult<GenerationReport>
    where
        R: RosterSource + ?Sized,
        K: ScheduleSink + ?Sized,
    {
        let league_ids = source.league_ids()?;
        log::info!("Generating fixtures for {} leagues", league_ids.len());

        let mut report = GenerationReport::default();
        for league_id in league_ids {
            let roster = source.roster(league_id)?;
            let schedule = self.generate_league(league_id, roster.as_deref())?;
            report.leagues += 1;

            if schedule.is_empty() {
                log::warn!("League {} has fewer than two teams, no fixtures generated", league_id);
                report.empty_leagues.push(league_id);
                continue;
            }

            sink.store_schedule(&schedule)?;
            report.fixtures += schedule.len();
            log::debug!("League {}: stored {} fixtures", league_id, schedule.len());
        }

        log::info!(
            "Fixture generation complete: {} fixtures across {} leagues",
            report.fixtures,
            report.leagues
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OddRosterPolicy;
    use crate::error::FixtureError;
    use crate::store::{FixtureQuery, MemoryStore, StoreError};
    use crate::team::TeamId;
    use chrono::{TimeZone, Utc};

    fn store_with(leagues: &[(LeagueId, u32)]) -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut next_id: TeamId = 1;
        for &(league_id, size) in leagues {
            store.add_league(league_id, format!("League {}", league_id));
            for _ in 0..size {
                store.add_team(Team::new(next_id, format!("Team {}", next_id), league_id)).unwrap();
                next_id += 1;
            }
        }
        store
    }

    fn seeded() -> FixtureGenerator {
        FixtureGenerator::new(GeneratorConfig::default().with_seed(2024))
    }

    #[test]
    fn test_run_all_leagues() {
        let mut store = store_with(&[(1, 4), (2, 6), (3, 1)]);
        let source = store.clone();

        let report = seeded().run(&source, &mut store).unwrap();

        assert_eq!(report.leagues, 3);
        assert_eq!(report.fixtures, 12 + 30);
        assert_eq!(report.empty_leagues, vec![3]);
        assert_eq!(store.fixtures().len(), 42);
        assert_eq!(store.fixtures_in_league(2).count(), 30);
    }

    #[test]
    fn test_upcoming_fixtures_per_team() {
        let mut store = store_with(&[(1, 8)]);
        let source = store.clone();
        seeded().run(&source, &mut store).unwrap();

        for team in store.roster(1).unwrap().unwrap() {
            let fixtures = store.upcoming_fixtures(team.id).unwrap();
            assert_eq!(fixtures.len(), 14);
            assert_eq!(fixtures.iter().filter(|p| p.home.id == team.id).count(), 7);
        }
    }

    #[test]
    fn test_odd_league_rejected_aborts_run() {
        let mut store = store_with(&[(1, 4), (2, 5)]);
        let source = store.clone();
        let config = GeneratorConfig::default().with_seed(1).with_odd_policy(OddRosterPolicy::Reject);

        let err = FixtureGenerator::new(config).run(&source, &mut store).unwrap_err();
        assert!(matches!(err, FixtureError::OddRoster { teams: 5 }));
        // league 1 was stored before league 2 failed
        assert_eq!(store.fixtures().len(), 12);
    }

    #[test]
    fn test_missing_roster_is_invalid() {
        let err = seeded().generate_league(4, None).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidRoster { league_id: 4 }));
    }

    #[test]
    fn test_same_seed_same_run() {
        let kickoff = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let config = GeneratorConfig::default().with_seed(77).with_kickoff(kickoff);
        let source = store_with(&[(1, 6), (2, 4)]);

        let mut a = source.clone();
        let mut b = source.clone();
        FixtureGenerator::new(config.clone()).run(&source, &mut a).unwrap();
        FixtureGenerator::new(config).run(&source, &mut b).unwrap();

        assert_eq!(a.fixtures(), b.fixtures());
    }

    #[test]
    fn test_no_shuffle_keeps_registration_order() {
        let config = GeneratorConfig { shuffle: false, ..GeneratorConfig::default() };
        let roster: Vec<Team> = (1..=4).map(|id| Team::new(id, format!("T{}", id), 1)).collect();

        let schedule = FixtureGenerator::new(config).generate_league(1, Some(&roster)).unwrap();
        assert_eq!((schedule.pairings[0].home.id, schedule.pairings[0].away.id), (1, 4));
    }

    struct FailingSource;

    impl RosterSource for FailingSource {
        fn league_ids(&self) -> Result<Vec<LeagueId>, StoreError> {
            Ok(vec![1])
        }

        fn roster(&self, _league_id: LeagueId) -> Result<Option<Vec<Team>>, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }
    }

    #[test]
    fn test_source_error_surfaces() {
        let mut sink = MemoryStore::new();
        let err = seeded().run(&FailingSource, &mut sink).unwrap_err();
        assert!(matches!(err, FixtureError::Store(StoreError::Backend(_))));
        assert!(err.to_string().contains("connection reset"));
    }
}
