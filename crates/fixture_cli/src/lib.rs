//! Fixture CLI Library
//!
//! 리그/팀 CSV → MemoryStore → 시즌 대진표 JSON
//!
//! CSV columns: `league_id,league_name,team_id,team_name` (header required).

use anyhow::{Context, Result};
use fixture_core::{
    FixtureGenerator, FixtureQuery, GenerationReport, GeneratorConfig, MemoryStore, OddRosterPolicy,
    Pairing, Team, TeamId,
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One CSV row
#[derive(Debug, Clone, Deserialize)]
pub struct RosterRecord {
    pub league_id: u32,
    pub league_name: String,
    pub team_id: u32,
    pub team_name: String,
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub odd_policy: Option<OddRosterPolicy>,
    pub no_shuffle: bool,
}

/// Generation output written as JSON
#[derive(Debug, Clone, Serialize)]
pub struct FixtureOutput {
    pub report: GenerationReport,
    pub fixtures: Vec<Pairing>,
}

/// CSV 파일에서 리그/팀 로드
pub fn load_roster_csv(csv_path: &Path) -> Result<MemoryStore> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open roster CSV: {}", csv_path.display()))?;
    read_roster(file).with_context(|| format!("Failed to parse roster CSV: {}", csv_path.display()))
}

pub fn read_roster<R: Read>(reader: R) -> Result<MemoryStore> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let mut store = MemoryStore::new();
    for (line, record) in reader.deserialize::<RosterRecord>().enumerate() {
        // +2: header row and 1-based numbering
        let record = record.with_context(|| format!("Invalid roster row {}", line + 2))?;
        store.add_league(record.league_id, record.league_name);
        store
            .add_team(Team::new(record.team_id, record.team_name, record.league_id))
            .with_context(|| format!("Invalid roster row {}", line + 2))?;
    }

    tracing::debug!("Loaded {} leagues from roster", store.leagues().count());
    Ok(store)
}

/// 설정 파일 + CLI 옵션 병합
pub fn build_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }
    if let Some(policy) = overrides.odd_policy {
        config.odd_policy = policy;
    }
    if overrides.no_shuffle {
        config.shuffle = false;
    }
    Ok(config)
}

/// Generate fixtures for every league in the store.
pub fn generate(store: &mut MemoryStore, config: GeneratorConfig) -> Result<FixtureOutput> {
    let source = store.clone();
    let report = FixtureGenerator::new(config)
        .run(&source, store)
        .context("Fixture generation failed")?;

    Ok(FixtureOutput { report, fixtures: store.fixtures().to_vec() })
}

/// 생성된 대진표를 포함한 스토어 저장
pub fn save_store(store: &MemoryStore, path: &Path) -> Result<()> {
    store
        .save_to_path(path)
        .with_context(|| format!("Failed to save fixture store: {}", path.display()))
}

pub fn load_store(path: &Path) -> Result<MemoryStore> {
    MemoryStore::load_from_path(path)
        .with_context(|| format!("Failed to load fixture store: {}", path.display()))
}

/// Fixtures of one team after generation.
pub fn team_fixtures(store: &MemoryStore, team_id: TeamId) -> Result<(Team, Vec<Pairing>)> {
    let team = store
        .team_by_id(team_id)?
        .with_context(|| format!("Team {} not found in roster", team_id))?;
    let fixtures = store.upcoming_fixtures(team_id)?;
    Ok((team, fixtures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ROSTER: &str = "\
league_id,league_name,team_id,team_name
1,Premier Division,1,Rovers
1,Premier Division,2,United
1,Premier Division,3,City
1,Premier Division,4,Athletic
2,First Division,5,Harriers
2,First Division,6,Town
";

    #[test]
    fn test_read_roster() {
        let store = read_roster(ROSTER.as_bytes()).unwrap();
        assert_eq!(store.leagues().count(), 2);
        assert_eq!(store.league(1).map(|l| l.team_count()), Some(4));
        assert_eq!(store.league(2).map(|l| l.name.as_str()), Some("First Division"));
    }

    #[test]
    fn test_bad_row_reports_line() {
        let csv = "league_id,league_name,team_id,team_name\n1,Premier,x,Rovers\n";
        let err = read_roster(csv.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("row 2"));
    }

    #[test]
    fn test_duplicate_team_rejected() {
        let csv = "league_id,league_name,team_id,team_name\n1,P,1,Rovers\n1,P,1,Rovers\n";
        assert!(read_roster(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_team_id_shared_across_leagues_rejected() {
        let csv = "\
league_id,league_name,team_id,team_name
1,Premier,1,Rovers
1,Premier,2,United
2,First,1,Harriers
2,First,3,Town
";
        let err = read_roster(csv.as_bytes()).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("row 4"), "{}", msg);
        assert!(msg.contains("Duplicate team id 1"), "{}", msg);
    }

    #[test]
    fn test_saved_store_keeps_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.json");

        let mut store = read_roster(ROSTER.as_bytes()).unwrap();
        let config = build_config(None, &ConfigOverrides { seed: Some(3), ..Default::default() }).unwrap();
        generate(&mut store, config).unwrap();
        save_store(&store, &path).unwrap();

        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded.fixtures(), store.fixtures());
        let (team, fixtures) = team_fixtures(&loaded, 5).unwrap();
        assert_eq!(team.name, "Harriers");
        assert_eq!(fixtures.len(), 2);
    }

    #[test]
    fn test_load_missing_store() {
        let err = load_store(Path::new("/nonexistent/fixtures.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to load fixture store"));
    }

    #[test]
    fn test_generate_from_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let mut store = load_roster_csv(file.path()).unwrap();
        let config = build_config(None, &ConfigOverrides { seed: Some(5), ..Default::default() }).unwrap();
        let output = generate(&mut store, config).unwrap();

        assert_eq!(output.report.leagues, 2);
        assert_eq!(output.fixtures.len(), 12 + 2);

        let (team, fixtures) = team_fixtures(&store, 3).unwrap();
        assert_eq!(team.name, "City");
        assert_eq!(fixtures.len(), 6);
    }

    #[test]
    fn test_unknown_team() {
        let store = read_roster(ROSTER.as_bytes()).unwrap();
        assert!(team_fixtures(&store, 42).is_err());
    }

    #[test]
    fn test_overrides_beat_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 1, "odd_policy": "bye"}}"#).unwrap();

        let overrides = ConfigOverrides {
            seed: Some(9),
            odd_policy: Some(OddRosterPolicy::Reject),
            no_shuffle: true,
        };
        let config = build_config(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.odd_policy, OddRosterPolicy::Reject);
        assert!(!config.shuffle);
    }
}
