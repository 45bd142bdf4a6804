//! Fixture CLI
//!
//! 리그 로스터 CSV → 더블 라운드로빈 시즌 대진표 (JSON)

use anyhow::Result;
use clap::{Parser, Subcommand};
use fixture_cli::ConfigOverrides;
use fixture_core::OddRosterPolicy;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fixture_cli")]
#[command(about = "Generate double round-robin league fixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fixtures for every league in the roster
    Generate {
        /// Roster CSV (league_id,league_name,team_id,team_name)
        #[arg(long)]
        roster: PathBuf,

        /// Output JSON file path (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Save leagues, teams and fixtures to this store file
        #[arg(long)]
        store: Option<PathBuf>,

        #[command(flatten)]
        options: GenerationArgs,
    },

    /// Print one team's fixtures
    Team {
        /// Roster CSV to generate from (league_id,league_name,team_id,team_name)
        #[arg(long, required_unless_present = "store", conflicts_with = "store")]
        roster: Option<PathBuf>,

        /// Store file written by `generate --store`
        #[arg(long)]
        store: Option<PathBuf>,

        /// Team id
        #[arg(long)]
        team: u32,

        #[command(flatten)]
        options: GenerationArgs,
    },
}

#[derive(clap::Args)]
struct GenerationArgs {
    /// Generator config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shuffle seed (same seed = same fixtures)
    #[arg(long)]
    seed: Option<u64>,

    /// Odd roster handling: "bye" or "reject"
    #[arg(long)]
    odd_policy: Option<OddRosterPolicy>,

    /// Keep roster order instead of shuffling
    #[arg(long, default_value = "false")]
    no_shuffle: bool,
}

impl GenerationArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides { seed: self.seed, odd_policy: self.odd_policy, no_shuffle: self.no_shuffle }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { roster, out, store: store_path, options } => {
            let config = fixture_cli::build_config(options.config.as_deref(), &options.overrides())?;
            let mut store = fixture_cli::load_roster_csv(&roster)?;
            let output = fixture_cli::generate(&mut store, config)?;

            tracing::info!(
                leagues = output.report.leagues,
                fixtures = output.report.fixtures,
                "Fixtures generated"
            );
            for league_id in &output.report.empty_leagues {
                tracing::warn!(league_id, "League skipped: fewer than two teams");
            }

            if let Some(path) = store_path {
                fixture_cli::save_store(&store, &path)?;
            }

            let json = serde_json::to_string_pretty(&output)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    tracing::info!("Fixtures saved to: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Team { roster, store: store_path, team, options } => {
            let store = match (roster, store_path) {
                (Some(roster), _) => {
                    let config =
                        fixture_cli::build_config(options.config.as_deref(), &options.overrides())?;
                    let mut store = fixture_cli::load_roster_csv(&roster)?;
                    fixture_cli::generate(&mut store, config)?;
                    store
                }
                (None, Some(path)) => fixture_cli::load_store(&path)?,
                (None, None) => anyhow::bail!("Either --roster or --store is required"),
            };

            let (team, fixtures) = fixture_cli::team_fixtures(&store, team)?;
            println!("{} ({} fixtures)", team.name, fixtures.len());
            for pairing in &fixtures {
                if let Some((opponent, at_home)) = pairing.opponent_of(team.id) {
                    if at_home {
                        println!("   H  vs {}", opponent.name);
                    } else {
                        println!("   A  @  {}", opponent.name);
                    }
                }
            }
        }
    }

    Ok(())
}
