// fantasquad entry point.
//
// Startup sequence:
// 1. Parse command-line flags
// 2. Initialize tracing (stderr, so stdout carries only the report)
// 3. Load config, apply flag overrides
// 4. Load the roster CSV
// 5. Evaluate the best lineup and print it

mod report;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fantasquad_core::config::{self, OutputFormat};
use fantasquad_core::lineup::{self, FormationChoice, Strategy};
use fantasquad_core::source;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    ScarcityGreedy,
    MaxFill,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::ScarcityGreedy => Strategy::ScarcityGreedy,
            StrategyArg::MaxFill => Strategy::MaxFill,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick the best starting eleven from a fantasy-football roster")]
struct Args {
    /// Config file (defaults to ./fantasquad.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Roster CSV, overrides `source.roster`
    #[arg(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Formation key (e.g. 4-3-3) or "auto"
    #[arg(short, long, value_name = "KEY")]
    formation: Option<FormationChoice>,

    /// Slot assignment strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Print the evaluation as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let mut config = match &args.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;

    if let Some(roster) = args.roster {
        config.source.roster = roster;
    }
    if let Some(formation) = args.formation {
        config.lineup.formation = formation;
    }
    if let Some(strategy) = args.strategy {
        config.lineup.strategy = strategy.into();
    }
    if args.json {
        config.output.format = OutputFormat::Json;
    }
    info!(
        "Config: formation={}, strategy={:?}, roster={}",
        config.lineup.formation,
        config.lineup.strategy,
        config.source.roster.display()
    );

    let players = source::load_roster(&config.source.roster)
        .with_context(|| format!("failed to load roster from {}", config.source.roster.display()))?;

    let Some(evaluation) = lineup::evaluate_best_lineup_with(
        &players,
        config.lineup.formation,
        config.lineup.strategy,
    ) else {
        info!("No eligible players in roster of {}", players.len());
        println!("No lineup possible: no player has both a recognized role and a positive value.");
        return Ok(());
    };

    info!(
        "Best lineup: {} with {}/{} slots filled, total value {:.1}",
        evaluation.formation,
        evaluation.filled,
        evaluation.slot_count(),
        evaluation.total_value
    );

    match config.output.format {
        OutputFormat::Text => print!("{}", report::render(&evaluation)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&evaluation)
                .context("failed to serialize lineup")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Initialize tracing to stderr. `RUST_LOG` overrides the default filter.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fantasquad=info,fantasquad_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
