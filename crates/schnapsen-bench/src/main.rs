use std::path::PathBuf;

use clap::Parser;

use schnapsen_bench::config::{BenchmarkConfig, ResolvedOutputs};
use schnapsen_bench::logging::init_logging;
use schnapsen_bench::tournament::TournamentRunner;

/// Head-to-head tournament harness for Schnapsen bots.
#[derive(Debug, Parser)]
#[command(
    name = "schnapsen-bench",
    author,
    version,
    about = "Deterministic Schnapsen tournament harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of games to play.
    #[arg(long, value_name = "GAMES")]
    games: Option<usize>,

    /// Override the RNG seed for game generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no tournament is run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchmarkConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(games) = cli.games {
        config.games.count = games;
    }

    if let Some(seed) = cli.seed {
        config.games.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let games = config.games.count;
    let matchup = config
        .agents
        .iter()
        .map(|agent| format!("{} ({})", agent.name, agent.kind))
        .collect::<Vec<_>>()
        .join(" vs ");

    println!("Loaded configuration '{run_id}': {matchup}, {games} games");

    let runner = TournamentRunner::new(config.clone(), outputs.clone())?;

    if cli.validate_only {
        println!("Validation-only mode: tournament execution skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs)?;
    let summary = runner.run()?;
    println!(
        "Tournament complete for '{run_id}': {} games, {} rows at {}",
        summary.games_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(guard) = logging_guard.as_ref() {
        println!("Trace log: {}", guard.trace_path.display());
    }

    Ok(())
}
