//! Perft driver.
//!
//! Counts leaf nodes of the legal move tree for a single position, or checks
//! a TOML suite of positions against expected counts.

mod suite;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use chess_core::Fen;
use chess_engine::{perft, perft_divide, Game};
use clap::Parser;
use suite::Suite;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Move generator validation by leaf node counting")]
struct Cli {
    /// Position to count from
    #[arg(long, default_value = Fen::STARTPOS)]
    fen: String,

    /// Search depth; with --suite, the deepest listed depth to run
    #[arg(short, long)]
    depth: Option<u32>,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Check every position of a TOML suite file
    #[arg(long, conflicts_with_all = ["fen", "divide"])]
    suite: Option<PathBuf>,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

const DEFAULT_DEPTH: u32 = 4;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.suite {
        Some(path) => run_suite(path, cli.depth),
        None => run_single(&cli),
    }
}

fn run_single(cli: &Cli) -> Result<ExitCode> {
    let game = Game::from_fen(&cli.fen).context("invalid --fen")?;
    let depth = cli.depth.unwrap_or(DEFAULT_DEPTH);
    let start = Instant::now();

    let nodes = if cli.divide {
        let results = perft_divide(&game, depth);
        for (mv, count) in &results {
            println!("{mv}: {count}");
        }
        results.iter().map(|(_, count)| count).sum()
    } else {
        perft(&game, depth)
    };

    let elapsed = start.elapsed();
    println!("Nodes: {nodes}");
    info!(
        depth,
        nodes,
        elapsed_ms = elapsed.as_millis() as u64,
        nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64,
        "perft complete"
    );
    Ok(ExitCode::SUCCESS)
}

fn run_suite(path: &Path, max_depth: Option<u32>) -> Result<ExitCode> {
    let suite = Suite::load(path)?;
    let outcomes = suite.run(max_depth)?;

    let failed: Vec<_> = outcomes.iter().filter(|o| !o.passed()).collect();
    for outcome in &outcomes {
        let status = if outcome.passed() { "ok" } else { "FAIL" };
        println!(
            "{status:>4}  {} depth {}: {} (expected {})",
            outcome.name, outcome.depth, outcome.actual, outcome.expected
        );
    }
    println!("{} checks, {} failed", outcomes.len(), failed.len());

    Ok(if failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
