//! Perft suite files.
//!
//! A suite is a TOML file of named positions with their expected node
//! counts:
//!
//! ```toml
//! [[position]]
//! name = "startpos"
//! fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
//! nodes = [20, 400, 8902]
//! ```
//!
//! `nodes[i]` is the expected count at depth `i + 1`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chess_engine::{perft, Game};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// A parsed suite file.
#[derive(Debug, Deserialize)]
pub struct Suite {
    #[serde(rename = "position", default)]
    pub positions: Vec<SuitePosition>,
}

/// One position of a suite.
#[derive(Debug, Deserialize)]
pub struct SuitePosition {
    pub name: String,
    pub fen: String,
    /// Expected node counts, starting at depth 1.
    #[serde(default)]
    pub nodes: Vec<u64>,
}

/// Result of one (position, depth) check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    pub depth: u32,
    pub expected: u64,
    pub actual: u64,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl Suite {
    /// Reads and parses a suite file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read suite {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse suite {}", path.display()))
    }

    /// Runs every listed depth up to `max_depth` (all of them if `None`).
    pub fn run(&self, max_depth: Option<u32>) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();

        for position in &self.positions {
            let game = Game::from_fen(&position.fen)
                .with_context(|| format!("invalid FEN for position '{}'", position.name))?;

            for (depth, &expected) in (1u32..).zip(&position.nodes) {
                if max_depth.is_some_and(|max| depth > max) {
                    break;
                }

                let start = Instant::now();
                let actual = perft(&game, depth);
                debug!(
                    name = %position.name,
                    depth,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "perft finished"
                );

                let outcome = Outcome {
                    name: position.name.clone(),
                    depth,
                    expected,
                    actual,
                };
                if outcome.passed() {
                    info!(name = %outcome.name, depth, nodes = actual, "ok");
                } else {
                    warn!(name = %outcome.name, depth, expected, actual, "node count mismatch");
                }
                outcomes.push(outcome);
            }
        }

        Ok(outcomes)
    }
}
