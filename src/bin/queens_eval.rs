use std::path::PathBuf;

use nqueens::placement::MAX_BOARD;
use nqueens::search::enumerate::count_solutions_within;
use nqueens::search::SearchLimits;
use serde::{Deserialize, Serialize};

fn default_max_solutions() -> u64 {
    SearchLimits::default().max_solutions
}

fn default_max_nodes() -> u64 {
    SearchLimits::default().max_nodes
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
struct LimitsSpec {
    #[serde(default = "default_max_solutions")]
    max_solutions: u64,
    #[serde(default = "default_max_nodes")]
    max_nodes: u64,
}

impl Default for LimitsSpec {
    fn default() -> Self {
        Self {
            max_solutions: default_max_solutions(),
            max_nodes: default_max_nodes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct InputFile {
    boards: Vec<usize>,
    #[serde(default)]
    limits: LimitsSpec,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: queens_eval <input.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let input: InputFile = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON in {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    if let Some(&n) = input.boards.iter().find(|&&n| n > MAX_BOARD) {
        eprintln!("Board size {n} exceeds the supported maximum {MAX_BOARD}");
        std::process::exit(2);
    }

    let limits = SearchLimits {
        max_solutions: input.limits.max_solutions,
        max_nodes: input.limits.max_nodes,
    };

    let mut boards = Vec::with_capacity(input.boards.len());
    for &n in &input.boards {
        let count = match count_solutions_within(n, limits) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Evaluation failed for board {n}: {e}");
                std::process::exit(1);
            }
        };
        boards.push(serde_json::json!({ "n": n, "count": count }));
    }

    let out = serde_json::json!({
        "limits": input.limits,
        "boards": boards,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}
