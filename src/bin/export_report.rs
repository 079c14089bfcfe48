use std::path::PathBuf;

use nqueens::placement::MAX_BOARD;
use nqueens::report::{write_report, SolveReport};
use nqueens::search::enumerate::solve;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let force = match args.len() {
        3 => false,
        4 if args[3] == "--force" => true,
        _ => {
            eprintln!("Usage: export_report <n> <out.json> [--force]");
            std::process::exit(2);
        }
    };

    let n: usize = match args[1].parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Board size must be a non-negative integer, got: {}", args[1]);
            std::process::exit(2);
        }
    };
    if n > MAX_BOARD {
        eprintln!("Board size {n} exceeds the supported maximum {MAX_BOARD}");
        std::process::exit(2);
    }

    let out_path = PathBuf::from(&args[2]);
    if out_path.exists() && !force {
        eprintln!(
            "Output file {} already exists (use --force to overwrite)",
            out_path.display()
        );
        std::process::exit(2);
    }

    let solutions = solve(n);
    let report = SolveReport::from_solutions(n, &solutions);

    if let Err(e) = write_report(&out_path, &report) {
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    }

    println!("Board: {n}x{n}");
    println!("Solutions: {}", report.count);
    println!("Wrote {}", out_path.display());
}
