use nqueens::placement::{Placement, MAX_BOARD};
use nqueens::render::render;
use nqueens::search::enumerate::{count_solutions, solve};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (n_arg, count_only) = match args.len() {
        2 => (&args[1], false),
        3 if args[2] == "--count-only" => (&args[1], true),
        _ => {
            eprintln!("Usage: queens <n> [--count-only]");
            std::process::exit(2);
        }
    };

    let n: usize = match n_arg.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Board size must be a non-negative integer, got: {n_arg}");
            std::process::exit(2);
        }
    };
    if n > MAX_BOARD {
        eprintln!("Board size {n} exceeds the supported maximum {MAX_BOARD}");
        std::process::exit(2);
    }

    println!("Board: {n}x{n}");

    if count_only {
        println!("Solutions: {}", count_solutions(n));
        return;
    }

    let solutions = solve(n);
    println!("Solutions: {}", solutions.len());

    // Sort for deterministic output.
    let mut sorted: Vec<Placement> = solutions.into_iter().collect();
    sorted.sort();

    for p in &sorted {
        println!();
        println!("{:?}", p.cols());
        println!("{}", render(p));
    }
}
