// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: search a Tower Bloxx board and print the best
//! positions found.

use clap::Parser;
use orbit_search::{search, SearchConfig};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "towers")]
#[command(author, version, about = "Symmetry-reduced breadth-first search over Tower Bloxx boards")]
struct Cli {
    /// Side length of the square board
    #[arg(default_value_t = 3)]
    k: usize,

    /// Maximum number of states to expand (default: 3 * k * k)
    #[arg(long)]
    budget: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SearchConfig {
        dimension: cli.k,
        budget: cli.budget,
    };

    match search::run(&config) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
