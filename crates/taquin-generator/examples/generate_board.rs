//! Example demonstrating board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` for chosen dimensions
//! - Generate a random board, or reproduce one from a seed
//! - Display the seed and the board
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Pick the board size:
//!
//! ```sh
//! cargo run --example generate_board -- --lines 4 --columns 5
//! ```
//!
//! Reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64 hex digits>
//! ```

use std::process;

use clap::Parser;
use taquin_core::Dimensions;
use taquin_generator::{BoardGenerator, BoardSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of lines of the board.
    #[arg(long, value_name = "LINES", default_value_t = 3)]
    lines: u8,

    /// Number of columns of the board.
    #[arg(long, value_name = "COLUMNS", default_value_t = 3)]
    columns: u8,

    /// Generation seed, 64 hex digits. A random seed is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,
}

fn main() {
    let args = Args::parse();

    let dimensions = match Dimensions::new(args.lines, args.columns) {
        Ok(dimensions) => dimensions,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let generator = BoardGenerator::new(dimensions);
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Board:");
    for line in generated.board.to_string().lines() {
        println!("  {line}");
    }
}
