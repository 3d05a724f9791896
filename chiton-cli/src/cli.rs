//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Lowest-risk path finder for the chiton cave
#[derive(Parser, Debug)]
#[command(
    name = "chiton",
    about = "Find the lowest total risk path through a chiton risk map",
    version
)]
pub struct Args {
    /// Grid file, one line of digits per row
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Start cell index (top-left if omitted)
    #[arg(short, long)]
    pub start: Option<usize>,

    /// End cell index in the expanded grid (bottom-right if omitted)
    #[arg(short, long)]
    pub end: Option<usize>,

    /// Tile the map N times in both directions and solve only that size
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..), conflicts_with = "part")]
    pub multiply: Option<u64>,

    /// Part to run: 1 uses the map as given, 2 tiles it 5 times (runs both if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Write the cost and path of every solved run to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
