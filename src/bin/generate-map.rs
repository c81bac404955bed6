//! CLI for map generation

use std::process::ExitCode;

use clap::Parser;
use hex_pathmaps::{cli, MapGenerator, MapShape};

/// Generator of simple maps
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Size of the map (radius around the start cell)
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Generate hexagonal maps
    #[arg(short = 'x', long)]
    hexagonal: bool,

    /// Generate square maps
    #[arg(short, long)]
    square: bool,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Share of walls among the free cells, within [0, 1]
    #[arg(short, long, default_value_t = 0.1, value_parser = cli::parse_ratio)]
    ratio: f64,
}

/// Generate map, print it as a flat sequence
fn main() -> anyhow::Result<ExitCode> {
    let args = match cli::parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return Ok(code),
    };
    cli::init_logging();

    let shape = MapShape::from_flags(args.hexagonal, args.square);
    let mut gen = MapGenerator::new(args.seed);
    let map = gen.generate(shape, args.size, args.ratio)?;
    println!("{}", map);
    Ok(ExitCode::SUCCESS)
}
