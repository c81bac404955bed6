//! CLI for annotating maps

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use hex_pathmaps::{cli, legend, locate_target, parse_endpoint, render, AnnotationRecord, HexMap};

/// Pathfinding annotator for maps
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Append results to this file
    #[arg(short, long, default_value = "ann.txt")]
    file: PathBuf,
}

/// Read map and endpoint from stdin, append annotation
fn main() -> anyhow::Result<ExitCode> {
    let args = match cli::parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return Ok(code),
    };
    cli::init_logging();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let map_line = lines.next().transpose()?.unwrap_or_default();
    let map: HexMap = map_line.parse()?;
    let target = locate_target(&map)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "\n{}", legend())?;
    writeln!(stdout, "\nAnnotate the best first path from S to T.\n")?;
    write!(stdout, "{}", render(&map))?;
    writeln!(stdout, "\nT = ({}, {})", target.x, target.y)?;
    write!(
        stdout,
        "Please type in the path coordinates as 'x, y' (default T): "
    )?;
    stdout.flush()?;

    let endpoint_line = lines.next().transpose()?.unwrap_or_default();
    let endpoint = parse_endpoint(&endpoint_line, target)?;
    writeln!(stdout, "P = ({}, {})", endpoint.x, endpoint.y)?;

    AnnotationRecord::new(&map, endpoint)?
        .append_to(&args.file)
        .with_context(|| format!("Could not append to {}", args.file.display()))?;
    Ok(ExitCode::SUCCESS)
}
