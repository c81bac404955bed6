//! Shared command line plumbing of the binaries

use std::process::ExitCode;

use clap::Parser;

/// Parse arguments, or give the exit code to stop with
///
/// Help and version requests print to stdout and succeed; any other parse
/// failure prints to stderr and exits with status 1.
pub fn parse_args<A: Parser>() -> Result<A, ExitCode> {
    A::try_parse().map_err(|err| {
        let _ = err.print();
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings)
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Value parser for a ratio within `[0, 1]`
pub fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{} is not within [0, 1]", ratio))
    }
}
