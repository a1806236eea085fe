//! Scalar Converter
//!
//! Prints the char, int, float and double representations of the literal
//! given on the command line.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

/// Convert a scalar literal into char, int, float and double.
#[derive(Parser, Debug)]
#[command(name = "convert", version, about, long_about = None)]
struct Args {
    /// Integer, floating point (`-3.4`, `1e10`, `42.0f`), special (`nan`,
    /// `-inff`) or character (`a`, `'a'`) literal.
    #[arg(allow_hyphen_values = true)]
    literal: String,
}

fn main() -> ExitCode {
    let log_level = std::env::var("CONVERT_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args.literal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Conversion failed: {:?}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str) -> Result<()> {
    let report = scalarconv::convert(input)
        .with_context(|| format!("cannot convert '{}'", input.trim()))?;
    info!("Converted {:?} literal", report.kind);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{report}").context("failed to write the conversions")?;
    stdout.flush().context("failed to write the conversions")?;
    Ok(())
}
