// src/cli.rs
//! Command-line front end: argument parsing and session wiring.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use crate::engine::runner::run_session;
use crate::engine::SessionStats;

#[derive(Parser)]
#[command(name = "graphrank", version, about = "Streaming graph scoring and top-k ranking")]
pub struct Cli {
    /// Command stream to process (defaults to stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Print a session summary to stderr after end of input
    #[arg(long, short)]
    pub verbose: bool,
}

/// Runs one session end to end. Output goes to a locked, buffered stdout;
/// the summary (if requested) goes to stderr so piped rankings stay clean.
///
/// # Errors
///
/// Fails when the input file cannot be opened or the session itself fails.
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut output = BufWriter::new(stdout);

    let stats = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input {}", path.display()))?;
            run_session(&mut BufReader::new(file), &mut output)?
        }
        None => run_session(&mut io::stdin().lock(), &mut output)?,
    };
    output.flush()?;

    if cli.verbose {
        print_summary(stats);
    }
    Ok(())
}

fn print_summary(stats: SessionStats) {
    eprintln!(
        "{} {} scored, {} admitted, {} rejected, {} evicted",
        "session:".cyan().bold(),
        stats.scored,
        stats.admitted,
        stats.rejected,
        stats.evicted,
    );
}
