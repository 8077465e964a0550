use clap::Parser;
use colored::Colorize;
use graphrank_core::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::run(&cli) {
        eprintln!("{} {e:#}", "Error:".red());
        std::process::exit(1);
    }
}
