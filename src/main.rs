mod cli;
mod config;
mod error;
mod maven;
mod pom;
mod utils;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::PatchOptions;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var("POMPIN_VERBOSE", "1");
        }
    }

    let options = PatchOptions {
        pom: cli.pom,
        marker: cli.marker,
        depth: cli.depth,
        config: cli.config,
    };

    let result = workflow::execute_pin(&cli.label, &cli.versions, options, cli.dry_run);

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(e.exit_code());
    }
}
