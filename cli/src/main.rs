mod changelog;
mod cli;
mod error;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Changelog {
            input,
            output,
            title,
            source_url,
            verbose,
        } => changelog::execute(input, output, title, source_url, verbose),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
