use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docgen")]
#[command(
    author,
    version,
    about = "Build tooling for the documentation site"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the changelog page from a structured CHANGELOG.md
    Changelog {
        /// Path to the changelog document
        #[clap(short, long, default_value = "CHANGELOG.md")]
        input: PathBuf,

        /// Path the generated page is written to
        #[clap(
            short,
            long,
            default_value = "src/pages/reference/changelog/index.astro"
        )]
        output: PathBuf,

        /// Title of the generated page
        #[clap(long, default_value = "Changelog")]
        title: String,

        /// URL of the source changelog, linked from the page header
        #[clap(long)]
        source_url: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}
