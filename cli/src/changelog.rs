use crate::error::{CliError, Result};
use crate::ui;
use ::changelog::{GenerateOutcome, PageConfig, SourceLink, generate_page};
use std::path::PathBuf;

pub fn execute(
    input: PathBuf,
    output: PathBuf,
    title: String,
    source_url: Option<String>,
    verbose: bool,
) -> Result<()> {
    let config = PageConfig {
        title,
        source_link: source_url.map(|url| SourceLink {
            label: input.display().to_string(),
            url,
        }),
        ..PageConfig::default()
    };

    if verbose {
        println!("Reading changelog from {}", input.display());
        println!("Writing page to {}", output.display());
    }

    let outcome = generate_page(&input, &output, &config)
        .map_err(|e| CliError::from(e).with_context("Failed to generate changelog page"))?;

    match outcome {
        GenerateOutcome::Empty => {
            ui::warning_message("No changelog entries found, skipping page generation");
        }
        GenerateOutcome::Written { entries } => {
            ui::success_message(&format!("Generated changelog page with {entries} entries"));
            ui::info_message(&format!("Output: {}", output.display()));
        }
    }

    Ok(())
}
