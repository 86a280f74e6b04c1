//! Changelog page generation pipeline.
//!
//! Reads a keep-a-changelog style `CHANGELOG.md`, parses it into
//! ordered release entries, and renders a single documentation page
//! embedding the release history. Parsing and rendering are pure;
//! [`generate_page`] wraps them with the file I/O.

pub mod config;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod types;
mod utils;

pub use config::{PageConfig, SourceLink};
pub use error::{ChangelogError, Result};
pub use parser::{Parser, parse_changelog};
pub use renderer::{PageRenderer, escape_html};
pub use types::{Changes, ReleaseEntry, Section};

use std::fs;
use std::path::Path;

/// Outcome of a page generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The page was written with this many release entries.
    Written { entries: usize },
    /// The changelog contained no version headers; nothing was written.
    Empty,
}

/// Runs the full pipeline: read the changelog at `source`, parse it,
/// render the page, and write it to `dest`.
///
/// A changelog with no version headers is not an error: the function
/// returns [`GenerateOutcome::Empty`] and leaves `dest` untouched.
/// Any existing file at `dest` is otherwise overwritten.
///
/// # Errors
///
/// Returns an error if the source cannot be read or the destination
/// cannot be written.
pub fn generate_page(source: &Path, dest: &Path, config: &PageConfig) -> Result<GenerateOutcome> {
    let content = fs::read_to_string(source).map_err(|e| ChangelogError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let entries = parse_changelog(&content);
    if entries.is_empty() {
        return Ok(GenerateOutcome::Empty);
    }

    let page = PageRenderer::new(config.clone()).render(&entries);

    // The stock output path is nested under src/pages/
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ChangelogError::Write {
                path: dest.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(dest, page).map_err(|e| ChangelogError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(GenerateOutcome::Written {
        entries: entries.len(),
    })
}
