use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a version header line: `## [0.1.0] - 2024-01-15`.
///
/// The date capture is greedy to end of line and may be empty, so a
/// header with nothing after the dash still opens an entry.
pub static VERSION_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^##\s+\[([^\]]+)\]\s*-\s*(.*)$").expect("Failed to compile version header regex")
});

/// Prefix of a bullet item line.
pub const ITEM_PREFIX: &str = "- ";
