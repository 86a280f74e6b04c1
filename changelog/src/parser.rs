use crate::types::{ReleaseEntry, Section};
use crate::utils::{ITEM_PREFIX, VERSION_HEADER_PATTERN};

/// Scanning state threaded through a single forward pass over the lines.
#[derive(Debug, Default)]
struct ParserState {
    current_entry: Option<ReleaseEntry>,
    current_section: Option<Section>,
}

/// Line-oriented changelog parser.
///
/// The grammar is deliberately lossy: lines that match no rule are
/// skipped, and the only failure a caller can see is I/O, which is
/// handled outside the parser. Parsing itself never fails.
#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses the full changelog text into release entries, in the
    /// order their version headers appear.
    #[must_use]
    pub fn parse(&self, content: &str) -> Vec<ReleaseEntry> {
        let mut entries = Vec::new();
        let mut state = ParserState::default();

        for line in content.lines() {
            Self::parse_line(line, &mut state, &mut entries);
        }

        // Finalize the entry still open at end of input
        if let Some(entry) = state.current_entry.take() {
            entries.push(entry);
        }

        entries
    }

    fn parse_line(line: &str, state: &mut ParserState, entries: &mut Vec<ReleaseEntry>) {
        if let Some(captures) = VERSION_HEADER_PATTERN.captures(line) {
            Self::handle_version_header(&captures, state, entries);
        } else if let Some(section) = Section::from_header(line) {
            state.current_section = Some(section);
        } else if let Some(rest) = line.strip_prefix(ITEM_PREFIX) {
            Self::handle_item_line(rest, state);
        }
        // Everything else (blank lines, prose, stray markup) is skipped.
        // An unrecognized `###` line in particular is NOT a section
        // header and does not reset the current section.
    }

    fn handle_version_header(
        captures: &regex::Captures,
        state: &mut ParserState,
        entries: &mut Vec<ReleaseEntry>,
    ) {
        if let (Some(version), Some(date)) = (captures.get(1), captures.get(2)) {
            if let Some(previous) = state.current_entry.take() {
                entries.push(previous);
            }
            state.current_entry = Some(ReleaseEntry::new(version.as_str(), date.as_str()));
            state.current_section = None;
        }
    }

    fn handle_item_line(rest: &str, state: &mut ParserState) {
        // A bullet counts only with an open entry and an active section
        if let (Some(entry), Some(section)) = (state.current_entry.as_mut(), state.current_section)
        {
            let item = rest.trim();
            if !item.is_empty() {
                entry.changes.bucket_mut(section).push(item.to_string());
            }
        }
    }
}

/// Parses changelog text into release entries.
///
/// Convenience wrapper around [`Parser::parse`].
#[must_use]
pub fn parse_changelog(content: &str) -> Vec<ReleaseEntry> {
    Parser::new().parse(content)
}
