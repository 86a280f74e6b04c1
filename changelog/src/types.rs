/// One of the four fixed change categories a changelog entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Added,
    Changed,
    Fixed,
    Removed,
}

impl Section {
    /// Fixed rendering order, independent of source order.
    pub const ALL: [Self; 4] = [Self::Added, Self::Changed, Self::Fixed, Self::Removed];

    /// Matches a section header line against the four recognized headers.
    ///
    /// Only an exact prefix match counts; any other `###` line is not a
    /// section header and leaves the current section untouched.
    #[must_use]
    pub fn from_header(line: &str) -> Option<Self> {
        if line.starts_with("### Added") {
            Some(Self::Added)
        } else if line.starts_with("### Changed") {
            Some(Self::Changed)
        } else if line.starts_with("### Fixed") {
            Some(Self::Fixed)
        } else if line.starts_with("### Removed") {
            Some(Self::Removed)
        } else {
            None
        }
    }

    /// The category name shown inside the badge.
    #[must_use]
    pub const fn badge_label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Removed => "Removed",
        }
    }

    /// CSS class of the badge span.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Added => "badge-added",
            Self::Changed => "badge-changed",
            Self::Fixed => "badge-fixed",
            Self::Removed => "badge-removed",
        }
    }

    /// Reader-facing heading text next to the badge.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Added => "New Features",
            Self::Changed => "Improvements",
            Self::Fixed => "Bug Fixes",
            Self::Removed => "Deprecations",
        }
    }
}

/// The four categorized change lists of a single release, each in
/// changelog authoring order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub fixed: Vec<String>,
    pub removed: Vec<String>,
}

impl Changes {
    #[must_use]
    pub fn bucket(&self, section: Section) -> &[String] {
        match section {
            Section::Added => &self.added,
            Section::Changed => &self.changed,
            Section::Fixed => &self.fixed,
            Section::Removed => &self.removed,
        }
    }

    pub(crate) fn bucket_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Added => &mut self.added,
            Section::Changed => &mut self.changed,
            Section::Fixed => &mut self.fixed,
            Section::Removed => &mut self.removed,
        }
    }

    /// True when every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|&s| self.bucket(s).is_empty())
    }
}

/// One version's worth of changelog content.
///
/// Version and date are free-form text taken verbatim from the version
/// header; no semver or date validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub version: String,
    pub date: String,
    pub changes: Changes,
}

impl ReleaseEntry {
    #[must_use]
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            changes: Changes::default(),
        }
    }
}
