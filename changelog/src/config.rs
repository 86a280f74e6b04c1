/// Configuration for the generated changelog page
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Page title passed to the layout component.
    pub title: String,
    /// Page description passed to the layout component.
    pub description: String,
    /// Intro paragraph shown under the title.
    pub intro: String,
    /// Link back to the source changelog, shown as an
    /// "auto-generated from" note. Omitted when `None`.
    pub source_link: Option<SourceLink>,
    /// Import path of the layout component, relative to the page.
    pub layout_import: String,
}

/// A labeled link to the changelog document the page was generated from
#[derive(Debug, Clone)]
pub struct SourceLink {
    pub label: String,
    pub url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Changelog".to_string(),
            description: "Release history and changes".to_string(),
            intro: "All notable changes are documented here.".to_string(),
            source_link: None,
            layout_import: "../../components/Layout.astro".to_string(),
        }
    }
}
