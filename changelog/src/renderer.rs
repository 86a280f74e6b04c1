//! Renders parsed release entries into the changelog page document.

use crate::config::PageConfig;
use crate::types::{ReleaseEntry, Section};

/// Page renderer that produces the complete changelog page artifact.
///
/// Pure text-in, text-out: reading the changelog and writing the page
/// are the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    config: PageConfig,
}

impl PageRenderer {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Renders the full page: layout wrapper, page header, one release
    /// section per entry, and the scoped style block.
    #[must_use]
    pub fn render(&self, entries: &[ReleaseEntry]) -> String {
        let body = entries
            .iter()
            .map(render_entry)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"---
import Layout from '{layout}';
---

<Layout title="{title}" description="{description}">
  <div class="page-container">
{header}

    <div class="content">
{body}
    </div>
  </div>
</Layout>

<style>
{styles}</style>
"#,
            layout = self.config.layout_import,
            title = escape_html(&self.config.title),
            description = escape_html(&self.config.description),
            header = self.render_page_header(),
            body = body,
            styles = include_str!("../templates/page_styles.css"),
        )
    }

    fn render_page_header(&self) -> String {
        let mut header = format!(
            r#"    <div class="page-header">
      <h1>{}</h1>
      <p class="page-intro">
        {}
      </p>"#,
            escape_html(&self.config.title),
            escape_html(&self.config.intro),
        );

        if let Some(link) = &self.config.source_link {
            header.push_str(&format!(
                r#"
      <p class="note">
        This page is auto-generated from
        <a href="{}" target="_blank" rel="noopener noreferrer">
          {}
        </a>
      </p>"#,
                escape_html(&link.url),
                escape_html(&link.label),
            ));
        }

        header.push_str("\n    </div>");
        header
    }
}

/// Renders one release as a `<section>` with its version/date header and
/// the non-empty buckets in fixed order.
fn render_entry(entry: &ReleaseEntry) -> String {
    let sections: Vec<String> = Section::ALL
        .iter()
        .filter(|&&section| !entry.changes.bucket(section).is_empty())
        .map(|&section| render_section(section, entry.changes.bucket(section)))
        .collect();

    format!(
        r#"      <section class="release">
        <div class="release-header">
          <h2 class="version">{}</h2>
          <span class="date">{}</span>
        </div>
        <div class="changes">
{}
        </div>
      </section>"#,
        escape_html(&entry.version),
        escape_html(&entry.date),
        sections.join("\n"),
    )
}

fn render_section(section: Section, items: &[String]) -> String {
    let list_items = items
        .iter()
        .map(|item| format!("          <li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"        <h3><span class="badge {}">{}</span> {}</h3>
        <ul>
{}
        </ul>"#,
        section.badge_class(),
        section.badge_label(),
        section.display_name(),
        list_items,
    )
}

/// Escapes text for embedding into markup.
///
/// Ampersand is replaced first so the escape sequences produced by the
/// later substitutions survive intact.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
