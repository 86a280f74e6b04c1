use std::fs;
use std::path::Path;

use changelog::{GenerateOutcome, PageConfig, generate_page};
use tempfile::TempDir;

fn write_changelog(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn generates_page_from_changelog_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_changelog(
        temp_dir.path(),
        "# Changelog\n\n\
         ## [0.2.0] - 2024-02-20\n\
         ### Added\n\
         - Shell completion support\n\
         ### Changed\n\
         - Faster startup\n\
         \n\
         ## [0.1.0] - 2024-01-15\n\
         ### Added\n\
         - Initial release\n",
    );
    let dest = temp_dir.path().join("index.astro");

    let outcome = generate_page(&source, &dest, &PageConfig::default()).unwrap();

    assert_eq!(outcome, GenerateOutcome::Written { entries: 2 });
    let page = fs::read_to_string(&dest).unwrap();
    assert!(page.contains("0.2.0"));
    assert!(page.contains("<li>Shell completion support</li>"));
    assert!(page.contains("<li>Initial release</li>"));
    assert!(page.find("0.2.0").unwrap() < page.find("0.1.0").unwrap());
}

#[test]
fn nested_output_directories_are_created() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_changelog(
        temp_dir.path(),
        "## [1.0.0] - 2024-06-01\n### Fixed\n- Crash on empty input\n",
    );
    let dest = temp_dir
        .path()
        .join("src/pages/reference/changelog/index.astro");

    generate_page(&source, &dest, &PageConfig::default()).unwrap();

    assert!(dest.is_file());
}

#[test]
fn existing_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_changelog(temp_dir.path(), "## [1.0.0] - 2024-06-01\n### Added\n- New\n");
    let dest = temp_dir.path().join("index.astro");
    fs::write(&dest, "stale artifact").unwrap();

    generate_page(&source, &dest, &PageConfig::default()).unwrap();

    let page = fs::read_to_string(&dest).unwrap();
    assert!(!page.contains("stale artifact"));
    assert!(page.contains("<li>New</li>"));
}

#[test]
fn empty_changelog_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_changelog(temp_dir.path(), "# Changelog\n\nNothing released yet.\n");
    let dest = temp_dir.path().join("index.astro");

    let outcome = generate_page(&source, &dest, &PageConfig::default()).unwrap();

    assert_eq!(outcome, GenerateOutcome::Empty);
    assert!(!dest.exists());
}

#[test]
fn missing_source_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("does-not-exist.md");
    let dest = temp_dir.path().join("index.astro");

    let err = generate_page(&source, &dest, &PageConfig::default()).unwrap_err();

    assert!(err.user_message().contains("Could not read changelog"));
    assert!(!dest.exists());
}
