use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_config() {
    let content = r#"---
calendar:
  year: 2024
output:
  format: json
  empty_marker: "."
---

# Config
"#;
    let config = Config::parse(content).unwrap();
    assert_eq!(config.calendar.year, Some(2024));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.empty_marker, ".");
    assert_eq!(config.current_year(), 2024);
}

#[test]
fn test_parse_minimal_config() {
    let content = "---\n{}\n---\n";
    let config = Config::parse(content).unwrap();
    assert_eq!(config.calendar.year, None);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.empty_marker, "-"); // default
}

#[test]
fn test_parse_without_frontmatter_fails() {
    let err = Config::parse("# just a heading").unwrap_err();
    assert!(err.to_string().contains("frontmatter"));
}

#[test]
fn test_invalid_year_rejected() {
    let content = "---\ncalendar:\n  year: 0\n---\n";
    let err = Config::parse(content).unwrap_err();
    assert!(err.to_string().contains("calendar.year"));
}

#[test]
fn test_blank_marker_rejected() {
    let content = "---\noutput:\n  empty_marker: \" \"\n---\n";
    assert!(Config::parse(content).is_err());
}

#[test]
fn test_global_config_path() {
    let path = global_config_path().unwrap();
    assert!(path.ends_with(".config/yeartab/config.md"));
}

#[test]
fn test_load_merged_no_files() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_merged_from(None, &tmp.path().join("missing.md")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_merged_project_only() {
    let tmp = TempDir::new().unwrap();
    let project_path = tmp.path().join("config.md");
    fs::write(&project_path, "---\ncalendar:\n  year: 2020\n---\n").unwrap();

    let config = Config::load_merged_from(None, &project_path).unwrap();
    assert_eq!(config.calendar.year, Some(2020));
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn test_load_merged_with_global() {
    let tmp = TempDir::new().unwrap();
    let global_path = tmp.path().join("global.md");
    let project_path = tmp.path().join("project.md");

    fs::write(
        &global_path,
        r#"---
calendar:
  year: 2019
output:
  format: json
  empty_marker: "~"
---
"#,
    )
    .unwrap();

    fs::write(
        &project_path,
        r#"---
output:
  format: text
---
"#,
    )
    .unwrap();

    let config = Config::load_merged_from(Some(&global_path), &project_path).unwrap();
    // Project overrides global
    assert_eq!(config.output.format, OutputFormat::Text);
    // Global fills what project leaves out
    assert_eq!(config.calendar.year, Some(2019));
    assert_eq!(config.output.empty_marker, "~");
}

#[test]
fn test_load_merged_rejects_invalid_values() {
    let tmp = TempDir::new().unwrap();
    let project_path = tmp.path().join("project.md");
    fs::write(&project_path, "---\ncalendar:\n  year: -5\n---\n").unwrap();

    assert!(Config::load_merged_from(None, &project_path).is_err());
}

#[test]
fn test_default_config_content_parses() {
    let config = Config::parse(&default_config_content()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_split_frontmatter() {
    let (frontmatter, body) = split_frontmatter("---\na: 1\n---\n\nBody");
    assert_eq!(frontmatter.as_deref(), Some("\na: 1\n"));
    assert_eq!(body, "Body");

    let (frontmatter, body) = split_frontmatter("no fences");
    assert!(frontmatter.is_none());
    assert_eq!(body, "no fences");
}
