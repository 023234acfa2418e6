//! Configuration management for yeartab.
//!
//! Configuration lives in markdown files with YAML frontmatter:
//! `~/.config/yeartab/config.md` (global) and `.yeartab/config.md` (project).

use anyhow::{Context, Result};
use chrono::Datelike;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::CONFIG_FILE;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration with merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/yeartab/config.md)
    /// 2. Project config (.yeartab/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(CONFIG_FILE))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.calendar.validate()?;
        self.output.validate()
    }

    /// Load merged configuration from specified global and project config paths.
    /// Either file may be missing; missing files contribute nothing.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = if project_path.exists() {
            debug!("Loading project config from {}", project_path.display());
            PartialConfig::load_from(project_path)?
        } else {
            PartialConfig::default()
        };

        let config = global_config.merge_with(project_config);
        config.validate()?;

        Ok(config)
    }

    /// Year shown in row 1: the configured year, else the current local year.
    pub fn current_year(&self) -> i32 {
        self.calendar
            .year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Returns the path to the global config file at ~/.config/yeartab/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/yeartab/config.md"))
}

/// Split `content` into its YAML frontmatter (between `---` fences) and body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Default project config written by `yeartab init`.
pub fn default_config_content() -> String {
    format!(
        r#"---
output:
  format: text
  empty_marker: "-"
# calendar:
#   year: {}
---

# Yeartab Configuration

`calendar.year` pins the year shown in row 1. Leave it unset to follow the
current date.
"#,
        chrono::Local::now().year()
    )
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub calendar: Option<PartialCalendarConfig>,
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialCalendarConfig {
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub empty_marker: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_calendar = self.calendar.unwrap_or_default();
        let global_output = self.output.unwrap_or_default();
        let project_calendar = project.calendar.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();

        Config {
            calendar: CalendarConfig {
                year: project_calendar.year.or(global_calendar.year),
            },
            output: OutputConfig {
                // Project value > global value > default
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
                empty_marker: project_output
                    .empty_marker
                    .or(global_output.empty_marker)
                    .unwrap_or_else(defaults::default_empty_marker),
            },
        }
    }
}

#[cfg(test)]
mod tests;
