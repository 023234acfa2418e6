//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_empty_marker, String, "-".to_string());

/// How reports are printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Calendar settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CalendarConfig {
    /// Year shown in row 1. Defaults to the current local year.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Shown in place of empty cells in text tables
    #[serde(default = "default_empty_marker")]
    pub empty_marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            empty_marker: default_empty_marker(),
        }
    }
}
