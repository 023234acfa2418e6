//! Command module structure for yeartab CLI

use anyhow::Result;
use log::debug;

use yeartab::config::Config;

pub mod check;
pub mod init;
pub mod session;
pub mod template;
pub mod util;

/// Pick the year for row 1.
/// Precedence: command-line flag, then `fallback` (e.g. a workbook's own year), then config.
pub fn resolve_year(config: &Config, flag: Option<i32>, fallback: Option<i32>) -> Result<i32> {
    let year = flag.or(fallback).unwrap_or_else(|| config.current_year());
    if year < 1 {
        anyhow::bail!("Year must be at least 1, got {}", year);
    }
    debug!("Using {} as the year of row 1", year);
    Ok(year)
}
