//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::{CalendarConfig, OutputConfig};

impl CalendarConfig {
    /// Validate calendar configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(year) = self.year {
            if year < 1 {
                anyhow::bail!("calendar.year must be at least 1, got {}", year);
            }
        }
        Ok(())
    }
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<()> {
        if self.empty_marker.trim().is_empty() {
            anyhow::bail!("output.empty_marker must not be blank");
        }
        Ok(())
    }
}
