//! Terminal colors, status markers, and cell formatting for the yeartab CLI.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("YEARTAB_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Status line shown after a submit: `● Valid` or `✗ Invalid`.
pub fn submit_status(valid: bool) -> ColoredString {
    if valid {
        "● Valid".green()
    } else {
        "✗ Invalid".red()
    }
}

/// Color scheme for table output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for table and row identifiers
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for empty cells and hints
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Yellow for computed cells
    pub fn derived(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Shortest decimal form: `5`, `2.33`, `-0.5`.
    pub fn number(value: f64) -> String {
        format!("{}", value)
    }

    /// Right-align `text` in a column of `width` characters.
    pub fn pad(text: &str, width: usize) -> String {
        format!("{:>width$}", text, width = width)
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
