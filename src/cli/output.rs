//! Output format handling shared by the command handlers.

use clap::ValueEnum;
use console::style;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Section heading, colored only for human output.
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        if self.use_colors() {
            style(text).cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// De-emphasized detail line.
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        if self.use_colors() {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_readable_formats() {
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(!OutputFormat::Human.is_machine_readable());
        assert!(!OutputFormat::Plain.is_machine_readable());
    }

    #[test]
    fn plain_heading_is_unstyled() {
        assert_eq!(OutputFormat::Plain.heading("Projects"), "Projects");
    }
}
