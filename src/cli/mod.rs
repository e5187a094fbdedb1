//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Folio - a personal portfolio site that lives in your terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Force plain output (no colors, no Unicode)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Effective output format.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → explicit format
    /// 3. `--json` → JSON shorthand
    /// 4. default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }
        if let Some(fmt) = self.output_format {
            return fmt;
        }
        if self.json {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }

    /// Whether colors should be suppressed.
    #[must_use]
    pub fn force_plain(&self) -> bool {
        self.plain || self.color == Some(ColorMode::Never)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive site (requires a terminal)
    Browse,
    /// List featured projects, optionally filtered by category
    Projects(commands::projects::ProjectsArgs),
    /// Show the about section: awards, skills, and optionally the FAQ
    About(commands::about::AboutArgs),
    /// Show the work-history timeline
    Experience,
    /// Validate and send a contact message from the command line
    Send(commands::send::SendArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_format_priority() {
        let cli = Cli::parse_from(["folio", "--plain", "--json", "projects"]);
        assert_eq!(cli.output_format(), OutputFormat::Plain);

        let cli = Cli::parse_from(["folio", "--json", "projects"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);

        let cli = Cli::parse_from(["folio", "projects"]);
        assert_eq!(cli.output_format(), OutputFormat::Human);
    }

    #[test]
    fn category_flag_parses() {
        let cli = Cli::parse_from(["folio", "projects", "--category", "Branding"]);
        let Commands::Projects(args) = cli.command else {
            panic!("expected projects command");
        };
        assert_eq!(args.category.as_deref(), Some("Branding"));
    }
}
