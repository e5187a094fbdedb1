//! Command handlers, one module per subcommand.

use crate::cli::{Cli, Commands};
use crate::config::SiteConfig;
use crate::error::Result;

pub mod about;
pub mod browse;
pub mod experience;
pub mod projects;
pub mod send;

/// Dispatch the parsed subcommand.
pub fn run(config: &SiteConfig, cli: &Cli) -> Result<()> {
    let format = cli.output_format();
    match &cli.command {
        Commands::Browse => browse::run(config),
        Commands::Projects(args) => projects::run(format, args),
        Commands::About(args) => about::run(format, args),
        Commands::Experience => experience::run(format),
        Commands::Send(args) => send::run(config, format, args),
    }
}
