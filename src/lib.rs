pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod delivery;
pub mod error;
pub mod form;
pub mod tui;

pub use error::{FolioError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
