//! Terminal UI for the portfolio site.

pub mod animate;
pub mod site;

pub use site::{SiteTui, run_site_tui};
