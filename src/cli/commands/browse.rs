//! folio browse - the interactive site

use crate::config::SiteConfig;
use crate::error::Result;
use crate::tui::run_site_tui;

pub fn run(config: &SiteConfig) -> Result<()> {
    run_site_tui(config.clone())
}
