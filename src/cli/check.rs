//! Config validation command.

use crate::config::Landing;
use crate::log;
use anyhow::Result;
use std::path::Path;

/// Load and validate the config, printing every problem at once.
pub fn check_config(path: &Path) -> Result<()> {
    let config = Landing::load(path)?;
    match config.validate() {
        Ok(()) => {
            log!("check"; "{} is valid", path.display());
            Ok(())
        }
        Err(diag) => {
            eprintln!("{diag}");
            anyhow::bail!("{} config error(s) in {}", diag.len(), path.display())
        }
    }
}
