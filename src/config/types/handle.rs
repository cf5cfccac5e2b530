//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! This lets the dev server pick up `landing.json` edits between requests.

use crate::config::Landing;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};
use std::time::SystemTime;

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<Landing>> =
    LazyLock::new(|| ArcSwap::from_pointee(Landing::default()));

/// Modification time of the config file when it was last loaded.
static CONFIG_MTIME: parking_lot::Mutex<Option<SystemTime>> = parking_lot::Mutex::new(None);

#[inline]
pub fn cfg() -> Arc<Landing> {
    CONFIG.load_full()
}

/// Reload config from disk if the file changed since the last load.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
/// A reload failure leaves the previous config in place.
pub fn reload_config() -> Result<bool> {
    let current = cfg();

    let mtime = std::fs::metadata(&current.config_path)?.modified()?;
    {
        let last = CONFIG_MTIME.lock();
        if *last == Some(mtime) {
            return Ok(false);
        }
    }

    let new_config = Landing::load(&current.config_path)?;
    CONFIG.store(Arc::new(new_config));
    *CONFIG_MTIME.lock() = Some(mtime);

    Ok(true)
}

#[inline]
pub fn init_config(config: Landing) -> Arc<Landing> {
    if let Ok(meta) = std::fs::metadata(&config.config_path)
        && let Ok(mtime) = meta.modified()
    {
        *CONFIG_MTIME.lock() = Some(mtime);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
