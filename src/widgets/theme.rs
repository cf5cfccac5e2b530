//! Theme resolution and persistence.
//!
//! Resolution is tri-state: a stored preference wins, then the OS
//! color-scheme hint, then the configured default. Preferences live in
//! `.lander/prefs.json` under the project root so they survive restarts.

use crate::config::ThemeMode;
use crate::debug;
use serde::{Deserialize, Serialize};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const PREFS_DIR: &str = ".lander";
const PREFS_FILE: &str = "prefs.json";

/// OS color-scheme hint, injected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemeHint {
    Light,
    Dark,
    #[default]
    NoPreference,
}

impl SchemeHint {
    /// Hint from the `LANDER_COLOR_SCHEME` environment variable.
    pub fn from_env() -> Self {
        match env::var("LANDER_COLOR_SCHEME").as_deref() {
            Ok("light") => Self::Light,
            Ok("dark") => Self::Dark,
            _ => Self::NoPreference,
        }
    }

    fn as_mode(self) -> Option<ThemeMode> {
        match self {
            Self::Light => Some(ThemeMode::Light),
            Self::Dark => Some(ThemeMode::Dark),
            Self::NoPreference => None,
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub theme: Option<ThemeMode>,
}

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(PREFS_DIR).join(PREFS_FILE),
        }
    }

    /// Read preferences. A missing or unreadable file yields defaults.
    pub fn load(&self) -> Prefs {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Prefs::default();
        };
        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(err) => {
                debug!("theme"; "ignoring corrupt prefs file: {err}");
                Prefs::default()
            }
        }
    }

    pub fn save(&self, prefs: &Prefs) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(prefs).map_err(io::Error::other)?;
        fs::write(&self.path, content)
    }
}

/// Effective theme: stored preference, else OS hint, else configured default.
pub fn resolve(store: &PrefsStore, hint: SchemeHint, default: ThemeMode) -> ThemeMode {
    store
        .load()
        .theme
        .or_else(|| hint.as_mode())
        .unwrap_or(default)
}

/// Flip the effective theme and persist the result as the stored preference.
pub fn toggle(store: &PrefsStore, hint: SchemeHint, default: ThemeMode) -> io::Result<ThemeMode> {
    let next = resolve(store, hint, default).toggled();
    let mut prefs = store.load();
    prefs.theme = Some(next);
    store.save(&prefs)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_wins_without_pref_or_hint() {
        let dir = tempdir().unwrap();
        let store = PrefsStore::new(dir.path());

        assert_eq!(
            resolve(&store, SchemeHint::NoPreference, ThemeMode::Dark),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_os_hint_beats_default() {
        let dir = tempdir().unwrap();
        let store = PrefsStore::new(dir.path());

        assert_eq!(
            resolve(&store, SchemeHint::Light, ThemeMode::Dark),
            ThemeMode::Light
        );
    }

    #[test]
    fn test_stored_pref_beats_hint() {
        let dir = tempdir().unwrap();
        let store = PrefsStore::new(dir.path());
        store
            .save(&Prefs {
                theme: Some(ThemeMode::Dark),
            })
            .unwrap();

        assert_eq!(
            resolve(&store, SchemeHint::Light, ThemeMode::Dark),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_toggle_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let store = PrefsStore::new(dir.path());

        let toggled = toggle(&store, SchemeHint::NoPreference, ThemeMode::Dark).unwrap();
        assert_eq!(toggled, ThemeMode::Light);

        // Simulated reload: fresh store over the same directory
        let reopened = PrefsStore::new(dir.path());
        assert_eq!(
            resolve(&reopened, SchemeHint::NoPreference, ThemeMode::Dark),
            ThemeMode::Light
        );
    }

    #[test]
    fn test_double_toggle_returns_to_start() {
        let dir = tempdir().unwrap();
        let store = PrefsStore::new(dir.path());

        toggle(&store, SchemeHint::NoPreference, ThemeMode::Dark).unwrap();
        toggle(&store, SchemeHint::NoPreference, ThemeMode::Dark).unwrap();

        assert_eq!(
            resolve(&store, SchemeHint::NoPreference, ThemeMode::Dark),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_corrupt_prefs_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let store = PrefsStore::new(dir.path());
        fs::create_dir_all(dir.path().join(PREFS_DIR)).unwrap();
        fs::write(dir.path().join(PREFS_DIR).join(PREFS_FILE), "{not json").unwrap();

        assert_eq!(
            resolve(&store, SchemeHint::NoPreference, ThemeMode::Dark),
            ThemeMode::Dark
        );
    }
}
