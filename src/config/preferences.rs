//! The primary-viewer preference.
//!
//! The original client kept "which participant is me" in browser storage
//! and pushed changes to subscribers; here it is a small TOML file read
//! once per command and passed down as a plain parameter, so nothing can
//! observe a stale value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Locally persisted preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    /// The participant whose perspective colors amounts and balance text
    pub primary_user_id: Option<i64>,
}

impl Preferences {
    /// Loads preferences from `path`. A missing file is not an error; it
    /// yields the defaults.
    ///
    /// # Errors
    /// I/O failures other than a missing file, or an unparseable file.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(toml::from_str(&raw)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(error.into()),
        }
    }

    /// Persists preferences to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
