//! Application settings loaded from the environment.
//!
//! `.env` is loaded in `main` before these run, so values can come from
//! either place. The defaults point at a stock local store gateway, which
//! is where development ledgers live.

use std::path::PathBuf;

/// Default store endpoint for local development.
const DEFAULT_STORE_URL: &str = "http://localhost:54321/rest/v1";

/// Default location of the preference file.
const DEFAULT_PREFERENCES_PATH: &str = "data/preferences.toml";

/// Default store request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the application.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Base URL of the REST data store
    pub store_url: String,
    /// API key attached to store requests, when the store requires one
    pub store_api_key: Option<String>,
    /// Where the primary-viewer preference is persisted
    pub preferences_path: PathBuf,
    /// Store request timeout in seconds
    pub timeout_secs: u64,
}

impl Settings {
    /// Loads settings from `STORE_URL`, `STORE_API_KEY`, `PREFERENCES_PATH`,
    /// and `STORE_TIMEOUT_SECS`, falling back to local-development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let store_url =
            std::env::var("STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let store_api_key = std::env::var("STORE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let preferences_path = std::env::var("PREFERENCES_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_PREFERENCES_PATH), PathBuf::from);
        let timeout_secs = std::env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            store_url,
            store_api_key,
            preferences_path,
            timeout_secs,
        }
    }
}
