use thiserror::Error;

/// Unified error type for all `SplitBuddy` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Command error: {message}")]
    Command { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Store request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store returned HTTP {status} from {endpoint}: {body}")]
    Store {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Store returned an empty result set from {endpoint}")]
    EmptyResult { endpoint: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preference file parse error: {0}")]
    PreferencesParse(#[from] toml::de::Error),

    #[error("Preference file write error: {0}")]
    PreferencesWrite(#[from] toml::ser::Error),

    #[error("User {id} not found")]
    UserNotFound { id: i64 },

    #[error("Category {id} not found")]
    CategoryNotFound { id: i64 },

    #[error("Expense {id} not found")]
    ExpenseNotFound { id: i64 },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
