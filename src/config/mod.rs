/// Primary-viewer preference persistence
pub mod preferences;

/// Environment-derived application settings
pub mod settings;

pub use preferences::Preferences;
pub use settings::Settings;
