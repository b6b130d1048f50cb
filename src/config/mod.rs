// src/config/mod.rs
mod models;

pub use models::*;

/// Pre-flight configuration failures, reported as WARNING before any network activity.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("url is required")]
    MissingUrl,
}

impl CheckConfig {
    /// Validate the parsed configuration before the check runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        Ok(())
    }
}
