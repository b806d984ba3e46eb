//! Configuration type definitions
//!
//! This module contains the settings structures organized by concern.
//! Each type is self-contained with validation and sensible defaults.

pub mod database;
pub mod mlflow;

pub use database::DatabaseSettings;
pub use mlflow::MlflowSettings;

use serde::{Deserialize, Serialize};

/// Root settings object aggregating all sub-sections
///
/// Constructed once at startup via [`Settings::load`] or one of the
/// explicit loaders, then treated as read-only for the process lifetime.
/// Reloading means building a fresh object and swapping it in whole, not
/// mutating fields in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Experiment tracking settings
    #[serde(default)]
    pub mlflow: MlflowSettings,

    /// Backing database connection settings
    #[serde(default)]
    pub database: DatabaseSettings,
}

impl Settings {
    /// Top-level section names accepted in a configuration document
    pub const SECTIONS: &'static [&'static str] = &["mlflow", "database"];
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mlflow: MlflowSettings::default(),
            database: DatabaseSettings::default(),
        }
    }
}

impl crate::validation::Validate for Settings {
    fn validate(&self) -> crate::error::Result<()> {
        // Validate each sub-section
        self.mlflow.validate()?;
        self.database.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_section_fails_root() {
        let settings = Settings {
            mlflow: MlflowSettings {
                tracking_uri: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
