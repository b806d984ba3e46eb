//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod yaml;

use crate::{Result, Settings, Validate};
use std::path::{Path, PathBuf};

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum SettingsSource {
    /// Load from a YAML file
    File(PathBuf),
    /// Load from environment variables with the given name prefix
    Environment { prefix: String },
}

/// Builder for loading settings with explicit precedence
///
/// Sources are applied in the order they are added. A file source rebuilds
/// the whole settings object; an environment source rebuilds a sub-section
/// wholesale when at least one variable matches that section's prefix, and
/// leaves the section untouched otherwise.
///
/// # Example
///
/// ```no_run
/// use mlrig_config::SettingsBuilder;
///
/// let settings = SettingsBuilder::new()
///     .with_file("config.yaml")   // Base config
///     .with_env("MLRIG_")         // Env var overlay
///     .build()?;
/// # Ok::<(), mlrig_config::ConfigError>(())
/// ```
pub struct SettingsBuilder {
    sources: Vec<SettingsSource>,
}

impl SettingsBuilder {
    /// Create a new settings builder starting with defaults
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(SettingsSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add an environment variable overlay with the given prefix
    pub fn with_env(mut self, prefix: impl Into<String>) -> Self {
        self.sources.push(SettingsSource::Environment {
            prefix: prefix.into(),
        });
        self
    }

    /// Build and validate the final settings
    ///
    /// Applies all sources in order, with later sources taking precedence.
    pub fn build(self) -> Result<Settings> {
        let mut settings = Settings::default();

        for source in self.sources {
            match source {
                SettingsSource::File(path) => {
                    settings = file::load_from_file(&path)?;
                }
                SettingsSource::Environment { prefix } => {
                    let sections = env::scan(&prefix)?;
                    if let Some(mlflow) = sections.mlflow {
                        settings.mlflow = mlflow;
                    }
                    if let Some(database) = sections.database {
                        settings.database = database;
                    }
                }
            }
        }

        // Final validation
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Load settings from default locations
    ///
    /// Searches for `config.yaml`, then `config.yml`, in the working
    /// directory. If neither file exists, defaults are used. Environment
    /// variables without a name prefix are applied on top.
    pub fn load() -> Result<Self> {
        let default_paths = ["config.yaml", "config.yml"];

        let mut builder = SettingsBuilder::new();

        // Find first existing file
        for path in &default_paths {
            if Path::new(path).exists() {
                builder = builder.with_file(path);
                break;
            }
        }

        builder = builder.with_env("");

        builder.build()
    }

    /// Load settings from a specific YAML file, no environment overlay
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        SettingsBuilder::new().with_file(path).build()
    }

    /// Load settings from environment variables alone
    ///
    /// Sections with no matching `{prefix}MLFLOW_*` or `{prefix}DB_*`
    /// variables keep their defaults.
    pub fn from_env(prefix: &str) -> Result<Self> {
        SettingsBuilder::new().with_env(prefix).build()
    }
}
