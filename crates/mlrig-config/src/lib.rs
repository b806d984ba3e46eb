//! Configuration management for mlrig
//!
//! This crate provides a small, validated settings system with support for:
//! - YAML configuration files with strict field checking
//! - Environment variable overrides with a configurable name prefix
//! - Wholesale sub-section replacement (a source rebuilds a whole
//!   section, it never patches single fields into one)
//! - Type-safe settings structs
//!
//! # Example
//!
//! ```no_run
//! use mlrig_config::Settings;
//!
//! // Load from default locations (config.{yaml,yml}) plus environment
//! let settings = Settings::load()?;
//!
//! // Or load from a specific file
//! let settings = Settings::from_file("path/to/config.yaml")?;
//!
//! // Access settings values
//! let tracking_uri = &settings.mlflow.tracking_uri;
//! let db_uri = settings.database.uri();
//! # Ok::<(), mlrig_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, Result};
pub use loader::SettingsBuilder;
pub use types::*;

/// Trait for settings validation
pub use validation::Validate;
