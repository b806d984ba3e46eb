//! Validation trait and implementations for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this trait for any settings type that needs checks beyond
/// what the type system enforces. Validation runs after every load so
/// callers never observe a settings object that breaks an invariant.
pub trait Validate {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what validation failed and why.
    fn validate(&self) -> Result<()>;
}

/// Helper function to validate that a required string is non-empty
pub fn validate_non_empty(field: impl Into<String>, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: field.into(),
            message: "value must be a non-empty string".to_string(),
        });
    }
    Ok(())
}
