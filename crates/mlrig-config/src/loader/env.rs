//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `{PREFIX}MLFLOW_<field>` and `{PREFIX}DB_<field>`
//!
//! Examples with the prefix `MLRIG_`:
//! - `MLRIG_MLFLOW_TRACKING_URI=http://remote:5000`
//! - `MLRIG_MLFLOW_EXPERIMENT_NAME=churn`
//! - `MLRIG_DB_PORT=5432`
//!
//! The field portion is matched case-insensitively after the prefix is
//! stripped. A variable that matches a section prefix but names no known
//! field is an error, not a warning.

use crate::{error::ConfigError, DatabaseSettings, MlflowSettings, Result};
use std::env;

/// Sub-sections rebuilt from environment variables
///
/// A `None` section had no matching variables and must not disturb
/// whatever value the caller already holds for it.
#[derive(Debug, Default)]
pub(crate) struct EnvSections {
    pub mlflow: Option<MlflowSettings>,
    pub database: Option<DatabaseSettings>,
}

/// Scan the environment for settings variables under the given prefix
///
/// Each matched section starts from its defaults, so the result replaces
/// a section wholesale rather than patching single fields into it.
pub(crate) fn scan(prefix: &str) -> Result<EnvSections> {
    let mlflow_prefix = format!("{}MLFLOW_", prefix);
    let database_prefix = format!("{}DB_", prefix);

    let mut vars: Vec<(String, String)> = env::vars()
        .filter(|(k, _)| k.starts_with(&mlflow_prefix) || k.starts_with(&database_prefix))
        .collect();
    // Stable application order when two keys collide after lowercasing
    vars.sort();

    let mut sections = EnvSections::default();

    for (key, value) in vars {
        if let Some(rest) = key.strip_prefix(&mlflow_prefix) {
            let field = rest.to_ascii_lowercase();
            let mlflow = sections.mlflow.get_or_insert_with(MlflowSettings::default);
            apply_mlflow_var(mlflow, &field, &value)?;
        } else if let Some(rest) = key.strip_prefix(&database_prefix) {
            let field = rest.to_ascii_lowercase();
            let database = sections
                .database
                .get_or_insert_with(DatabaseSettings::default);
            apply_database_var(database, &field, &value)?;
        }
    }

    Ok(sections)
}

fn apply_mlflow_var(settings: &mut MlflowSettings, field: &str, value: &str) -> Result<()> {
    match field {
        "tracking_uri" => settings.tracking_uri = value.to_string(),
        "experiment_name" => settings.experiment_name = Some(value.to_string()),
        "artifact_location" => settings.artifact_location = Some(value.to_string()),
        _ => {
            return Err(ConfigError::unknown_field(
                "mlflow",
                field,
                MlflowSettings::FIELDS,
            ))
        }
    }
    Ok(())
}

fn apply_database_var(settings: &mut DatabaseSettings, field: &str, value: &str) -> Result<()> {
    match field {
        "host" => settings.host = value.to_string(),
        "port" => {
            settings.port = value
                .parse()
                .map_err(|_| ConfigError::invalid_value("database.port", "a port number", value))?;
        }
        "database" => settings.database = value.to_string(),
        "username" => settings.username = value.to_string(),
        "password" => settings.password = Some(value.to_string()),
        _ => {
            return Err(ConfigError::unknown_field(
                "database",
                field,
                DatabaseSettings::FIELDS,
            ))
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testenv {
    //! Helpers shared by every test that touches process environment
    //! variables. Environment mutation is process-global, so such tests
    //! serialize on one lock and clean up the variables they use.

    use std::env;
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    pub fn lock() -> MutexGuard<'static, ()> {
        // A panicking test poisons the lock; the guard state is just (),
        // so continue with the inner value.
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn clear(prefix: &str) {
        let keys: Vec<String> = env::vars()
            .map(|(k, _)| k)
            .filter(|k| k.starts_with(prefix))
            .collect();
        for key in keys {
            env::remove_var(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testenv::{clear, lock};
    use super::*;

    #[test]
    fn test_scan_no_vars() {
        let _lock = lock();
        clear("MLRIG_");

        let sections = scan("MLRIG_").unwrap();
        assert!(sections.mlflow.is_none());
        assert!(sections.database.is_none());
    }

    #[test]
    fn test_scan_both_sections() {
        let _lock = lock();
        clear("MLRIG_");

        env::set_var("MLRIG_MLFLOW_TRACKING_URI", "http://remote:5000");
        env::set_var("MLRIG_DB_HOST", "db1");
        env::set_var("MLRIG_DB_PASSWORD", "s3cret");

        let sections = scan("MLRIG_").unwrap();
        let mlflow = sections.mlflow.unwrap();
        let database = sections.database.unwrap();
        assert_eq!(mlflow.tracking_uri, "http://remote:5000");
        assert_eq!(database.host, "db1");
        assert_eq!(database.password.as_deref(), Some("s3cret"));
        // Untouched fields come from section defaults
        assert_eq!(database.port, 3306);

        clear("MLRIG_");
    }

    #[test]
    fn test_scan_ignores_unrelated_vars() {
        let _lock = lock();
        clear("MLRIG_");

        env::set_var("MLRIGX_DB_HOST", "other");
        env::set_var("UNRELATED", "value");

        let sections = scan("MLRIG_").unwrap();
        assert!(sections.mlflow.is_none());
        assert!(sections.database.is_none());

        env::remove_var("MLRIGX_DB_HOST");
        env::remove_var("UNRELATED");
    }

    #[test]
    fn test_field_portion_is_case_insensitive() {
        let _lock = lock();
        clear("MLRIG_");

        env::set_var("MLRIG_MLFLOW_Tracking_Uri", "http://x:9000");

        let sections = scan("MLRIG_").unwrap();
        assert_eq!(sections.mlflow.unwrap().tracking_uri, "http://x:9000");

        clear("MLRIG_");
    }

    #[test]
    fn test_unknown_field_is_error() {
        let _lock = lock();
        clear("MLRIG_");

        env::set_var("MLRIG_MLFLOW_FOO", "bar");

        let result = scan("MLRIG_");
        match result {
            Err(ConfigError::UnknownField { section, field, .. }) => {
                assert_eq!(section, "mlflow");
                assert_eq!(field, "foo");
            }
            other => panic!("expected UnknownField, got {:?}", other),
        }

        clear("MLRIG_");
    }

    #[test]
    fn test_invalid_port_is_error() {
        let _lock = lock();
        clear("MLRIG_");

        env::set_var("MLRIG_DB_PORT", "not-a-number");

        let result = scan("MLRIG_");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        clear("MLRIG_");
    }

    #[test]
    fn test_apply_database_port() {
        let mut settings = DatabaseSettings::default();
        apply_database_var(&mut settings, "port", "5432").unwrap();
        assert_eq!(settings.port, 5432);
    }
}
