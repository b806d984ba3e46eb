//! File-based configuration loading

use crate::{error::ConfigError, Result, Settings, Validate};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load settings from a YAML file
///
/// A missing file is reported as [`ConfigError::FileNotFound`]; any other
/// read failure keeps its underlying IO error.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    // Read file contents
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    // Parse with the path threaded through for error messages
    let settings = super::yaml::parse_with_path(&content, path.to_str())?;

    // Validate before returning
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let result = load_from_file("no-such-config.yaml");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "database:\n  host: db1\n").unwrap();

        let settings = load_from_file(&path).unwrap();
        assert_eq!(settings.database.host, "db1");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "mlflow:\n  tracking_uri: \"\"\n").unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
