//! Error types for configuration loading and validation

pub mod format;

use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error
    #[error("Failed to read configuration file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error with context
    #[error("Failed to parse YAML configuration{location}:\n{message}\n{context}")]
    YamlError {
        location: String,
        message: String,
        context: String,
    },

    /// Field name not recognized by the target settings section
    #[error("Unknown field '{field}' in {section} settings\n  Known fields: {known}\n  Hint: {hint}")]
    UnknownField {
        section: String,
        field: String,
        known: String,
        hint: String,
    },

    /// Value could not be converted to the field's type
    #[error("Invalid value '{value}' for {field}: expected {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
        value: String,
    },

    /// Generic validation error
    #[error("Validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl ConfigError {
    /// Create an unknown field error with a suggestion
    pub fn unknown_field(
        section: impl Into<String>,
        field: impl Into<String>,
        known: &[&str],
    ) -> Self {
        let field = field.into();
        let hint = Self::suggest_option(&field, known);
        Self::UnknownField {
            section: section.into(),
            field,
            known: known.join(", "),
            hint,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        expected: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            expected,
            value: value.into(),
        }
    }

    /// Create a YAML error from serde_yaml::Error
    pub fn from_yaml_error(err: serde_yaml::Error, content: &str, path: Option<&str>) -> Self {
        let context = extract_yaml_context(&err, content);
        Self::YamlError {
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: err.to_string(),
            context,
        }
    }

    /// Simple string distance for field suggestions (Levenshtein-like)
    fn suggest_option(input: &str, options: &[&str]) -> String {
        let input_lower = input.to_lowercase();
        let closest = options
            .iter()
            .min_by_key(|opt| Self::distance(&input_lower, &opt.to_lowercase()));

        match closest {
            Some(opt) if Self::distance(&input_lower, &opt.to_lowercase()) <= 3 => {
                format!("Did you mean '{}'?", opt)
            }
            _ => "Check your configuration file".to_string(),
        }
    }

    /// Simple character distance calculation
    fn distance(a: &str, b: &str) -> usize {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();

        for (i, a_char) in a_chars.iter().enumerate() {
            let mut curr_row = vec![i + 1];
            for (j, b_char) in b_chars.iter().enumerate() {
                let cost = if a_char == b_char { 0 } else { 1 };
                curr_row.push(
                    *[
                        curr_row[j] + 1,     // insertion
                        prev_row[j + 1] + 1, // deletion
                        prev_row[j] + cost,  // substitution
                    ]
                    .iter()
                    .min()
                    .unwrap(),
                );
            }
            prev_row = curr_row;
        }

        *prev_row.last().unwrap_or(&0)
    }
}

/// Extract context from YAML error
fn extract_yaml_context(err: &serde_yaml::Error, content: &str) -> String {
    if let Some(loc) = err.location() {
        let line_num = loc.line();
        let lines: Vec<&str> = content.lines().collect();

        if line_num > 0 && line_num <= lines.len() {
            let start = line_num.saturating_sub(2);
            let end = (line_num + 1).min(lines.len());

            return lines[start..end]
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let num = start + i + 1;
                    if num == line_num {
                        format!("→ {:3} | {}", num, line)
                    } else {
                        format!("  {:3} | {}", num, line)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
        }
    }

    String::new()
}
