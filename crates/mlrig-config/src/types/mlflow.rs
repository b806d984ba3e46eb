//! Experiment tracking settings

use serde::{Deserialize, Serialize};

/// Settings for the MLflow tracking server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MlflowSettings {
    /// Base URI of the tracking server. Always non-empty.
    #[serde(default = "default_tracking_uri")]
    pub tracking_uri: String,

    /// Experiment to record runs under; callers pick a fallback name
    /// when unset
    #[serde(default)]
    pub experiment_name: Option<String>,

    /// Root location for run artifacts; the server chooses one when unset
    #[serde(default)]
    pub artifact_location: Option<String>,
}

impl MlflowSettings {
    /// Field names accepted from YAML mappings and environment variables
    pub const FIELDS: &'static [&'static str] =
        &["tracking_uri", "experiment_name", "artifact_location"];
}

impl Default for MlflowSettings {
    fn default() -> Self {
        Self {
            tracking_uri: default_tracking_uri(),
            experiment_name: None,
            artifact_location: None,
        }
    }
}

impl crate::validation::Validate for MlflowSettings {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_non_empty("mlflow.tracking_uri", &self.tracking_uri)
    }
}

fn default_tracking_uri() -> String {
    "http://localhost:5000".to_string()
}
