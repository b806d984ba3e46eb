//! Wire types for the tracking server REST API

use serde::Deserialize;

/// An experiment registered with the tracking server
///
/// Servers attach more fields than these; unknown ones are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Experiment {
    pub experiment_id: String,
    pub name: String,
    #[serde(default)]
    pub artifact_location: Option<String>,
    #[serde(default)]
    pub lifecycle_stage: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateExperimentResponse {
    pub experiment_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetExperimentByNameResponse {
    pub experiment: Experiment,
}

/// Error payload the tracking API returns for non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error_code: String,
    #[serde(default)]
    pub message: String,
}
