//! Minimal client for the MLflow tracking server REST API
//!
//! Covers the two experiment calls needed at startup. All requests are
//! synchronous; the caller decides what a failure means.

use crate::error::{Result, TrackingError};
use crate::types::{ApiErrorBody, CreateExperimentResponse, Experiment, GetExperimentByNameResponse};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

pub struct TrackingClient {
    http: Client,
    base_url: String,
}

impl TrackingClient {
    /// Create a client for the server at `tracking_uri`
    pub fn new(tracking_uri: &str) -> Result<Self> {
        Ok(Self {
            http: Client::builder().build()?,
            base_url: tracking_uri.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api/2.0/mlflow/{}", self.base_url, endpoint)
    }

    /// Register a new experiment and return its id
    ///
    /// Fails with the server's `RESOURCE_ALREADY_EXISTS` code when the
    /// name is already taken.
    pub fn create_experiment(
        &self,
        name: &str,
        artifact_location: Option<&str>,
    ) -> Result<String> {
        let mut payload = json!({ "name": name });
        if let Some(location) = artifact_location {
            payload["artifact_location"] = json!(location);
        }

        let response = self
            .http
            .post(self.api_url("experiments/create"))
            .json(&payload)
            .send()?;

        let created: CreateExperimentResponse = read_json(response)?;
        Ok(created.experiment_id)
    }

    /// Look up an experiment by its exact name
    pub fn get_experiment_by_name(&self, name: &str) -> Result<Experiment> {
        let response = self
            .http
            .get(self.api_url("experiments/get-by-name"))
            .query(&[("experiment_name", name)])
            .send()?;

        let found: GetExperimentByNameResponse = read_json(response)?;
        Ok(found.experiment)
    }

    /// Create the experiment, or resolve the existing one on a name clash
    ///
    /// Returns the experiment id either way. Only the server's duplicate
    /// code triggers the lookup path; every other error propagates.
    pub fn ensure_experiment(
        &self,
        name: &str,
        artifact_location: Option<&str>,
    ) -> Result<String> {
        match self.create_experiment(name, artifact_location) {
            Ok(experiment_id) => {
                debug!(name, %experiment_id, "created experiment");
                Ok(experiment_id)
            }
            Err(e) if e.is_already_exists() => {
                debug!(name, "experiment already exists, reusing it");
                let experiment = self.get_experiment_by_name(name)?;
                Ok(experiment.experiment_id)
            }
            Err(e) => Err(e),
        }
    }
}

/// Decode a success body as JSON, or a failure body as a tracking error
fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json()?);
    }

    let body = response.text()?;
    Err(api_error(status.as_u16(), body))
}

/// Turn a non-success body into the structured API error when possible
fn api_error(status: u16, body: String) -> TrackingError {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => TrackingError::Api {
            code: parsed.error_code,
            message: parsed.message,
        },
        Err(_) => TrackingError::UnexpectedResponse { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_endpoint() {
        let client = TrackingClient::new("http://localhost:5000").unwrap();
        assert_eq!(
            client.api_url("experiments/create"),
            "http://localhost:5000/api/2.0/mlflow/experiments/create"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = TrackingClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.api_url("experiments/get-by-name"),
            "http://localhost:5000/api/2.0/mlflow/experiments/get-by-name"
        );
    }

    #[test]
    fn test_api_error_with_structured_body() {
        let body = r#"{"error_code": "RESOURCE_ALREADY_EXISTS", "message": "Experiment 'churn' already exists."}"#;
        let err = api_error(400, body.to_string());
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_api_error_with_opaque_body() {
        let err = api_error(502, "<html>Bad Gateway</html>".to_string());
        match err {
            TrackingError::UnexpectedResponse { status, .. } => assert_eq!(status, 502),
            other => panic!("expected UnexpectedResponse, got {:?}", other),
        }
    }
}
