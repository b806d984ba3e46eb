//! Experiment bootstrap for mlrig
//!
//! Loads settings, points a tracking client at the configured server, and
//! makes sure the configured experiment exists before any run starts.

use anyhow::{Context, Result};
use mlrig_config::error::ErrorFormatter;
use mlrig_config::Settings;
use mlrig_tracking::TrackingClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Experiment used when the settings do not name one
const FALLBACK_EXPERIMENT: &str = "DefaultExperiment";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new(e));
            std::process::exit(1);
        }
    };

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    info!(
        tracking_uri = %settings.mlflow.tracking_uri,
        db_host = %settings.database.host,
        db_name = %settings.database.database,
        "settings loaded"
    );

    let client = TrackingClient::new(&settings.mlflow.tracking_uri)
        .context("failed to build tracking client")?;

    let experiment_name = settings
        .mlflow
        .experiment_name
        .as_deref()
        .unwrap_or(FALLBACK_EXPERIMENT);

    let experiment_id = client
        .ensure_experiment(experiment_name, settings.mlflow.artifact_location.as_deref())
        .with_context(|| format!("failed to initialize experiment '{}'", experiment_name))?;

    info!(experiment = experiment_name, %experiment_id, "experiment ready");

    Ok(())
}
