//! Client for the MLflow tracking server
//!
//! This crate covers the small slice of the tracking REST API the rest of
//! the workspace needs: creating an experiment at startup and resolving
//! one that already exists. Calls are blocking; there is no retry policy.
//!
//! # Example
//!
//! ```no_run
//! use mlrig_tracking::TrackingClient;
//!
//! let client = TrackingClient::new("http://localhost:5000")?;
//! let experiment_id = client.ensure_experiment("DefaultExperiment", None)?;
//! # Ok::<(), mlrig_tracking::TrackingError>(())
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::TrackingClient;
pub use error::{Result, TrackingError, RESOURCE_ALREADY_EXISTS};
pub use types::Experiment;
