//! Remote classification service.
//!
//! The dashboard never runs a model itself. It collects feature values or a
//! CSV file, forwards them to the prediction service and renders whatever
//! comes back. This module defines the interface to that service, the shared
//! request/response types and the error type every implementation reports.

use async_trait::async_trait;
use std::path::Path;

pub mod http;
pub mod types;

pub use http::HttpClassifier;
pub use types::{
    Audience, BatchPrediction, BatchSummary, Explanation, FeatureField, Features, ModelKind, Prediction,
    FEATURE_FIELDS,
};

/// Errors reported by classification calls.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// User input rejected before any request was sent.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClassifierError::Decode(err.to_string())
        } else {
            ClassifierError::Transport(err.to_string())
        }
    }
}

/// Interface to a prediction service.
///
/// Calls are independent: no retry, no caching. A caller that issues a new
/// request before the previous one resolves simply receives both answers.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Short identifier used in logs and the status bar.
    fn service_name(&self) -> &str;

    /// Classify one candidate from its feature values.
    async fn classify(&self, model: ModelKind, features: &Features) -> Result<Prediction, ClassifierError>;

    /// Classify every row of a CSV file.
    async fn classify_file(&self, model: ModelKind, path: &Path) -> Result<BatchPrediction, ClassifierError>;

    /// Ask for a plain-language explanation of a feature set.
    async fn explain(&self, features: &Features, audience: Audience) -> Result<Explanation, ClassifierError>;
}
