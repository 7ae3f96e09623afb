//! HTTP client for the prediction service.

use super::{Audience, BatchPrediction, Classifier, ClassifierError, Explanation, Features, ModelKind, Prediction};
use crate::config::ServiceConfig;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde_json::json;
use std::path::Path;
use std::time::Duration;

pub struct HttpClassifier {
    client: Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, ClassifierError> {
        Self::new(config.base_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: RequestBuilder, what: &str) -> Result<String, ClassifierError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("classifier: {} failed with {}", what, status);
            return Err(ClassifierError::Service {
                status: status.as_u16(),
                body,
            });
        }
        debug!("classifier: {} returned {} bytes", what, body.len());
        Ok(body)
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    fn service_name(&self) -> &str {
        &self.base_url
    }

    async fn classify(&self, model: ModelKind, features: &Features) -> Result<Prediction, ClassifierError> {
        info!("classifier: single prediction with {}", model);
        let request = self.client.post(self.endpoint("predict")).json(&json!({
            "model": model.wire_id(),
            "features": features.to_json(),
        }));
        let body = self.send(request, "predict").await?;
        Prediction::from_json(&body)
    }

    async fn classify_file(&self, model: ModelKind, path: &Path) -> Result<BatchPrediction, ClassifierError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ClassifierError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        info!("classifier: batch prediction of {} ({} bytes) with {}", file_name, bytes.len(), model);

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;
        let form = Form::new().text("model", model.wire_id()).part("file", part);
        let request = self.client.post(self.endpoint("predict/batch")).multipart(form);
        let body = self.send(request, "predict/batch").await?;
        BatchPrediction::from_json(&body)
    }

    async fn explain(&self, features: &Features, audience: Audience) -> Result<Explanation, ClassifierError> {
        info!("classifier: explanation for {:?}", audience);
        let request = self.client.post(self.endpoint("explain")).json(&json!({
            "features": features.to_json(),
            "audience": audience,
        }));
        let body = self.send(request, "explain").await?;
        Explanation::from_json(&body)
    }
}
