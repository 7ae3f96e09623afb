use async_trait::async_trait;
use exoview::classifier::{
    Audience, BatchPrediction, Classifier, ClassifierError, Explanation, Features, ModelKind, Prediction,
};
use exoview::records::Disposition;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-process service that answers every request without a network.
#[derive(Default)]
pub struct FakeClassifier {
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl FakeClassifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ClassifierError::Service {
                status: 503,
                body: "model offline".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Classifier for FakeClassifier {
    fn service_name(&self) -> &str {
        "fake"
    }

    async fn classify(&self, _model: ModelKind, features: &Features) -> Result<Prediction, ClassifierError> {
        self.record_call()?;
        let classification = if features.get("pl_rade").unwrap_or(0.0) > 20.0 {
            Disposition::FalsePositive
        } else {
            Disposition::Confirmed
        };
        Ok(Prediction {
            id: None,
            classification,
            confidence: Some(87.5),
        })
    }

    async fn classify_file(&self, _model: ModelKind, _path: &Path) -> Result<BatchPrediction, ClassifierError> {
        self.record_call()?;
        BatchPrediction::from_json(
            r#"{"predictions": [{"classification": "CONFIRMED"}, {"classification": "CANDIDATE"}]}"#,
        )
    }

    async fn explain(&self, _features: &Features, audience: Audience) -> Result<Explanation, ClassifierError> {
        self.record_call()?;
        Ok(Explanation {
            content: format!("Explained for {}", audience.label()),
        })
    }
}
