#[path = "support/fake_classifier.rs"]
mod fake_classifier;

use exoview::classifier::{
    Audience, BatchPrediction, BatchSummary, ClassifierError, Explanation, Features, HttpClassifier, ModelKind,
    Prediction, FEATURE_FIELDS,
};
use exoview::config::ServiceConfig;
use exoview::records::Disposition;
use exoview::ui::core::{Action, JobManager};
use fake_classifier::FakeClassifier;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_prediction_decoding() {
    let p = Prediction::from_json(r#"{"classification": "CONFIRMED", "confidence": 0.931}"#).unwrap();
    assert_eq!(p.classification, Disposition::Confirmed);
    assert!((p.confidence.unwrap() - 93.1).abs() < 1e-9);
    assert!(p.id.is_none());

    let aliased = Prediction::from_json(r#"{"id": 42, "prediction": "FP", "confidence": "71%"}"#).unwrap();
    assert_eq!(aliased.classification, Disposition::FalsePositive);
    assert_eq!(aliased.id.as_deref(), Some("42"));
    assert_eq!(aliased.confidence, Some(71.0));

    let bare = Prediction::from_json(r#"{"label": "candidate"}"#).unwrap();
    assert_eq!(bare.classification, Disposition::Candidate);
    assert!(bare.confidence.is_none());
}

#[test]
fn test_prediction_without_classification_is_a_decode_error() {
    assert!(matches!(
        Prediction::from_json(r#"{"confidence": 0.5}"#),
        Err(ClassifierError::Decode(_))
    ));
    assert!(matches!(Prediction::from_json("not json"), Err(ClassifierError::Decode(_))));
}

#[test]
fn test_batch_decoding_and_summary() {
    let body = r#"{
        "predictions": [
            {"classification": "CONFIRMED", "confidence": 0.9},
            {"classification": "CONFIRMED", "confidence": 0.7},
            {"classification": "FALSE POSITIVE"},
            {"classification": "CANDIDATE", "confidence": 0.5}
        ],
        "total_candidates": 10
    }"#;
    let batch = BatchPrediction::from_json(body).unwrap();
    let summary = batch.summary();
    assert_eq!(summary.total, 10);
    assert_eq!(summary.confirmed, 2);
    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.false_positives, 1);
    assert!((summary.confidence.unwrap() - 70.0).abs() < 1e-9);
}

#[test]
fn test_batch_summary_counts_predictions_without_total() {
    let summary = BatchSummary::from_predictions(&[], None);
    assert_eq!(summary, BatchSummary::default());

    let batch = BatchPrediction::from_json(r#"{"results": [{"classification": "PC"}]}"#).unwrap();
    assert_eq!(batch.summary().total, 1);
    assert!(matches!(BatchPrediction::from_json("{}"), Err(ClassifierError::Decode(_))));
}

#[test]
fn test_explanation_decoding() {
    assert_eq!(Explanation::from_json(r#""plain""#).unwrap().content, "plain");
    assert_eq!(
        Explanation::from_json(r#"{"explanation": "detailed"}"#).unwrap().content,
        "detailed"
    );
    assert!(Explanation::from_json(r#"{"other": 1}"#).is_err());
}

#[test]
fn test_features_parse() {
    let mut inputs = vec![String::new(); FEATURE_FIELDS.len()];
    inputs[0] = "1234.01".to_string();
    inputs[5] = " 2.5 ".to_string();
    let features = Features::parse(&inputs).unwrap();
    assert_eq!(features.get("toi"), Some(1234.01));
    assert_eq!(features.get("pl_rade"), Some(2.5));
    assert_eq!(features.get("st_teff"), Some(0.0));
    assert_eq!(features.iter().count(), FEATURE_FIELDS.len());
    assert_eq!(features.to_json()["pl_rade"], serde_json::json!(2.5));

    // Missing trailing inputs read as blank
    assert!(Features::parse(&["1"]).is_ok());
}

#[test]
fn test_features_reject_non_numbers() {
    let err = Features::parse(&["1", "east"]).unwrap_err();
    assert!(matches!(err, ClassifierError::Validation(_)));
    assert!(err.to_string().contains("Right Ascension"));
    assert!(Features::parse(&["inf"]).is_err());
}

#[test]
fn test_model_kind_parse() {
    assert_eq!(ModelKind::parse("Random Forest"), Some(ModelKind::RandomForest));
    assert_eq!(ModelKind::parse("XGB"), Some(ModelKind::XgBoost));
    assert_eq!(ModelKind::parse("light_gbm"), Some(ModelKind::LightGbm));
    assert_eq!(ModelKind::parse("svm"), None);
    for model in ModelKind::ALL {
        assert_eq!(ModelKind::parse(model.wire_id()), Some(model));
        assert_eq!(ModelKind::parse(model.display_name()), Some(model));
    }
}

#[test]
fn test_audience_toggle() {
    assert_eq!(Audience::default(), Audience::General);
    assert_eq!(Audience::General.toggled(), Audience::Scientist);
    assert_eq!(Audience::Scientist.toggled().toggled(), Audience::Scientist);
}

#[test]
fn test_http_endpoints() {
    let client = HttpClassifier::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(client.endpoint("/predict/batch"), "http://localhost:8000/predict/batch");

    let from_config = HttpClassifier::from_config(&ServiceConfig::default()).unwrap();
    assert_eq!(from_config.endpoint("explain"), "http://127.0.0.1:8000/explain");
}

#[tokio::test]
async fn test_classify_job_delivers_prediction() {
    let classifier = Arc::new(FakeClassifier::default());
    let (mut jobs, mut rx) = JobManager::new();
    let features = Features::parse(&["1", "2", "3", "4", "5", "30"]).unwrap();

    jobs.spawn_classify(classifier.clone(), ModelKind::XgBoost, features);
    assert!(jobs.is_busy());
    assert_eq!(jobs.descriptions(), vec!["Classify with XGBOOST".to_string()]);

    match rx.recv().await {
        Some(Action::PredictionReady(p)) => assert_eq!(p.classification, Disposition::FalsePositive),
        other => panic!("unexpected {:?}", other.map(|a| a.name())),
    }
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn test_failed_jobs_report_errors() {
    let classifier = Arc::new(FakeClassifier::failing());
    let (mut jobs, mut rx) = JobManager::new();

    jobs.spawn_classify(classifier.clone(), ModelKind::LightGbm, Features::default());
    match rx.recv().await {
        Some(Action::ClassificationFailed(message)) => assert!(message.contains("503")),
        other => panic!("unexpected {:?}", other.map(|a| a.name())),
    }

    jobs.spawn_explain(classifier, Features::default(), Audience::Scientist);
    assert!(matches!(rx.recv().await, Some(Action::ExplanationFailed(_))));
}

#[tokio::test]
async fn test_overlapping_requests_both_resolve() {
    let classifier = Arc::new(FakeClassifier::default());
    let (mut jobs, mut rx) = JobManager::new();

    jobs.spawn_explain(classifier.clone(), Features::default(), Audience::General);
    jobs.spawn_explain(classifier.clone(), Features::default(), Audience::Scientist);

    let mut contents = Vec::new();
    for _ in 0..2 {
        if let Some(Action::ExplanationReady(e)) = rx.recv().await {
            contents.push(e.content);
        }
    }
    contents.sort();
    assert_eq!(contents, vec!["Explained for General public", "Explained for Scientist"]);
}

#[tokio::test]
async fn test_curve_load_job_reports_missing_file() {
    let (mut jobs, mut rx) = JobManager::new();
    let dir = tempfile::tempdir().unwrap();
    jobs.spawn_curve_load(dir.path().join("missing.csv"));
    assert!(matches!(rx.recv().await, Some(Action::CurvesFailed(_))));

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(jobs.cleanup_finished_jobs().len(), 1);
    assert!(!jobs.is_busy());
}
