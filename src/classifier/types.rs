//! Request and response types for the prediction service.

use super::ClassifierError;
use crate::records::Disposition;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::fmt;

/// Models the service can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    RandomForest,
    #[serde(rename = "xgboost")]
    XgBoost,
    #[serde(rename = "lightgbm")]
    LightGbm,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::RandomForest, ModelKind::XgBoost, ModelKind::LightGbm];

    /// Name shown on the model selector.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::RandomForest => "RANDOM FOREST",
            ModelKind::XgBoost => "XGBOOST",
            ModelKind::LightGbm => "LIGHTGBM",
        }
    }

    /// Identifier sent on the wire.
    pub fn wire_id(self) -> &'static str {
        match self {
            ModelKind::RandomForest => "random_forest",
            ModelKind::XgBoost => "xgboost",
            ModelKind::LightGbm => "lightgbm",
        }
    }

    /// Accepts wire ids and display names in any case.
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "randomforest" | "rf" => Some(ModelKind::RandomForest),
            "xgboost" | "xgb" => Some(ModelKind::XgBoost),
            "lightgbm" | "lgbm" => Some(ModelKind::LightGbm),
            _ => None,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One input on the manual-entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureField {
    pub id: &'static str,
    pub label: &'static str,
}

/// Manual-entry fields in form order.
pub const FEATURE_FIELDS: [FeatureField; 10] = [
    FeatureField { id: "toi", label: "TESS Object of Interest (TOI)" },
    FeatureField { id: "ra", label: "Right Ascension (deg)" },
    FeatureField { id: "dec", label: "Declination (deg)" },
    FeatureField { id: "st_pmra", label: "Proper Motion RA (mas/yr)" },
    FeatureField { id: "pl_tranmid", label: "Transit Midpoint (BJD)" },
    FeatureField { id: "pl_rade", label: "Planet Radius (R_Earth)" },
    FeatureField { id: "pl_insol", label: "Insolation (Earth flux)" },
    FeatureField { id: "pl_eqt", label: "Equilibrium Temp (K)" },
    FeatureField { id: "st_dist", label: "Stellar Distance (pc)" },
    FeatureField { id: "st_teff", label: "Stellar Eff. Temp (K)" },
];

/// Validated feature values, in form order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Features {
    values: Vec<(&'static str, f64)>,
}

impl Features {
    /// Validate raw form text, one entry per [`FEATURE_FIELDS`] slot.
    ///
    /// Blank inputs default to `0.0`. Missing trailing inputs count as blank.
    pub fn parse<S: AsRef<str>>(inputs: &[S]) -> Result<Self, ClassifierError> {
        let mut values = Vec::with_capacity(FEATURE_FIELDS.len());
        for (i, field) in FEATURE_FIELDS.iter().enumerate() {
            let raw = inputs.get(i).map(|s| s.as_ref().trim()).unwrap_or("");
            let value = if raw.is_empty() {
                0.0
            } else {
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ClassifierError::Validation(format!("{} must be a number, got {:?}", field.label, raw)))?
            };
            values.push((field.id, value));
        }
        Ok(Self { values })
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.iter().find(|(k, _)| *k == id).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().copied()
    }

    /// JSON object keyed by field id.
    pub fn to_json(&self) -> Json {
        let map: serde_json::Map<String, Json> = self
            .values
            .iter()
            .map(|(k, v)| (k.to_string(), Json::from(*v)))
            .collect();
        Json::Object(map)
    }
}

/// Who an explanation is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    General,
    Scientist,
}

impl Audience {
    pub fn toggled(self) -> Self {
        match self {
            Audience::General => Audience::Scientist,
            Audience::Scientist => Audience::General,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Audience::General => "General public",
            Audience::Scientist => "Scientist",
        }
    }
}

/// Service verdict for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Row identifier, when the service echoes one back.
    pub id: Option<String>,
    pub classification: Disposition,
    /// Confidence as a percentage in `[0, 100]`.
    pub confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawPrediction {
    #[serde(default)]
    id: Option<Json>,
    #[serde(default, alias = "prediction", alias = "label")]
    classification: Option<String>,
    #[serde(default)]
    confidence: Option<Json>,
}

impl RawPrediction {
    fn into_prediction(self) -> Result<Prediction, ClassifierError> {
        let classification = self
            .classification
            .ok_or_else(|| ClassifierError::Decode("response has no classification".to_string()))?;
        Ok(Prediction {
            id: self.id.map(|id| match id {
                Json::String(s) => s,
                other => other.to_string(),
            }),
            classification: Disposition::parse(&classification),
            confidence: self.confidence.as_ref().and_then(confidence_percent),
        })
    }
}

/// Read a confidence given as a fraction, a percentage or a `"93.1%"` string.
fn confidence_percent(raw: &Json) -> Option<f64> {
    let value = match raw {
        Json::Number(n) => n.as_f64()?,
        Json::String(s) => s.trim().trim_end_matches('%').trim().parse().ok()?,
        _ => return None,
    };
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let percent = if value <= 1.0 { value * 100.0 } else { value };
    Some(percent.min(100.0))
}

impl Prediction {
    /// Decode a `{classification, confidence?}` body.
    pub fn from_json(body: &str) -> Result<Self, ClassifierError> {
        let raw: RawPrediction = serde_json::from_str(body).map_err(|e| ClassifierError::Decode(e.to_string()))?;
        raw.into_prediction()
    }
}

/// Service verdicts for an uploaded file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchPrediction {
    pub predictions: Vec<Prediction>,
    pub total_candidates: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawBatch {
    #[serde(default, alias = "results")]
    predictions: Option<Vec<RawPrediction>>,
    #[serde(default)]
    total_candidates: Option<usize>,
}

impl BatchPrediction {
    /// Decode a `{predictions: [...], total_candidates?}` body.
    pub fn from_json(body: &str) -> Result<Self, ClassifierError> {
        let raw: RawBatch = serde_json::from_str(body).map_err(|e| ClassifierError::Decode(e.to_string()))?;
        let predictions = raw
            .predictions
            .ok_or_else(|| ClassifierError::Decode("response has no predictions".to_string()))?
            .into_iter()
            .map(RawPrediction::into_prediction)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            predictions,
            total_candidates: raw.total_candidates,
        })
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_predictions(&self.predictions, self.total_candidates)
    }
}

/// Counts shown above the batch result table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub confirmed: usize,
    pub candidates: usize,
    pub false_positives: usize,
    /// Mean confidence over the predictions that carry one.
    pub confidence: Option<f64>,
}

impl BatchSummary {
    /// Summarize predictions. `total_candidates`, when the service sends
    /// it, takes precedence over the prediction count.
    pub fn from_predictions(predictions: &[Prediction], total_candidates: Option<usize>) -> Self {
        let mut summary = Self {
            total: total_candidates.unwrap_or(predictions.len()),
            ..Self::default()
        };
        let mut confidence_sum = 0.0;
        let mut confidence_count = 0usize;
        for p in predictions {
            match p.classification {
                Disposition::Confirmed => summary.confirmed += 1,
                Disposition::Candidate => summary.candidates += 1,
                Disposition::FalsePositive => summary.false_positives += 1,
                Disposition::Other(_) => {}
            }
            if let Some(c) = p.confidence {
                confidence_sum += c;
                confidence_count += 1;
            }
        }
        if confidence_count > 0 {
            summary.confidence = Some(confidence_sum / confidence_count as f64);
        }
        summary
    }
}

/// Free-text explanation returned by the service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Explanation {
    pub content: String,
}

impl Explanation {
    /// Accepts a bare JSON string or an object with a `content`,
    /// `explanation` or `text` field.
    pub fn from_json(body: &str) -> Result<Self, ClassifierError> {
        let json: Json = serde_json::from_str(body).map_err(|e| ClassifierError::Decode(e.to_string()))?;
        let content = match &json {
            Json::String(s) => Some(s.clone()),
            Json::Object(map) => ["content", "explanation", "text"]
                .iter()
                .find_map(|k| map.get(*k).and_then(Json::as_str).map(str::to_string)),
            _ => None,
        };
        content
            .map(|content| Self { content })
            .ok_or_else(|| ClassifierError::Decode("response has no explanation content".to_string()))
    }
}
