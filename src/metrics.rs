//! Published evaluation results for the trained models.
//!
//! Figures come from the offline evaluation run and are shown verbatim on
//! the Results tab. Rates derived from a confusion matrix are computed here
//! so the matrix view and the headline numbers can be cross-checked.

use once_cell::sync::Lazy;

pub const DEFAULT_MODEL: &str = "Ensemble";

/// Headline metrics as reported by the evaluation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportedMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub auc: f64,
    pub f1: f64,
}

/// Predicted-vs-actual counts for the CONFIRMED / FALSE POSITIVE split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_positive: u32,
    pub false_negative: u32,
    pub false_positive: u32,
    pub true_negative: u32,
}

fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        f64::from(num) / f64::from(den)
    }
}

impl ConfusionMatrix {
    pub fn total(&self) -> u32 {
        self.true_positive + self.false_negative + self.false_positive + self.true_negative
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    /// Rows are actual, columns predicted: `[[tp, fn], [fp, tn]]`.
    pub fn cells(&self) -> [[u32; 2]; 2] {
        [
            [self.true_positive, self.false_negative],
            [self.false_positive, self.true_negative],
        ]
    }

    /// Shading in `[0, 1]` for a cell. Correct predictions on the diagonal
    /// start brighter and may saturate; errors are capped at 0.7.
    pub fn heat(value: u32, diagonal: bool) -> f64 {
        let base = f64::from(value) / 1000.0;
        if diagonal {
            (base + 0.2).min(1.0)
        } else {
            (base + 0.1).min(0.7)
        }
    }
}

/// Dataset-level counts predicted by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionSummary {
    pub confirmed: u32,
    pub candidates: u32,
    pub false_positives: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelReport {
    pub name: &'static str,
    pub metrics: ReportedMetrics,
    pub confusion: ConfusionMatrix,
    pub summary: PredictionSummary,
}

/// Row of the cross-model comparison chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub name: &'static str,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

fn report(
    name: &'static str,
    [accuracy, precision, recall, auc, f1]: [f64; 5],
    [true_positive, false_negative, false_positive, true_negative]: [u32; 4],
    [confirmed, candidates, false_positives]: [u32; 3],
) -> ModelReport {
    ModelReport {
        name,
        metrics: ReportedMetrics { accuracy, precision, recall, auc, f1 },
        confusion: ConfusionMatrix { true_positive, false_negative, false_positive, true_negative },
        summary: PredictionSummary { confirmed, candidates, false_positives },
    }
}

static REPORTS: Lazy<Vec<ModelReport>> = Lazy::new(|| {
    vec![
        report("LightGBM", [0.987, 0.987, 0.965, 0.99, 0.97], [502, 47, 58, 858], [1245, 789, 123]),
        report("NN", [0.962, 0.941, 0.978, 0.98, 0.96], [490, 59, 65, 851], [1230, 810, 117]),
        report("Ensemble", [0.991, 0.990, 0.985, 0.99, 0.99], [510, 39, 51, 865], [1255, 780, 122]),
        report("SVM", [0.945, 0.923, 0.931, 0.95, 0.92], [480, 68, 75, 842], [1190, 850, 112]),
        report("Random Forest", [0.978, 0.969, 0.958, 0.98, 0.96], [498, 51, 60, 856], [1240, 795, 125]),
    ]
});

static COMPARISON: Lazy<Vec<Comparison>> = Lazy::new(|| {
    [
        ("LightGBM", 0.98, 0.97, 0.96, 0.97),
        ("NN", 0.96, 0.94, 0.97, 0.95),
        ("Ensemble", 0.99, 0.98, 0.98, 0.98),
        ("SVM", 0.94, 0.91, 0.93, 0.92),
        ("Random Forest", 0.97, 0.96, 0.95, 0.96),
    ]
    .into_iter()
    .map(|(name, accuracy, precision, recall, f1)| Comparison { name, accuracy, precision, recall, f1 })
    .collect()
});

/// Every model report, in selector order.
pub fn reports() -> &'static [ModelReport] {
    &REPORTS
}

pub fn report_for(name: &str) -> Option<&'static ModelReport> {
    REPORTS.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

/// Position of the default selection in [`reports`].
pub fn default_index() -> usize {
    REPORTS.iter().position(|r| r.name == DEFAULT_MODEL).unwrap_or(0)
}

pub fn comparison() -> &'static [Comparison] {
    &COMPARISON
}

/// Format a fraction as a one-decimal percentage.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
