//! Recall and false-positive rate as a function of decision threshold.

pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const THRESHOLD_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub threshold: f64,
    pub recall: f64,
    pub fpr: f64,
}

const fn op(threshold: f64, recall: f64, fpr: f64) -> OperatingPoint {
    OperatingPoint { threshold, recall, fpr }
}

/// Precomputed on the validation set of the shipped ensemble.
const STANDARD: [OperatingPoint; 51] = [
    op(0.00, 1.0, 1.0), op(0.01, 1.0, 0.805), op(0.02, 1.0, 0.724), op(0.03, 1.0, 0.671),
    op(0.04, 1.0, 0.614), op(0.05, 1.0, 0.547), op(0.06, 1.0, 0.504), op(0.07, 1.0, 0.462),
    op(0.08, 1.0, 0.421), op(0.09, 1.0, 0.393), op(0.10, 1.0, 0.358), op(0.11, 1.0, 0.333),
    op(0.12, 0.8, 0.304), op(0.13, 0.8, 0.287), op(0.14, 0.8, 0.265), op(0.15, 0.8, 0.250),
    op(0.16, 0.8, 0.227), op(0.17, 0.8, 0.195), op(0.18, 0.8, 0.182), op(0.19, 0.6, 0.166),
    op(0.20, 0.4, 0.152), op(0.21, 0.4, 0.145), op(0.22, 0.4, 0.131), op(0.23, 0.4, 0.122),
    op(0.24, 0.4, 0.110), op(0.25, 0.2, 0.096), op(0.26, 0.2, 0.090), op(0.27, 0.2, 0.081),
    op(0.28, 0.2, 0.076), op(0.29, 0.2, 0.071), op(0.30, 0.2, 0.065), op(0.31, 0.2, 0.058),
    op(0.32, 0.2, 0.051), op(0.33, 0.2, 0.048), op(0.34, 0.2, 0.042), op(0.35, 0.2, 0.041),
    op(0.36, 0.2, 0.037), op(0.37, 0.2, 0.035), op(0.38, 0.2, 0.034), op(0.39, 0.2, 0.030),
    op(0.40, 0.2, 0.028), op(0.41, 0.2, 0.027), op(0.42, 0.2, 0.025), op(0.43, 0.2, 0.023),
    op(0.44, 0.2, 0.019), op(0.45, 0.0, 0.018), op(0.46, 0.0, 0.018), op(0.48, 0.0, 0.016),
    op(0.49, 0.0, 0.014), op(0.50, 0.0, 0.014), op(1.00, 0.0, 0.0),
];

/// Slider values are built from repeated 0.01 steps; absorb the drift.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdCurve {
    points: Vec<OperatingPoint>,
}

impl ThresholdCurve {
    pub fn standard() -> Self {
        Self::new(STANDARD.to_vec())
    }

    /// Points are kept sorted by threshold.
    pub fn new(mut points: Vec<OperatingPoint>) -> Self {
        points.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        Self { points }
    }

    pub fn points(&self) -> &[OperatingPoint] {
        &self.points
    }

    /// First point whose threshold is at or above `threshold`.
    pub fn operating_point(&self, threshold: f64) -> Option<OperatingPoint> {
        self.points.iter().copied().find(|p| p.threshold + EPSILON >= threshold)
    }

    pub fn recall_series(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.threshold, p.recall)).collect()
    }

    pub fn fpr_series(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.threshold, p.fpr)).collect()
    }
}

/// Move a slider value by `steps` increments, clamped to `[0, 1]` and
/// rounded to the step grid.
pub fn step_threshold(threshold: f64, steps: i32) -> f64 {
    let next = threshold + f64::from(steps) * THRESHOLD_STEP;
    ((next.clamp(0.0, 1.0)) / THRESHOLD_STEP).round() * THRESHOLD_STEP
}
