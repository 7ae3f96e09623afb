//! Disposition labels and their canonical normalization.
//!
//! Datasets from different archives spell the same outcome differently
//! ("FALSE POSITIVE", "FALSEPOSITIVE", "false_positive", "FP"). Every label
//! that enters the crate goes through [`Disposition::parse`] so comparisons,
//! filters and chart buckets agree on one spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical outcome assigned to a candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Disposition {
    Confirmed,
    Candidate,
    FalsePositive,
    /// A label outside the known vocabulary, stored in normalized form.
    Other(String),
}

impl Disposition {
    /// The three labels the dashboard filters on, in display order.
    pub const KNOWN: [Disposition; 3] = [
        Disposition::Confirmed,
        Disposition::Candidate,
        Disposition::FalsePositive,
    ];

    /// Parse a raw label from any source into its canonical disposition.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let key = normalize_label(raw);
        match key.as_str() {
            "CONFIRMED" | "CP" | "KP" => Disposition::Confirmed,
            "CANDIDATE" | "PC" | "APC" => Disposition::Candidate,
            "FALSEPOSITIVE" | "FP" | "FA" | "NONEXOPLANET" => Disposition::FalsePositive,
            _ => Disposition::Other(key),
        }
    }

    /// Canonical display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Disposition::Confirmed => "CONFIRMED",
            Disposition::Candidate => "CANDIDATE",
            Disposition::FalsePositive => "FALSE POSITIVE",
            Disposition::Other(label) => label,
        }
    }

    /// Label shown on classification results, where false positives read as
    /// non-exoplanets.
    #[must_use]
    pub fn verdict(&self) -> &str {
        match self {
            Disposition::FalsePositive => "NON-EXOPLANET",
            other => other.label(),
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Disposition::Other(_))
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper-case a label and strip whitespace, underscores and hyphens.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whether two raw labels name the same category.
///
/// Labels match when their normalized spellings are equal, or when both
/// parse to the same known disposition.
#[must_use]
pub fn labels_match(a: &str, b: &str) -> bool {
    if normalize_label(a) == normalize_label(b) {
        return true;
    }
    let (da, db) = (Disposition::parse(a), Disposition::parse(b));
    da.is_known() && da == db
}
