//! Scalar field values.

use super::disposition::Disposition;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Placeholder rendered for missing values.
pub const ABSENT_LABEL: &str = "N/A";

/// Decimals shown for non-integral numbers unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// A single field value in a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    Category(Disposition),
    Absent,
}

impl Value {
    /// Canonical text form: full-precision numbers, canonical category labels.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Value::Number(n) => format_number(*n),
            Value::Text(s) => s.clone(),
            Value::Category(d) => d.label().to_string(),
            Value::Absent => ABSENT_LABEL.to_string(),
        }
    }

    /// What a table cell shows: non-integral numbers rounded to
    /// `precision` decimals, everything else as [`Value::label`].
    #[must_use]
    pub fn display(&self, precision: usize) -> String {
        match self {
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Value::Number(n) => format!("{:.*}", precision, n),
            other => other.label(),
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_category(&self) -> Option<&Disposition> {
        match self {
            Value::Category(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Absent => 0,
            Value::Number(_) => 1,
            Value::Text(_) => 2,
            Value::Category(_) => 3,
        }
    }

    /// Total order used by the table sort.
    ///
    /// Values of different kinds order as `Absent < Number < Text < Category`.
    /// Numbers use `f64::total_cmp`, text compares lexically and categories by
    /// their canonical label.
    #[must_use]
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Category(a), Value::Category(b)) => a.label().cmp(b.label()),
            (Value::Absent, Value::Absent) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        if n.is_nan() {
            Value::Absent
        } else {
            Value::Number(n)
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Disposition> for Value {
    fn from(d: Disposition) -> Self {
        Value::Category(d)
    }
}

/// Render a number without a trailing `.0` for integral values.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
