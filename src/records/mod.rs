//! Record data model.
//!
//! Records are validated once, when they enter the crate (CSV ingestion,
//! sample generation, API responses). After that every field lookup is total:
//! a field the record does not carry reads as [`Value::Absent`].

pub mod disposition;
pub mod schema;
pub mod value;

pub use disposition::{labels_match, normalize_label, Disposition};
pub use schema::{FieldDef, FieldKind, Schema, KOI_DISPOSITION, KOI_PERIOD, KOI_PRAD};
pub use value::{format_number, Value, ABSENT_LABEL, DEFAULT_PRECISION};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

static ABSENT: Value = Value::Absent;

/// Immutable mapping from declared field name to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    /// Build a record from typed values. Absent values are not stored.
    pub fn new<K, I>(values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            values: values
                .into_iter()
                .filter(|(_, v)| !v.is_absent())
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    /// Build a record from raw text cells, coercing each by its declared kind.
    ///
    /// Cells for undeclared fields are dropped. Blank, `null` and `NaN`
    /// cells become absent, as do numbers that fail to parse.
    pub fn from_raw<'a, I>(schema: &Schema, cells: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values = cells.into_iter().filter_map(|(key, raw)| {
            let field = schema.field(key)?;
            Some((key.to_string(), coerce(field.kind, raw)))
        });
        Self::new(values)
    }

    /// Value at `key`, or `Absent` when the record has none.
    pub fn get(&self, key: &str) -> &Value {
        self.values.get(key).unwrap_or(&ABSENT)
    }

    /// Iterate over the present values.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Interpret a raw cell according to a field kind.
pub fn coerce(kind: FieldKind, raw: &str) -> Value {
    let trimmed = raw.trim();
    if is_missing(trimmed) {
        return Value::Absent;
    }
    match kind {
        FieldKind::Number => trimmed.parse::<f64>().map(Value::from).unwrap_or(Value::Absent),
        FieldKind::Text => Value::Text(trimmed.to_string()),
        FieldKind::Category => Value::Category(Disposition::parse(trimmed)),
    }
}

/// Whether a raw cell stands for a missing value.
pub fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("n/a")
}

/// A schema together with its records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub schema: Schema,
    pub records: Vec<Record>,
    /// Where the records came from, for titles and logs.
    pub source: String,
}

impl Dataset {
    pub fn new(schema: Schema, records: Vec<Record>, source: impl Into<String>) -> Self {
        Self {
            schema,
            records,
            source: source.into(),
        }
    }

    pub fn shared(self) -> Arc<Dataset> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
