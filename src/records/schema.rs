//! Declared field sets for datasets.

use serde::{Deserialize, Serialize};

/// How raw text for a field is interpreted at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Number,
    Text,
    Category,
}

/// A declared field: its key, a column header for display, and its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub key: String,
    pub header: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(key: &str, header: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            header: header.to_string(),
            kind,
        }
    }
}

/// The closed set of fields a dataset carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<FieldDef>,
    category_field: Option<String>,
}

/// Key of the disposition column in Kepler KOI tables.
pub const KOI_DISPOSITION: &str = "koi_disposition";
pub const KOI_PERIOD: &str = "koi_period";
pub const KOI_PRAD: &str = "koi_prad";

impl Schema {
    /// Build a schema. The category field, when given, must be one of the
    /// declared fields or it is ignored.
    pub fn new(fields: Vec<FieldDef>, category_field: Option<&str>) -> Self {
        let category_field = category_field
            .filter(|key| fields.iter().any(|f| f.key == *key))
            .map(str::to_string);
        Self { fields, category_field }
    }

    /// The Kepler Objects of Interest table shown on the explore tab.
    pub fn koi() -> Self {
        Self::new(
            vec![
                FieldDef::new("id", "ID", FieldKind::Number),
                FieldDef::new(KOI_DISPOSITION, "State", FieldKind::Category),
                FieldDef::new(KOI_PERIOD, "Period (days)", FieldKind::Number),
                FieldDef::new(KOI_PRAD, "Radius (Earth)", FieldKind::Number),
                FieldDef::new("koi_depth", "Depth (ppm)", FieldKind::Number),
                FieldDef::new("koi_steff", "Star Temp. (K)", FieldKind::Number),
            ],
            Some(KOI_DISPOSITION),
        )
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// The designated field the category filter and pie chart use.
    pub fn category_field(&self) -> Option<&str> {
        self.category_field.as_deref()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::koi()
    }
}
