use exoview::records::{Dataset, Disposition, FieldDef, FieldKind, Record, Schema, Value};

pub fn schema() -> Schema {
    Schema::new(
        vec![
            FieldDef::new("id", "ID", FieldKind::Number),
            FieldDef::new("name", "Name", FieldKind::Text),
            FieldDef::new("status", "Status", FieldKind::Category),
            FieldDef::new("period", "Period", FieldKind::Number),
        ],
        Some("status"),
    )
}

pub fn record(id: u32, name: &str, status: Option<&str>, period: Option<f64>) -> Record {
    Record::new([
        ("id", Value::Number(id as f64)),
        ("name", Value::Text(name.to_string())),
        ("status", status.map(|s| Value::Category(Disposition::parse(s))).unwrap_or(Value::Absent)),
        ("period", period.map(Value::Number).unwrap_or(Value::Absent)),
    ])
}

/// Twelve planets with repeated periods and a couple of gaps.
pub fn planets() -> Vec<Record> {
    vec![
        record(1, "Kepler-22 b", Some("CONFIRMED"), Some(289.9)),
        record(2, "Kepler-69 c", Some("CANDIDATE"), Some(242.5)),
        record(3, "KOI-7016", Some("FALSE POSITIVE"), Some(384.8)),
        record(4, "Kepler-186 f", Some("CONFIRMED"), Some(129.9)),
        record(5, "KOI-4878", Some("CANDIDATE"), None),
        record(6, "Kepler-452 b", Some("CONFIRMED"), Some(384.8)),
        record(7, "KOI-1234", None, Some(12.0)),
        record(8, "Kepler-62 f", Some("CONFIRMED"), Some(267.3)),
        record(9, "KOI-5555", Some("FALSE POSITIVE"), Some(12.0)),
        record(10, "Kepler-442 b", Some("CONFIRMED"), Some(112.3)),
        record(11, "KOI-6666", Some("CANDIDATE"), Some(12.0)),
        record(12, "Kepler-1649 c", Some("CONFIRMED"), Some(19.5)),
    ]
}

pub fn dataset() -> Dataset {
    Dataset::new(schema(), planets(), "fixture")
}

pub fn ids(records: &[&Record]) -> Vec<f64> {
    records.iter().filter_map(|r| r.get("id").as_number()).collect()
}
