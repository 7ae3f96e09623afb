//! Loading candidate tables from delimited text.
//!
//! Columns become schema fields. A column whose header names a disposition
//! is a category field; a column whose every non-blank cell is numeric is a
//! number field; anything else is text. Short rows read as absent values.

pub mod sample;

use crate::records::{is_missing, normalize_label, Dataset, FieldDef, FieldKind, Record, Schema};
use log::{info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use sample::sample_dataset;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no header row")]
    MissingHeader,
}

/// Header spellings treated as the designated category column.
const CATEGORY_HEADERS: [&str; 6] = [
    "KOIDISPOSITION",
    "DISPOSITION",
    "TFOPWGDISP",
    "STATUS",
    "CLASSIFICATION",
    "PREDICTION",
];

fn is_category_header(header: &str) -> bool {
    let normalized = normalize_label(header);
    CATEGORY_HEADERS.contains(&normalized.as_str())
}

fn infer_kind(header: &str, cells: impl Iterator<Item = String>) -> FieldKind {
    if is_category_header(header) {
        return FieldKind::Category;
    }
    let mut saw_value = false;
    for cell in cells {
        if is_missing(&cell) {
            continue;
        }
        if cell.trim().parse::<f64>().is_err() {
            return FieldKind::Text;
        }
        saw_value = true;
    }
    if saw_value {
        FieldKind::Number
    } else {
        FieldKind::Text
    }
}

/// Header names made unique: a repeated name becomes `name_2`, `name_3`, ...
/// skipping names another column already uses. Blank headers stay blank.
fn unique_headers(raw: &[&str], source: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    raw.iter()
        .map(|&header| {
            if header.is_empty() {
                return String::new();
            }
            let mut name = header.to_string();
            let mut suffix = 2;
            while seen.contains(&name) || (name != header && raw.contains(&name.as_str())) {
                name = format!("{}_{}", header, suffix);
                suffix += 1;
            }
            if name != header {
                warn!("ingest: duplicate column '{}' in {} renamed to '{}'", header, source, name);
            }
            seen.insert(name.clone());
            name
        })
        .collect()
}

/// Parse a CSV stream into a dataset.
pub fn parse_dataset<R: Read>(reader: R, source: &str) -> Result<Dataset, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let raw_headers = csv_reader.headers()?.clone();
    let headers = unique_headers(&raw_headers.iter().collect::<Vec<_>>(), source);
    if headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::MissingHeader);
    }

    let rows = csv_reader.records().collect::<Result<Vec<_>, _>>()?;

    let fields: Vec<FieldDef> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !h.is_empty())
        .map(|(i, h)| {
            let kind = infer_kind(h, rows.iter().map(|r| r.get(i).unwrap_or("").to_string()));
            FieldDef::new(h, h, kind)
        })
        .collect();
    let category = fields
        .iter()
        .find(|f| f.kind == FieldKind::Category)
        .map(|f| f.key.clone());
    let schema = Schema::new(fields, category.as_deref());

    let mut short_rows = 0usize;
    let records: Vec<Record> = rows
        .iter()
        .map(|row| {
            if row.len() < headers.len() {
                short_rows += 1;
            }
            let cells = headers
                .iter()
                .zip(row.iter())
                .map(|(h, cell)| (h.as_str(), cell));
            Record::from_raw(&schema, cells)
        })
        .collect();

    if short_rows > 0 {
        warn!("ingest: {} rows in {} shorter than the header", short_rows, source);
    }
    info!(
        "ingest: loaded {} records with {} fields from {}",
        records.len(),
        schema.len(),
        source
    );

    Ok(Dataset::new(schema, records, source))
}

/// Load a dataset from a CSV file on disk.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(file, &path.display().to_string())
}
