use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date/datetime formats accepted when typing a cell.
///
/// Scan exports write `YYYY-MM-DD HH:MM:SS` timestamps in the collection
/// column; written-date columns vary by source, so the common dotted and
/// slashed forms are accepted too.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y. %m. %d.",
];

/// Typed view of a cell's raw text, used only for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    DateTime(NaiveDateTime),
    Text(String),
}

impl CellValue {
    /// Classify raw text. Numbers win over dates so that a bare "2024"
    /// stays numeric.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return CellValue::DateTime(dt);
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
                return CellValue::DateTime(d.and_hms_opt(0, 0, 0).unwrap());
            }
        }
        CellValue::Text(trimmed.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// A cell keeps the raw text it was loaded with; sorting reorders cells but
/// never rewrites their text, so files round-trip byte-for-byte per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub raw: String,
    pub value: CellValue,
}

impl Cell {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: CellValue::parse(raw),
        }
    }
}

/// Ordering used by range sorts.
///
/// Type ranks: Number < DateTime < Text < Empty, so empties always sink to
/// the bottom of an ascending sort. Text compares case-insensitively.
pub fn value_compare(a: &CellValue, b: &CellValue) -> Ordering {
    fn type_rank(v: &CellValue) -> u8 {
        match v {
            CellValue::Number(_) => 0,
            CellValue::DateTime(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Empty => 3,
        }
    }

    let rank_a = type_rank(a);
    let rank_b = type_rank(b);
    if rank_a != rank_b {
        return rank_a.cmp(&rank_b);
    }

    match (a, b) {
        (CellValue::Number(na), CellValue::Number(nb)) => {
            na.partial_cmp(nb).unwrap_or(Ordering::Equal)
        }
        (CellValue::DateTime(da), CellValue::DateTime(db)) => da.cmp(db),
        (CellValue::Text(sa), CellValue::Text(sb)) => {
            sa.to_lowercase().cmp(&sb.to_lowercase())
        }
        _ => Ordering::Equal,
    }
}
