//! Input dataset: course records loaded from a JSON array.

use crate::diagnostics;
use crate::Result;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A single input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Course")]
    pub course: String,
    pub approved_rate: f64,
}

impl Record {
    pub fn new(course: impl Into<String>, approved_rate: f64) -> Self {
        Self {
            course: course.into(),
            approved_rate,
        }
    }
}

/// Failures that abort loading entirely.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {path} is not valid JSON")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset {path} must be a JSON array of records, found {found}")]
    NotArray { path: String, found: &'static str },
}

/// Records that survived validation, plus how many rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Read and parse a dataset file. I/O and JSON errors are fatal; individual
/// malformed rows are skipped with a warning.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: display.clone(),
        source,
    })?;

    parse_dataset(&text, &display)
        .with_context(|| diagnostics::error_message(format!("load dataset {}", display)))
}

/// Parse dataset text. `origin` is only used in messages.
pub fn parse_dataset(text: &str, origin: &str) -> Result<Dataset> {
    let value: Value = serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: origin.to_string(),
        source,
    })?;

    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(LoadError::NotArray {
                path: origin.to_string(),
                found: json_kind(&other),
            }
            .into())
        }
    };

    let mut dataset = Dataset::default();
    for (idx, row) in rows.iter().enumerate() {
        match record_from_value(row) {
            Ok(record) => dataset.records.push(record),
            Err(reason) => {
                diagnostics::warn(format!(
                    "{}: skipping record #{}: {}",
                    origin, idx, reason
                ));
                dataset.skipped += 1;
            }
        }
    }

    Ok(dataset)
}

/// Validate one row. The error is a human-readable reason.
fn record_from_value(row: &Value) -> std::result::Result<Record, String> {
    let obj = row
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", json_kind(row)))?;

    let course = match obj.get("Course") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::String(_)) => return Err("empty \"Course\"".to_string()),
        Some(other) => {
            return Err(format!(
                "\"Course\" must be a string, found {}",
                json_kind(other)
            ))
        }
        None => return Err("missing \"Course\"".to_string()),
    };

    let approved_rate = match obj.get("approved_rate") {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => v,
            _ => return Err(format!("\"approved_rate\" {} is out of range", n)),
        },
        Some(other) => {
            return Err(format!(
                "\"approved_rate\" must be a number, found {}",
                json_kind(other)
            ))
        }
        None => return Err("missing \"approved_rate\"".to_string()),
    };

    Ok(Record {
        course,
        approved_rate,
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Unique course labels in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDomain(Vec<String>);

impl CategoryDomain {
    pub fn from_records(records: &[Record]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for r in records {
            if seen.insert(r.course.as_str()) {
                out.push(r.course.clone());
            }
        }
        Self(out)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn into_labels(self) -> Vec<String> {
        self.0
    }
}
