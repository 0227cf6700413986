use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::{
    domain::{Record, RecordId, RecordKind},
    errors::ValidationError,
};

use super::{RecordSource, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Record as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: RecordId,
    date: String,
    #[serde(default)]
    category: String,
    kind: RecordKind,
    amount: i128,
}

impl RawRecord {
    fn validate(self) -> std::result::Result<Record, ValidationError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;
        let amount = u64::try_from(self.amount).map_err(|_| {
            if self.amount < 0 {
                ValidationError::NegativeAmount {
                    id: self.id,
                    amount: self.amount,
                }
            } else {
                ValidationError::AmountTooLarge {
                    id: self.id,
                    amount: self.amount,
                }
            }
        })?;
        Ok(Record::new(self.id.0, date, self.category, self.kind, amount))
    }
}

/// Reads a JSON array of records from a file.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    path: PathBuf,
    label: String,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonRecordSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self) -> Result<Vec<Record>> {
        let data = fs::read_to_string(&self.path)?;
        let records = parse_records(&data)?;
        info!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}

/// Parses and validates a JSON record array, preserving input order.
pub fn parse_records(data: &str) -> Result<Vec<Record>> {
    let raw: Vec<RawRecord> = serde_json::from_str(data)?;
    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());
    for entry in raw {
        if !seen.insert(entry.id) {
            return Err(ValidationError::DuplicateId(entry.id).into());
        }
        records.push(entry.validate()?);
    }
    Ok(records)
}
