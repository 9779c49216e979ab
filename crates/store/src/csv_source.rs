//! CSV data source: one file per category under a data directory.
//!
//! The first column is the location, the last column is the provenance,
//! and every other column becomes an attribute keyed by its header.
//! A file is accepted only as a whole: one hostile or misshapen row
//! rejects the entire source.

use roamer_core::error::SourceError;
use roamer_core::fact::{Category, Fact};
use roamer_core::source::DataSource;
use roamer_security::{validate_fields, validate_source_path};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Reads facts from CSV files under `data_dir`.
pub struct CsvSource {
    data_dir: PathBuf,
}

impl CsvSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Parse CSV content into facts tagged with `category`.
    pub fn parse<R: Read>(reader: R, category: &Category) -> Result<Vec<Fact>, SourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let rows = csv_reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SourceError::Read(e.to_string()))?;

        if rows.len() < 2 {
            return Err(SourceError::Empty);
        }

        let headers: Vec<&str> = rows[0].iter().map(str::trim).collect();
        validate_fields(&headers).map_err(|e| SourceError::InvalidRow {
            row: 1,
            reason: e.to_string(),
        })?;

        let mut facts = Vec::with_capacity(rows.len() - 1);
        for (index, record) in rows.iter().enumerate().skip(1) {
            let row = index + 1;

            if record.len() != headers.len() {
                return Err(SourceError::FieldCount {
                    row,
                    expected: headers.len(),
                    found: record.len(),
                });
            }

            let fields: Vec<&str> = record.iter().collect();
            validate_fields(&fields).map_err(|e| SourceError::InvalidRow {
                row,
                reason: e.to_string(),
            })?;

            let attributes = headers
                .iter()
                .zip(fields.iter())
                .filter(|(header, _)| **header != "location" && **header != "source")
                .map(|(header, value)| (header.to_string(), value.to_string()))
                .collect();

            facts.push(Fact {
                location: fields[0].to_string(),
                category: category.clone(),
                attributes,
                source: fields[fields.len() - 1].to_string(),
            });
        }

        Ok(facts)
    }
}

impl DataSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self, id: &str, category: &Category) -> Result<Vec<Fact>, SourceError> {
        validate_source_path(id).map_err(|e| SourceError::Rejected {
            reason: e.to_string(),
        })?;

        let path = self.data_dir.join(id);
        let file = std::fs::File::open(&path)
            .map_err(|e| SourceError::Open(format!("{}: {e}", path.display())))?;

        let facts = Self::parse(file, category)?;
        debug!(source = %id, category = %category, count = facts.len(), "Loaded CSV source");
        Ok(facts)
    }
}
