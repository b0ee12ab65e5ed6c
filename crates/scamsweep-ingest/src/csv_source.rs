use crate::error::{IngestError, Result};
use crate::source::{RawRecord, RecordSource, SourceBatch};
use csv::{ReaderBuilder, StringRecord};
use scamsweep_config::CsvSourceConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Headered CSV export. Cleaned output keeps the input file name.
#[derive(Debug, Clone)]
pub struct CsvSource {
    name: String,
    path: PathBuf,
    output_file: String,
    number_field: String,
    type_field: String,
}

impl CsvSource {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        number_field: impl Into<String>,
        type_field: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let output_file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "clean.csv".to_string());
        Self {
            name: name.into(),
            path,
            output_file,
            number_field: number_field.into(),
            type_field: type_field.into(),
        }
    }

    pub fn from_config(data_dir: &Path, config: &CsvSourceConfig) -> Self {
        Self::new(
            config.name.as_str(),
            data_dir.join(&config.file),
            config.number_field.as_str(),
            config.type_field.as_str(),
        )
    }

    fn column_index(&self, headers: &StringRecord, column: &str) -> Result<usize> {
        headers
            .iter()
            .position(|header| header.trim_matches('\u{feff}').trim() == column)
            .ok_or_else(|| IngestError::MissingColumn {
                path: self.path.clone(),
                column: column.to_string(),
            })
    }
}

impl RecordSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn output_file_name(&self) -> &str {
        &self.output_file
    }

    fn read_records(&self) -> Result<SourceBatch> {
        if !self.path.exists() {
            return Err(IngestError::MissingInput(self.path.clone()));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        let number_idx = self.column_index(&headers, &self.number_field)?;
        let type_idx = self.column_index(&headers, &self.type_field)?;

        let mut batch = SourceBatch::default();
        for record in reader.records() {
            let record = record?;
            let number = record.get(number_idx).unwrap_or("").trim();
            let label = record.get(type_idx).unwrap_or("").trim();
            if number.is_empty() || label.is_empty() {
                batch.skipped += 1;
                continue;
            }
            batch.records.push(RawRecord::new(number, label));
        }

        debug!(
            source = %self.name,
            records = batch.records.len(),
            skipped = batch.skipped,
            "csv source read"
        );
        Ok(batch)
    }
}
