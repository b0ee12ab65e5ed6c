use crate::error::Result;
use crate::source::{RawRecord, RecordSource, SourceBatch};
use scamsweep_config::DbSourceConfig;
use scamsweep_store::SourceDb;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Clone)]
pub struct SqliteSource {
    name: String,
    path: PathBuf,
    table: String,
    number_field: String,
    type_field: String,
    output_file: String,
}

impl SqliteSource {
    pub fn from_config(data_dir: &Path, config: &DbSourceConfig) -> Self {
        Self {
            name: config.name.clone(),
            path: data_dir.join(&config.db_file),
            table: config.table.clone(),
            number_field: config.number_field.clone(),
            type_field: config.type_field.clone(),
            output_file: config.output_file.clone(),
        }
    }
}

impl RecordSource for SqliteSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn output_file_name(&self) -> &str {
        &self.output_file
    }

    fn read_records(&self) -> Result<SourceBatch> {
        let db = SourceDb::open(&self.path)?;
        let rows = db.read_rows(&self.table, &self.number_field, &self.type_field)?;

        let mut batch = SourceBatch::default();
        for row in rows {
            let number = row.number.as_deref().map(str::trim).unwrap_or("");
            if number.is_empty() {
                batch.skipped += 1;
                continue;
            }
            let label = match row.label.as_deref().map(str::trim) {
                Some(label) if !label.is_empty() => label,
                _ => UNKNOWN_LABEL,
            };
            batch.records.push(RawRecord::new(number, label));
        }

        debug!(
            source = %self.name,
            table = %self.table,
            records = batch.records.len(),
            skipped = batch.skipped,
            "sqlite source read"
        );
        Ok(batch)
    }
}
