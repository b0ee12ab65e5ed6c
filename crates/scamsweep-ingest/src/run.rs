use crate::error::Result;
use crate::pipeline::{clean_batch, CleanReport};
use crate::source::RecordSource;
use crate::writer::write_clean_csv;
use scamsweep_core::LockerStyle;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub output: PathBuf,
    #[serde(flatten)]
    pub report: CleanReport,
}

/// Reads one source, cleans it and writes `out_dir/<output file>`.
pub fn run_source(
    source: &dyn RecordSource,
    out_dir: &Path,
    style: LockerStyle,
) -> Result<SourceReport> {
    info!(source = source.name(), "processing source");
    let batch = source.read_records()?;
    let outcome = clean_batch(batch, style);

    let output = out_dir.join(source.output_file_name());
    write_clean_csv(&output, &outcome.rows)?;
    info!(
        source = source.name(),
        output = %output.display(),
        valid = outcome.report.valid,
        invalid = outcome.report.invalid,
        skipped = outcome.report.skipped,
        "source cleaned"
    );

    Ok(SourceReport {
        source: source.name().to_string(),
        output,
        report: outcome.report,
    })
}
