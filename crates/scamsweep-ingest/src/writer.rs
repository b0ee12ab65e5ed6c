use crate::error::Result;
use csv::WriterBuilder;
use scamsweep_core::CleanRow;
use std::fs;
use std::path::Path;

pub const OUTPUT_HEADERS: [&str; 3] = ["number", "type", "locker_type"];

/// Writes `number,type,locker_type` rows, header included even when empty.
pub fn write_clean_csv(path: &Path, rows: &[CleanRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(OUTPUT_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
