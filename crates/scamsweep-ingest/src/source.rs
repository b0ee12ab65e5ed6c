use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub number: String,
    pub label: String,
}

impl RawRecord {
    pub fn new(number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            label: label.into(),
        }
    }
}

/// Records read from one source, plus how many rows were dropped for missing
/// fields before reaching the pipeline.
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    pub records: Vec<RawRecord>,
    pub skipped: usize,
}

pub trait RecordSource {
    fn name(&self) -> &str;
    fn output_file_name(&self) -> &str;
    fn read_records(&self) -> Result<SourceBatch>;
}
