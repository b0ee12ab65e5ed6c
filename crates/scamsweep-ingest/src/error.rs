use scamsweep_store::error::StoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),
    #[error("column {column} not found in {path}")]
    MissingColumn { path: PathBuf, column: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
