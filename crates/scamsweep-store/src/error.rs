use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("database file not found: {0}")]
    MissingDatabase(PathBuf),
    #[error("invalid sql identifier: {0:?}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Sql,
    MissingDatabase,
    InvalidIdentifier,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::MissingDatabase(_) => StoreErrorKind::MissingDatabase,
            StoreError::InvalidIdentifier(_) => StoreErrorKind::InvalidIdentifier,
        }
    }
}
