use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown scam category: {0}")]
    UnknownCategory(String),
    #[error("unknown locker style: {0}")]
    UnknownLockerStyle(String),
}
