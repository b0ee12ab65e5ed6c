use anyhow::Error;
use scamsweep_config::ConfigError;
use scamsweep_core::CoreError;
use scamsweep_ingest::IngestError;
use scamsweep_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{failed} of {total} sources failed")]
    SourcesFailed { failed: usize, total: usize },
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn sources_failed(failed: usize, total: usize) -> Error {
    CliError::SourcesFailed { failed, total }.into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::NotFound(_) => EXIT_NOT_FOUND,
                CliError::SourcesFailed { .. } => EXIT_FAILURE,
            });
        }
        if let Some(ingest_err) = cause.downcast_ref::<IngestError>() {
            return ExitCode::from(ingest_exit_code(ingest_err));
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn ingest_exit_code(err: &IngestError) -> u8 {
    match err {
        IngestError::Store(store_err) => store_exit_code(store_err),
        IngestError::MissingInput(_) => EXIT_NOT_FOUND,
        IngestError::MissingColumn { .. } | IngestError::Csv(_) => EXIT_INVALID_INPUT,
        IngestError::Io(_) => EXIT_FAILURE,
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::MissingDatabase => EXIT_NOT_FOUND,
        StoreErrorKind::InvalidIdentifier => EXIT_INVALID_INPUT,
        StoreErrorKind::Sql => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidDir(_)
        | ConfigError::InvalidSourceName(_)
        | ConfigError::DuplicateSourceName(_)
        | ConfigError::InvalidSourceField { .. }
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
