//! FILENAME: app/cli/src/error.rs

use std::path::PathBuf;

use smartcalc_engine::TrigFn;
use smartcalc_parser::EvalError;
use thiserror::Error;

/// Failures of a single calculator action. The display shows `Error` for
/// `Eval`; `ScientificModeOff` leaves the display untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("'{0}' is only available in scientific mode (type 'sci')")]
    ScientificModeOff(TrigFn),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("Calculator state lock poisoned")]
    StatePoisoned,

    #[error("Calculator thread panicked")]
    SessionPanicked,
}
