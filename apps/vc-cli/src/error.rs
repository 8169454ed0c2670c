//! Error type for the command line driver.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read tuning file: {path}")]
    TuningFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse tuning file {path}: {source}")]
    TuningFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Control error: {0}")]
    Control(#[from] vc_control::ControlError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
