//! Tuning file loading.

use std::path::Path;

use vc_control::LoopTuning;

use crate::error::{CliError, CliResult};

/// Read and validate a YAML tuning file.
pub fn load_yaml(path: &Path) -> CliResult<LoopTuning> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::TuningFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let tuning: LoopTuning =
        serde_yaml::from_str(&content).map_err(|source| CliError::TuningFileParse {
            path: path.to_path_buf(),
            source,
        })?;
    tuning.validate()?;
    tracing::debug!(path = %path.display(), terms = tuning.terms.len(), "loaded tuning");
    Ok(tuning)
}

/// Tuning from `path`, or the built-in demo tuning when absent.
pub fn load_or_default(path: Option<&Path>) -> CliResult<LoopTuning> {
    match path {
        Some(path) => load_yaml(path),
        None => Ok(LoopTuning::default()),
    }
}

pub fn to_yaml(tuning: &LoopTuning) -> CliResult<String> {
    Ok(serde_yaml::to_string(tuning)?)
}
