//! Error types for control operations.

use thiserror::Error;

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors raised by the fallible control surfaces.
///
/// Term evaluation itself never fails; these come from the opt-in checked
/// constructors and from loop tuning validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Sample duration is zero, negative or not finite.
    #[error("Invalid sample duration: {seconds} s")]
    InvalidDuration { seconds: f64 },

    /// Loop tuning rejected during validation.
    #[error("Invalid tuning: {what}")]
    InvalidTuning { what: String },

    /// Correction value is NaN or infinite.
    #[error("Non-finite correction: {value}")]
    NonFinite { value: f64 },
}

impl From<vc_core::VcError> for ControlError {
    fn from(err: vc_core::VcError) -> Self {
        match err {
            vc_core::VcError::NonFinite { value, .. } => ControlError::NonFinite { value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_non_finite_keeps_value() {
        let err = vc_core::ensure_finite(f32::INFINITY, "correction").unwrap_err();
        assert_eq!(
            ControlError::from(err),
            ControlError::NonFinite {
                value: f64::INFINITY
            }
        );
    }
}
