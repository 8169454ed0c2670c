//! Sampled process snapshots.

use vc_core::{Airway, Precision};

use crate::error::{ControlError, ControlResult};
use crate::time::Time;

/// One sampled snapshot of a controlled quantity.
///
/// Built by the driver for every tick. `measurement` is the latest reading,
/// `duration` the time elapsed since the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Process<Q: Airway> {
    pub measurement: Q,
    pub duration: Time<Q::Precision>,
}

impl<Q: Airway> Process<Q> {
    /// Unvalidated snapshot. A zero duration is accepted and makes the
    /// differential term divide by zero.
    pub fn new(measurement: Q, duration: Time<Q::Precision>) -> Self {
        Self {
            measurement,
            duration,
        }
    }

    /// Snapshot that rejects zero, negative and non-finite durations.
    pub fn checked(measurement: Q, duration: Time<Q::Precision>) -> ControlResult<Self> {
        let seconds = duration.count();
        if !seconds.is_finite() || seconds <= <Q::Precision as Precision>::ZERO {
            return Err(ControlError::InvalidDuration {
                seconds: seconds.to_f64(),
            });
        }
        Ok(Self::new(measurement, duration))
    }

    /// Same duration, new reading.
    pub fn with_measurement(&self, measurement: Q) -> Self {
        Self {
            measurement,
            duration: self.duration,
        }
    }

    /// `target - measurement`.
    #[inline]
    pub fn error(&self, target: Q) -> Q {
        target - self.measurement
    }

    #[inline]
    pub fn count(&self) -> Q::Precision {
        self.duration.count()
    }
}
