//! Differential term.

use vc_core::Precision;

use crate::gain::Gain;
use crate::process::Process;
use crate::value::{Correctable, CorrectionValue};

/// Correction proportional to the rate of change of the error.
///
/// Uses a backward difference against the error seen on the previous call.
/// The previous error starts at zero, so the first evaluation reacts to a
/// step from zero to the current error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differential<Q: Correctable> {
    gain: Gain<Q>,
    target: Q,
    previous_error: Q,
}

impl<Q: Correctable> Differential<Q> {
    pub fn new(gain: Gain<Q>, target: Q) -> Self {
        Self {
            gain,
            target,
            previous_error: Q::zero(),
        }
    }

    pub fn gain(&self) -> Gain<Q> {
        self.gain
    }

    pub fn target(&self) -> Q {
        self.target
    }

    pub fn previous_error(&self) -> Q {
        self.previous_error
    }

    /// `gain * (error - previous_error) / dt`, remembering `error`.
    ///
    /// A zero-duration process yields an infinite or NaN correction.
    pub fn evaluate(&mut self, process: &Process<Q>) -> CorrectionValue<Q::Precision> {
        let error = process.error(self.target);
        let rate = <Q::Precision as Precision>::ONE / process.count();
        let differential = (error - self.previous_error).scale(rate);
        self.previous_error = error;
        (self.gain * differential).into_correction()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::time::Time;
    use proptest::prelude::*;
    use vc_core::Volume;

    proptest! {
        #[test]
        fn first_sample_matches_gain_e_over_dt(
            gain in -10.0_f64..10.0,
            e in -100.0_f64..100.0,
            dt in 1e-3_f64..1.0,
        ) {
            let mut d = Differential::new(Gain::new(gain), Volume::new(e));
            let process = Process::new(Volume::new(0.0), Time::seconds(dt));
            let expected = gain * (e * (1.0 / dt));
            prop_assert_eq!(d.evaluate(&process).value(), expected);
        }

        #[test]
        fn steady_error_has_zero_derivative(
            gain in -10.0_f64..10.0,
            target in -100.0_f64..100.0,
            measurement in -100.0_f64..100.0,
        ) {
            let mut d = Differential::new(Gain::new(gain), Volume::new(target));
            let process = Process::new(Volume::new(measurement), Time::seconds(0.01));
            d.evaluate(&process);
            prop_assert_eq!(d.evaluate(&process).value(), 0.0);
        }
    }
}
