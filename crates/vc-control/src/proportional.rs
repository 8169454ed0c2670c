//! Proportional term.

use crate::gain::Gain;
use crate::process::Process;
use crate::value::{Correctable, CorrectionValue};

/// Correction proportional to the instantaneous error. Stateless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportional<Q: Correctable> {
    gain: Gain<Q>,
    target: Q,
}

impl<Q: Correctable> Proportional<Q> {
    pub fn new(gain: Gain<Q>, target: Q) -> Self {
        Self { gain, target }
    }

    pub fn gain(&self) -> Gain<Q> {
        self.gain
    }

    pub fn target(&self) -> Q {
        self.target
    }

    /// `gain * (target - measurement)`.
    pub fn evaluate(&self, process: &Process<Q>) -> CorrectionValue<Q::Precision> {
        (self.gain * process.error(self.target)).into_correction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Time;
    use vc_core::{Airway, Pressure, cm_h2o};

    #[test]
    fn zero_error_gives_zero() {
        let p = Proportional::new(Gain::new(4.0), cm_h2o(10.0));
        let process = Process::new(cm_h2o(10.0), Time::seconds(0.5));
        assert_eq!(Pressure::from(p.evaluate(&process)), Pressure::zero());
    }

    #[test]
    fn scales_error_by_gain() {
        let p = Proportional::new(Gain::new(0.5), cm_h2o(1.0));
        let process = Process::new(cm_h2o(0.0), Time::millis(1.0));
        assert_eq!(p.evaluate(&process).value(), 0.5);
        // Stateless: repeated evaluation gives the same value.
        assert_eq!(p.evaluate(&process).value(), 0.5);
    }

    #[test]
    fn overshoot_gives_negative_correction() {
        let p = Proportional::new(Gain::new(2.0), cm_h2o(1.0));
        let process = Process::new(cm_h2o(3.0), Time::seconds(1.0));
        assert_eq!(p.evaluate(&process).value(), -4.0);
    }
}
