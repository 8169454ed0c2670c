//! Integral term.

use crate::gain::Gain;
use crate::process::Process;
use crate::value::{Correctable, CorrectionValue};

/// Correction proportional to the error accumulated over time.
///
/// The accumulator integrates with a rectangular (forward Euler) rule and is
/// updated on every evaluation. There is no windup limit and no reset: build
/// a new term to start over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral<Q: Correctable> {
    gain: Gain<Q>,
    target: Q,
    accumulator: Q,
}

impl<Q: Correctable> Integral<Q> {
    pub fn new(gain: Gain<Q>, target: Q) -> Self {
        Self {
            gain,
            target,
            accumulator: Q::zero(),
        }
    }

    pub fn gain(&self) -> Gain<Q> {
        self.gain
    }

    pub fn target(&self) -> Q {
        self.target
    }

    /// Error integrated so far.
    pub fn accumulator(&self) -> Q {
        self.accumulator
    }

    /// `accumulator += error * dt`, then `gain * accumulator`.
    pub fn evaluate(&mut self, process: &Process<Q>) -> CorrectionValue<Q::Precision> {
        self.accumulator += process.error(self.target).scale(process.count());
        (self.gain * self.accumulator).into_correction()
    }
}
