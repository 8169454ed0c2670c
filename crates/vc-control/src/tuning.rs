//! Serializable loop tuning.
//!
//! A [`LoopTuning`] describes a loop independently of the quantity it will
//! control; [`LoopTuning::build`] instantiates it for a concrete quantity.

use serde::{Deserialize, Serialize};
use vc_core::{Airway, Precision};

use crate::control::{Control, TermKind};
use crate::control_loop::ControlLoop;
use crate::differential::Differential;
use crate::error::{ControlError, ControlResult};
use crate::gain::Gain;
use crate::integral::Integral;
use crate::process::Process;
use crate::proportional::Proportional;
use crate::time::Time;
use crate::value::Correctable;

/// Gain for one term of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermTuning {
    pub kind: TermKind,
    pub gain: f64,
}

impl TermTuning {
    pub fn new(kind: TermKind, gain: f64) -> Self {
        Self { kind, gain }
    }

    fn build<Q: Correctable>(&self, index: usize, target: Q) -> ControlResult<Control<Q>> {
        let gain = in_precision::<Q::Precision>(self.gain, "gain")
            .map_err(|what| invalid(format!("term {index} ({}) {what}", self.kind)))?;
        let gain = Gain::new(gain);
        Ok(match self.kind {
            TermKind::Proportional => Proportional::new(gain, target).into(),
            TermKind::Integral => Integral::new(gain, target).into(),
            TermKind::Differential => Differential::new(gain, target).into(),
        })
    }
}

/// Complete description of one control loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopTuning {
    /// Setpoint, in the controlled quantity's unit.
    pub target: f64,
    /// Time between samples (seconds).
    pub sample_period_s: f64,
    /// Terms in evaluation order.
    pub terms: Vec<TermTuning>,
}

impl Default for LoopTuning {
    /// Pressure step response used by the demo driver.
    fn default() -> Self {
        Self {
            target: 1.0,
            sample_period_s: 1e-3,
            terms: vec![
                TermTuning::new(TermKind::Proportional, 0.5),
                TermTuning::new(TermKind::Integral, 5.0e1),
                TermTuning::new(TermKind::Differential, 3e-4),
            ],
        }
    }
}

impl LoopTuning {
    pub fn validate(&self) -> ControlResult<()> {
        if !self.target.is_finite() {
            return Err(invalid(format!("target must be finite, got {}", self.target)));
        }
        if !self.sample_period_s.is_finite() || self.sample_period_s <= 0.0 {
            return Err(invalid(format!(
                "sample_period_s must be positive, got {}",
                self.sample_period_s
            )));
        }
        if self.terms.is_empty() {
            return Err(invalid("at least one term is required".to_string()));
        }
        for (index, term) in self.terms.iter().enumerate() {
            if !term.gain.is_finite() {
                return Err(invalid(format!(
                    "term {index} ({}) gain must be finite, got {}",
                    term.kind, term.gain
                )));
            }
        }
        Ok(())
    }

    /// Validate and instantiate the loop for quantity `Q`.
    ///
    /// Target and gains are checked again after narrowing to `Q`'s
    /// precision; a value that is finite as `f64` can overflow `f32`.
    pub fn build<Q: Correctable>(&self) -> ControlResult<ControlLoop<Q>> {
        self.validate()?;
        let target = self.target::<Q>()?;
        self.terms
            .iter()
            .enumerate()
            .map(|(index, term)| term.build(index, target))
            .collect()
    }

    /// Setpoint in `Q`'s precision.
    pub fn target<Q: Airway>(&self) -> ControlResult<Q> {
        let value = in_precision::<Q::Precision>(self.target, "target").map_err(invalid)?;
        Ok(Q::new(value))
    }

    pub fn sample_period<P: Precision>(&self) -> Time<P> {
        Time::seconds(P::from_f64(self.sample_period_s))
    }

    /// First process snapshot of the loop, checked against the sample period.
    pub fn process<Q: Airway>(&self, measurement: Q) -> ControlResult<Process<Q>> {
        Process::checked(measurement, self.sample_period())
    }
}

fn in_precision<P: Precision>(value: f64, what: &'static str) -> Result<P, String> {
    vc_core::ensure_finite(P::from_f64(value), what)
        .map_err(|_| format!("{what} {value} overflows {}", core::any::type_name::<P>()))
}

fn invalid(what: String) -> ControlError {
    ControlError::InvalidTuning { what }
}
