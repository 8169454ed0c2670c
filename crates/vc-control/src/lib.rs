//! Discrete PID control terms for airway quantities.
//!
//! A control loop is an ordered list of terms (proportional, integral,
//! differential) evaluated once per sample against a [`Process`] snapshot.
//! Each term produces a [`CorrectionValue`]; the loop converts every value
//! back into the controlled quantity and sums them.
//!
//! # Architecture
//!
//! - [`Gain`], [`Time`] and [`Process`] carry the per-sample inputs
//! - [`Proportional`], [`Integral`] and [`Differential`] own their own state
//! - [`Control`] stores any term and dispatches with an exhaustive match
//! - [`ControlLoop`] composes terms into one correction per tick
//! - [`LoopTuning`] is the serde description a driver loads from disk
//!
//! Term evaluation never fails. A zero-duration process makes the
//! differential term divide by zero and the resulting inf/NaN propagates;
//! [`Process::checked`] is the opt-in guard.

pub mod control;
pub mod control_loop;
pub mod differential;
pub mod error;
pub mod gain;
pub mod integral;
pub mod process;
pub mod proportional;
pub mod time;
pub mod tuning;
pub mod value;

pub use control::{Control, TermKind};
pub use control_loop::ControlLoop;
pub use differential::Differential;
pub use error::{ControlError, ControlResult};
pub use gain::Gain;
pub use integral::Integral;
pub use process::Process;
pub use proportional::Proportional;
pub use time::Time;
pub use tuning::{LoopTuning, TermTuning};
pub use value::{Correctable, CorrectionValue};
