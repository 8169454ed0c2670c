//! Uniform storage and dispatch over the three control terms.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::differential::Differential;
use crate::integral::Integral;
use crate::process::Process;
use crate::proportional::Proportional;
use crate::value::{Correctable, CorrectionValue};

/// Which term a [`Control`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    Proportional,
    Integral,
    Differential,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Proportional => "P",
            Self::Integral => "I",
            Self::Differential => "D",
        };
        f.write_str(name)
    }
}

/// One control term of a loop.
///
/// Every match over this enum is exhaustive: a new term kind needs a variant
/// here and an arm in each match below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control<Q: Correctable> {
    Proportional(Proportional<Q>),
    Integral(Integral<Q>),
    Differential(Differential<Q>),
}

impl<Q: Correctable> Control<Q> {
    /// Evaluate the held term against `process`.
    ///
    /// Only the held term's own state changes.
    pub fn apply(&mut self, process: &Process<Q>) -> CorrectionValue<Q::Precision> {
        match self {
            Self::Proportional(term) => term.evaluate(process),
            Self::Integral(term) => term.evaluate(process),
            Self::Differential(term) => term.evaluate(process),
        }
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Self::Proportional(_) => TermKind::Proportional,
            Self::Integral(_) => TermKind::Integral,
            Self::Differential(_) => TermKind::Differential,
        }
    }

    pub fn target(&self) -> Q {
        match self {
            Self::Proportional(term) => term.target(),
            Self::Integral(term) => term.target(),
            Self::Differential(term) => term.target(),
        }
    }
}

impl<Q: Correctable> From<Proportional<Q>> for Control<Q> {
    fn from(term: Proportional<Q>) -> Self {
        Self::Proportional(term)
    }
}

impl<Q: Correctable> From<Integral<Q>> for Control<Q> {
    fn from(term: Integral<Q>) -> Self {
        Self::Integral(term)
    }
}

impl<Q: Correctable> From<Differential<Q>> for Control<Q> {
    fn from(term: Differential<Q>) -> Self {
        Self::Differential(term)
    }
}
