//! Correction values and the quantity conversion table.
//!
//! Each term produces a [`CorrectionValue`] typed only by precision, so terms
//! written against different quantities can feed one accumulation. The set
//! of quantities that convert to and from a correction is closed: one
//! [`Correctable`] impl per airway quantity, written out below.

use core::fmt;

use vc_core::{Airway, Flow, Peep, Precision, Pressure, Real, Volume};

use crate::error::ControlResult;

/// Scalar output of a single control term.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct CorrectionValue<P = Real>(P);

impl<P: Precision> CorrectionValue<P> {
    pub fn new(value: P) -> Self {
        Self(value)
    }

    pub fn value(self) -> P {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Fail-fast check for callers that do not want NaN/inf to propagate.
    pub fn ensure_finite(self) -> ControlResult<Self> {
        vc_core::ensure_finite(self.0, "correction")?;
        Ok(self)
    }
}

impl<P: Precision> fmt::Display for CorrectionValue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Airway quantity with an explicit conversion to and from [`CorrectionValue`].
pub trait Correctable: Airway {
    fn into_correction(self) -> CorrectionValue<Self::Precision>;

    fn from_correction(value: CorrectionValue<Self::Precision>) -> Self;
}

macro_rules! correction_conversions {
    ($($name:ident),*) => {
        $(
            impl<P: Precision> From<$name<P>> for CorrectionValue<P> {
                #[inline]
                fn from(q: $name<P>) -> Self {
                    Self(q.value())
                }
            }

            impl<P: Precision> From<CorrectionValue<P>> for $name<P> {
                #[inline]
                fn from(v: CorrectionValue<P>) -> Self {
                    $name::new(v.0)
                }
            }

            impl<P: Precision> Correctable for $name<P> {
                #[inline]
                fn into_correction(self) -> CorrectionValue<P> {
                    self.into()
                }

                #[inline]
                fn from_correction(value: CorrectionValue<P>) -> Self {
                    value.into()
                }
            }
        )*
    };
}

correction_conversions!(Pressure, Peep, Flow, Volume);
