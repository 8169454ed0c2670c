use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::VcError;

/// Default floating point type used throughout the system
pub type Real = f64;

/// Underlying numeric type of an airway quantity.
///
/// Implemented for `f32` and `f64` only. Quantities, gains and correction
/// values all carry one of these and never mix precisions.
pub trait Precision:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Lossy for `f32`.
    fn from_f64(v: f64) -> Self;

    fn to_f64(self) -> f64;

    fn abs(self) -> Self;

    fn is_finite(self) -> bool;
}

impl Precision for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Precision for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Looser tolerances suited to single precision arithmetic.
    pub fn single() -> Self {
        Self {
            abs: 1e-6,
            rel: 1e-5,
        }
    }
}

pub fn nearly_equal<P: Precision>(a: P, b: P, tol: Tolerances) -> bool {
    let (a, b) = (a.to_f64(), b.to_f64());
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite<P: Precision>(v: P, what: &'static str) -> Result<P, VcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VcError::NonFinite {
            what,
            value: v.to_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_single_precision() {
        let tol = Tolerances::single();
        assert!(nearly_equal(0.1_f32 * 3.0, 0.3_f32, tol));
        assert!(!nearly_equal(0.3_f32, 0.31_f32, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_detects_single_infinity() {
        let err = ensure_finite(f32::INFINITY, "gain").unwrap_err();
        assert_eq!(
            err,
            VcError::NonFinite {
                what: "gain",
                value: f64::INFINITY
            }
        );
        assert_eq!(ensure_finite(2.5_f32, "gain"), Ok(2.5));
    }

    #[test]
    fn precision_constants() {
        assert_eq!(<f32 as Precision>::ZERO + <f32 as Precision>::ONE, 1.0);
        assert_eq!(<f64 as Precision>::from_f64(0.25).to_f64(), 0.25);
        assert_eq!(Precision::abs(-3.0_f64), 3.0);
    }
}
