//! Sample durations.

use core::fmt;

use vc_core::{Precision, Real};

/// Elapsed time covered by one sample, in seconds.
///
/// No sign or magnitude checks are made here; see [`crate::Process::checked`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Time<P = Real>(P);

impl<P: Precision> Time<P> {
    pub fn seconds(value: P) -> Self {
        Self(value)
    }

    pub fn millis(value: P) -> Self {
        Self(value / P::from_f64(1e3))
    }

    /// Elapsed seconds as a plain number.
    #[inline]
    pub fn count(self) -> P {
        self.0
    }
}

impl<P: Precision> From<std::time::Duration> for Time<P> {
    fn from(d: std::time::Duration) -> Self {
        Self(P::from_f64(d.as_secs_f64()))
    }
}

macro_rules! si_time {
    ($p:ident) => {
        impl From<uom::si::$p::Time> for Time<$p> {
            fn from(t: uom::si::$p::Time) -> Self {
                use uom::si::time::second;
                Self(t.get::<second>())
            }
        }

        impl Time<$p> {
            pub fn to_si(self) -> uom::si::$p::Time {
                use uom::si::time::second;
                uom::si::$p::Time::new::<second>(self.0)
            }
        }
    };
}

si_time!(f32);
si_time!(f64);

impl<P: Precision> fmt::Display for Time<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.0)
    }
}
