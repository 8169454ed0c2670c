// vc-core/src/units.rs

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::numeric::{Precision, Real};

/// Pascal per centimetre of water (conventional, 4 °C).
pub const PASCAL_PER_CM_H2O: f64 = 98.0665;
/// Cubic metre per second in one litre per minute.
pub const CUBIC_METER_PER_SECOND_PER_LPM: f64 = 1.0 / 60_000.0;
/// Cubic metre in one millilitre.
pub const CUBIC_METER_PER_ML: f64 = 1e-6;

/// Capability shared by every controllable airway quantity.
///
/// A quantity is a thin wrapper around one [`Precision`] value expressed in
/// the quantity's clinical unit. Quantities of different kinds never convert
/// into each other implicitly.
pub trait Airway:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
    type Precision: Precision;

    /// Clinical unit symbol the raw value is expressed in.
    const UNIT: &'static str;

    fn new(value: Self::Precision) -> Self;

    fn value(self) -> Self::Precision;

    #[inline]
    fn zero() -> Self {
        Self::new(<Self::Precision as Precision>::ZERO)
    }

    /// Scalar multiplication by the quantity's own precision.
    #[inline]
    fn scale(self, by: Self::Precision) -> Self {
        Self::new(self.value() * by)
    }
}

macro_rules! airway_quantity {
    ($(#[$meta:meta])* $name:ident, $unit:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name<P = Real>(P);

        impl<P: Precision> $name<P> {
            #[inline]
            pub fn new(value: P) -> Self {
                Self(value)
            }

            #[inline]
            pub fn value(self) -> P {
                self.0
            }
        }

        impl<P: Precision> Airway for $name<P> {
            type Precision = P;
            const UNIT: &'static str = $unit;

            #[inline]
            fn new(value: P) -> Self {
                Self(value)
            }

            #[inline]
            fn value(self) -> P {
                self.0
            }
        }

        impl<P: Precision> Add for $name<P> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<P: Precision> Sub for $name<P> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<P: Precision> AddAssign for $name<P> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl<P: Precision> SubAssign for $name<P> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl<P: Precision> Neg for $name<P> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<P: Precision> Mul<P> for $name<P> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: P) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            #[inline]
            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                $name(self * rhs.0)
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            #[inline]
            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                $name(self * rhs.0)
            }
        }

        impl<P: Precision> fmt::Display for $name<P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, $unit)
            }
        }
    };
}

airway_quantity!(
    /// Airway pressure in cmH2O.
    Pressure,
    "cmH2O"
);
airway_quantity!(
    /// Positive end-expiratory pressure in cmH2O.
    Peep,
    "cmH2O"
);
airway_quantity!(
    /// Volumetric gas flow in L/min.
    Flow,
    "L/min"
);
airway_quantity!(
    /// Gas volume in mL.
    Volume,
    "mL"
);

impl<P: Precision> From<Pressure<P>> for Peep<P> {
    fn from(p: Pressure<P>) -> Self {
        Self(p.0)
    }
}

impl<P: Precision> From<Peep<P>> for Pressure<P> {
    fn from(p: Peep<P>) -> Self {
        Self(p.0)
    }
}

// SI interop through uom, one expansion per precision.
macro_rules! si_interop {
    ($p:ident) => {
        impl From<uom::si::$p::Pressure> for Pressure<$p> {
            fn from(p: uom::si::$p::Pressure) -> Self {
                use uom::si::pressure::pascal;
                Self(p.get::<pascal>() / PASCAL_PER_CM_H2O as $p)
            }
        }

        impl Pressure<$p> {
            pub fn to_si(self) -> uom::si::$p::Pressure {
                use uom::si::pressure::pascal;
                uom::si::$p::Pressure::new::<pascal>(self.0 * PASCAL_PER_CM_H2O as $p)
            }
        }

        impl From<uom::si::$p::Pressure> for Peep<$p> {
            fn from(p: uom::si::$p::Pressure) -> Self {
                Pressure::<$p>::from(p).into()
            }
        }

        impl Peep<$p> {
            pub fn to_si(self) -> uom::si::$p::Pressure {
                Pressure::<$p>::from(self).to_si()
            }
        }

        impl From<uom::si::$p::VolumeRate> for Flow<$p> {
            fn from(q: uom::si::$p::VolumeRate) -> Self {
                use uom::si::volume_rate::cubic_meter_per_second;
                Self(q.get::<cubic_meter_per_second>() / CUBIC_METER_PER_SECOND_PER_LPM as $p)
            }
        }

        impl Flow<$p> {
            pub fn to_si(self) -> uom::si::$p::VolumeRate {
                use uom::si::volume_rate::cubic_meter_per_second;
                uom::si::$p::VolumeRate::new::<cubic_meter_per_second>(
                    self.0 * CUBIC_METER_PER_SECOND_PER_LPM as $p,
                )
            }
        }

        impl From<uom::si::$p::Volume> for Volume<$p> {
            fn from(v: uom::si::$p::Volume) -> Self {
                use uom::si::volume::cubic_meter;
                Self(v.get::<cubic_meter>() / CUBIC_METER_PER_ML as $p)
            }
        }

        impl Volume<$p> {
            pub fn to_si(self) -> uom::si::$p::Volume {
                use uom::si::volume::cubic_meter;
                uom::si::$p::Volume::new::<cubic_meter>(self.0 * CUBIC_METER_PER_ML as $p)
            }
        }
    };
}

si_interop!(f32);
si_interop!(f64);

#[inline]
pub fn cm_h2o(v: Real) -> Pressure {
    Pressure::new(v)
}

#[inline]
pub fn peep(v: Real) -> Peep {
    Peep::new(v)
}

#[inline]
pub fn lpm(v: Real) -> Flow {
    Flow::new(v)
}

#[inline]
pub fn ml(v: Real) -> Volume {
    Volume::new(v)
}
