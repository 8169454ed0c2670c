//! Scalar gain tagged with the quantity it scales.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Mul;

use vc_core::{Airway, Flow, Peep, Precision, Pressure, Volume};

/// Multiplier applied to an error (or accumulated error) of quantity `Q`.
///
/// The tag keeps a pressure gain from being applied to a flow error. Any
/// value is accepted, including zero and negative gains.
pub struct Gain<Q: Airway> {
    value: Q::Precision,
    _quantity: PhantomData<Q>,
}

impl<Q: Airway> Gain<Q> {
    pub fn new(value: Q::Precision) -> Self {
        Self {
            value,
            _quantity: PhantomData,
        }
    }

    pub fn value(&self) -> Q::Precision {
        self.value
    }

    /// `gain * quantity`.
    #[inline]
    pub fn apply(&self, quantity: Q) -> Q {
        quantity.scale(self.value)
    }
}

// Manual impls: derives would bound on `Q` rather than `Q::Precision`.
impl<Q: Airway> Clone for Gain<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Airway> Copy for Gain<Q> {}

impl<Q: Airway> PartialEq for Gain<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Q: Airway> Default for Gain<Q> {
    fn default() -> Self {
        Self::new(<Q::Precision as Precision>::ZERO)
    }
}

impl<Q: Airway> fmt::Debug for Gain<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Gain").field(&self.value).finish()
    }
}

impl<Q: Airway> fmt::Display for Gain<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<Q: Airway> Mul<Q> for Gain<Q> {
    type Output = Q;

    #[inline]
    fn mul(self, rhs: Q) -> Q {
        self.apply(rhs)
    }
}

macro_rules! quantity_times_gain {
    ($($name:ident),*) => {
        $(
            impl<P: Precision> Mul<Gain<$name<P>>> for $name<P> {
                type Output = $name<P>;

                #[inline]
                fn mul(self, rhs: Gain<$name<P>>) -> $name<P> {
                    rhs.apply(self)
                }
            }
        )*
    };
}

quantity_times_gain!(Pressure, Peep, Flow, Volume);

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::{cm_h2o, lpm, ml};

    #[test]
    fn gain_identity_and_zero() {
        let q = lpm(12.5);
        assert_eq!(Gain::new(1.0) * q, q);
        assert_eq!(Gain::new(0.0) * q, Flow::zero());
        assert_eq!(Gain::<Flow>::default().value(), 0.0);
    }

    #[test]
    fn gain_commutes() {
        let g = Gain::<Pressure>::new(-2.0);
        assert_eq!(g * cm_h2o(3.0), cm_h2o(3.0) * g);
        assert_eq!(g * cm_h2o(3.0), cm_h2o(-6.0));
    }

    #[test]
    fn gain_single_precision() {
        let g = Gain::<Volume<f32>>::new(0.5);
        assert_eq!(g.apply(Volume::new(4.0_f32)), Volume::new(2.0_f32));
        assert_eq!(ml(4.0) * Gain::new(0.25), ml(1.0));
    }

    #[test]
    fn gain_display_is_raw_value() {
        assert_eq!(Gain::<Peep>::new(0.5).to_string(), "0.5");
    }
}
