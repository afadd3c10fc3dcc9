use std::fmt;
use std::hash::Hash;
use std::ops::Neg;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Num, One, Signed, Zero};

use crate::sqrt::Radicand;

/// Element types a [`Vector`](crate::math::Vector) or [`Matrix`](crate::math::Matrix) can hold.
///
/// Implemented for the two exact domains, `BigInt` and `BigDecimal`. Arithmetic comes from
/// `num_traits::Num`; the methods here cover what differs between the domains.
pub trait Scalar:
    Clone + fmt::Debug + fmt::Display + Eq + Hash + Num + Neg<Output = Self> + Radicand
{
    /// Absolute value.
    fn magnitude(&self) -> Self;

    /// Whether the value has a multiplicative inverse in its own domain.
    fn is_unit(&self) -> bool;
}

impl Scalar for BigInt {
    fn magnitude(&self) -> Self {
        self.abs()
    }

    /// Only +1 and -1 are invertible over the integers.
    fn is_unit(&self) -> bool {
        self.abs().is_one()
    }
}

impl Scalar for BigDecimal {
    fn magnitude(&self) -> Self {
        self.abs()
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }
}
