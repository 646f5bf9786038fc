//! # Number types
//!
//! Linear programs are solved exactly. The traits in this module describe what the simplex method
//! and branch and bound need from a number type; any `num::rational::Ratio` over an integer type
//! satisfies them.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::Integer;
use num::rational::Ratio;
use num_traits::{FromPrimitive, One, Zero};

/// Arbitrary precision rational number, the default number type.
pub type Rational = num::BigRational;

/// An ordered field with owned arithmetic.
pub trait OrderedField:
    Clone +
    Ord +
    Debug +
    Display +
    Zero +
    One +
    FromPrimitive +
    Rounding +
    Neg<Output=Self> +
    Add<Output=Self> +
    Sub<Output=Self> +
    Mul<Output=Self> +
    Div<Output=Self>
{
}

impl<T> OrderedField for T
where
    T: Clone + Ord + Debug + Display + Zero + One + FromPrimitive + Rounding +
        Neg<Output=T> + Add<Output=T> + Sub<Output=T> + Mul<Output=T> + Div<Output=T>,
{
}

/// Arithmetic on references to an ordered field, producing owned values.
///
/// Used as `for<'r> &'r F: OrderedFieldRef<F>`.
pub trait OrderedFieldRef<F>:
    Sized +
    Neg<Output=F> +
    Add<Output=F> +
    Sub<Output=F> +
    Mul<Output=F> +
    Div<Output=F>
{
}

impl<F, T> OrderedFieldRef<F> for T
where
    T: Neg<Output=F> + Add<Output=F> + Sub<Output=F> + Mul<Output=F> + Div<Output=F>,
{
}

/// Rounding towards the integers, needed for branching.
pub trait Rounding {
    /// Largest integer smaller than or equal to this value.
    fn floor(&self) -> Self;
    /// Smallest integer larger than or equal to this value.
    fn ceil(&self) -> Self;
    /// Whether this value has no fractional part.
    fn is_integer(&self) -> bool;
}

impl<T: Clone + Integer> Rounding for Ratio<T> {
    fn floor(&self) -> Self {
        Ratio::floor(self)
    }

    fn ceil(&self) -> Self {
        Ratio::ceil(self)
    }

    fn is_integer(&self) -> bool {
        Ratio::is_integer(self)
    }
}

#[cfg(test)]
mod test {
    use num::rational::Rational64;

    use super::Rounding;

    #[test]
    fn rounding() {
        let value = Rational64::new(7, 2);
        assert_eq!(Rounding::floor(&value), Rational64::from_integer(3));
        assert_eq!(Rounding::ceil(&value), Rational64::from_integer(4));
        assert!(!Rounding::is_integer(&value));

        let negative = Rational64::new(-7, 2);
        assert_eq!(Rounding::floor(&negative), Rational64::from_integer(-4));
        assert_eq!(Rounding::ceil(&negative), Rational64::from_integer(-3));

        assert!(Rounding::is_integer(&Rational64::from_integer(5)));
    }
}
