use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{One, Zero};

/// The contract a value must satisfy to serve as an interval endpoint.
///
/// Endpoints are plain `Copy` reals with a partial order and the elementary
/// functions the interval operations forward to.
pub trait Endpoint:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
{
    fn from_int(n: u64) -> Self;

    fn from_ratio(numerator: u64, denominator: u64) -> Self {
        Self::from_int(numerator) / Self::from_int(denominator)
    }

    fn exp(self) -> Self;
    fn log(self) -> Self;
    fn powi(self, exp: u32) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;

    /// The next representable value above `self`.
    fn next_up(self) -> Self;

    /// The next representable value below `self`.
    fn next_down(self) -> Self;

    /// Check whether two endpoint values are close to each other.
    ///
    /// Relative tolerance is with respect to the second value because it is
    /// usually the expected one.
    #[inline]
    fn is_close_with(self, other: Self, relative_tolerance: Self, absolute_tolerance: Self) -> bool {
        let diff = (self - other).abs();
        diff <= absolute_tolerance || diff <= relative_tolerance * other.abs()
    }

    #[inline]
    fn is_close(self, other: Self) -> bool {
        self.is_close_with(
            other,
            Self::from_ratio(1, 1_000_000_000),
            Self::from_ratio(1, 100_000_000),
        )
    }
}

#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr $(,)?) => {
        assert!(
            $crate::numbers::Endpoint::is_close($a, $b),
            "assertion failed: `is_close(left, right)`\nleft:  {}\nright: {}",
            $a,
            $b,
        )
    };
    ($a:expr, $b:expr, $relative_tolerance:expr, $absolute_tolerance:expr $(,)?) => {
        assert!(
            $crate::numbers::Endpoint::is_close_with($a, $b, $relative_tolerance, $absolute_tolerance),
            "assertion failed: `is_close(left, right, relative_tol = {}, absolute_tol = {})`\nleft:  {}\nright: {}",
            $relative_tolerance,
            $absolute_tolerance,
            $a,
            $b,
        )
    };
}
