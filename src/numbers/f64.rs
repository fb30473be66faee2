use std::{
    fmt::{Display, Formatter, Result},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{One, Zero};

use crate::numbers::Endpoint;

impl Endpoint for f64 {
    #[inline]
    fn from_int(n: u64) -> Self {
        n as f64
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn log(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn powi(self, exp: u32) -> Self {
        f64::powi(self, exp.try_into().unwrap())
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        f64::min(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn next_up(self) -> Self {
        f64::next_up(self)
    }

    #[inline]
    fn next_down(self) -> Self {
        f64::next_down(self)
    }
}

/// An `f64` wrapper whose `Display` prints the shortest representation that
/// round-trips, via `ryu`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct F64(f64);

impl F64 {
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0
    }
}

impl From<u64> for F64 {
    #[inline]
    fn from(u: u64) -> Self {
        Self(u as f64)
    }
}

impl From<f64> for F64 {
    #[inline]
    fn from(f: f64) -> Self {
        Self(f)
    }
}

impl From<F64> for f64 {
    #[inline]
    fn from(f: F64) -> Self {
        f.0
    }
}

impl Display for F64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", ryu::Buffer::new().format(self.0))
    }
}

macro_rules! forward_binop {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident) => {
        impl $op for F64 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0.$method(rhs.0))
            }
        }

        impl $assign_op for F64 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0.$assign_method(rhs.0);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);

impl Neg for F64 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Zero for F64 {
    #[inline]
    fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for F64 {
    #[inline]
    fn one() -> Self {
        Self(1.0)
    }
}

impl Endpoint for F64 {
    #[inline]
    fn from_int(n: u64) -> Self {
        Self(n as f64)
    }

    #[inline]
    fn exp(self) -> Self {
        Self(self.0.exp())
    }

    #[inline]
    fn log(self) -> Self {
        Self(self.0.ln())
    }

    #[inline]
    fn powi(self, exp: u32) -> Self {
        Self(Endpoint::powi(self.0, exp))
    }

    #[inline]
    fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    #[inline]
    fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[inline]
    fn next_up(self) -> Self {
        Self(self.0.next_up())
    }

    #[inline]
    fn next_down(self) -> Self {
        Self(self.0.next_down())
    }
}
