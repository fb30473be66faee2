use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{One, Zero};

use crate::{error::IntervalError, numbers::Endpoint};

/// A closed real interval `[lo, hi]` with its midpoint cached at construction.
///
/// Values are immutable: every operation builds a fresh interval. Bound
/// arithmetic is performed in the endpoint type's default rounding; results
/// enclose the true range of the operation over real operands, up to that
/// rounding. Callers needing the bounds to absorb the rounding error can
/// apply [`Interval::outward`] to a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    lo: T,
    hi: T,
    mid: T,
}

impl<T: Endpoint> Interval<T> {
    /// Checked constructor. Fails when the lower bound exceeds the upper one.
    pub fn new(lo: T, hi: T) -> Result<Self, IntervalError> {
        if lo > hi {
            return Err(IntervalError::InvalidBounds);
        }
        Ok(Self::exact(lo, hi))
    }

    /// The degenerate interval `[x, x]` representing an exact number.
    ///
    /// This is the single promotion path by which plain numbers enter
    /// mixed-operand arithmetic.
    #[inline]
    pub fn point(x: T) -> Self {
        Self::exact(x, x)
    }

    #[inline]
    pub(crate) fn exact(lo: T, hi: T) -> Self {
        debug_assert!(!(lo > hi), "interval bounds out of order: [{lo}, {hi}]");
        let half = T::from_ratio(1, 2);
        Self {
            lo,
            hi,
            mid: half * lo + half * hi,
        }
    }

    #[inline]
    pub fn lo(self) -> T {
        self.lo
    }

    #[inline]
    pub fn hi(self) -> T {
        self.hi
    }

    /// The midpoint `0.5·lo + 0.5·hi`, computed once at construction.
    #[inline]
    pub fn mid(self) -> T {
        self.mid
    }

    /// True iff `x` lies in the closed range.
    #[inline]
    pub fn contains(self, x: T) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Conservative `self ≥ rhs`: true only when every point of `self` is at
    /// least every point of `rhs`. A scalar right-hand side is promoted to a
    /// degenerate interval, so `iv.ge(c)` is `iv.lo() ≥ c`.
    ///
    /// This is a dominance test, not a total order: for overlapping
    /// intervals, `a.ge(b)` and `b.ge(a)` are both false.
    #[inline]
    pub fn ge(self, rhs: impl Into<Self>) -> bool {
        self.lo >= rhs.into().hi
    }

    /// Strict form of [`Interval::ge`].
    #[inline]
    pub fn gt(self, rhs: impl Into<Self>) -> bool {
        self.lo > rhs.into().hi
    }

    /// `self ≤ c` for every point of the interval. Defined against plain
    /// numbers only; for intervals, swap the operands through [`Interval::ge`].
    #[inline]
    pub fn le(self, c: T) -> bool {
        self.hi <= c
    }

    /// Strict form of [`Interval::le`].
    #[inline]
    pub fn lt(self, c: T) -> bool {
        self.hi < c
    }

    /// Reversed subtraction `c - self`.
    #[inline]
    pub fn sub_from(self, c: T) -> Self {
        Self::exact(c - self.hi, c - self.lo)
    }

    /// Interval division. Fails when the divisor's closed range contains
    /// zero: the reciprocal would be unbounded, and no closed interval
    /// encloses it.
    pub fn checked_div(self, rhs: Self) -> Result<Self, IntervalError> {
        if rhs.contains(T::zero()) {
            return Err(IntervalError::DivisorContainsZero);
        }
        Ok(self * Self::exact(T::one() / rhs.hi, T::one() / rhs.lo))
    }

    /// Reversed division `c / self`, with the same contains-zero check as
    /// [`Interval::checked_div`]. The bounds follow `[c/hi, c/lo]`, which
    /// assumes a nonnegative numerator; a negative `c` fails with
    /// `InvalidBounds`.
    pub fn div_from(self, c: T) -> Result<Self, IntervalError> {
        if self.contains(T::zero()) {
            return Err(IntervalError::DivisorContainsZero);
        }
        Self::new(c / self.hi, c / self.lo)
    }

    /// Raise to a nonnegative integer power. Fails for a negative exponent.
    ///
    /// For odd exponents, and for even exponents when the interval lies
    /// strictly on one side of zero, the power is monotone and the bounds map
    /// directly. Otherwise zero is attained inside the interval and becomes
    /// the lower bound.
    pub fn pow(self, n: i32) -> Result<Self, IntervalError> {
        if n < 0 {
            return Err(IntervalError::NegativeExponent);
        }
        Ok(self.pow_nonneg(n.unsigned_abs()))
    }

    pub(crate) fn pow_nonneg(self, n: u32) -> Self {
        let a = self.lo.powi(n);
        let b = self.hi.powi(n);
        if n % 2 == 1 || self.lo > T::zero() || self.hi < T::zero() {
            Self::exact(a.min(b), a.max(b))
        } else {
            Self::exact(T::zero(), a.max(b))
        }
    }

    /// Square root. Fails unless the lower bound is nonnegative.
    pub fn sqrt(self) -> Result<Self, IntervalError> {
        if self.lo < T::zero() {
            return Err(IntervalError::SqrtOfNegative);
        }
        Ok(Self::exact(self.lo.sqrt(), self.hi.sqrt()))
    }

    /// Natural logarithm of both bounds. The domain is not checked: on
    /// nonpositive bounds this yields whatever the endpoint type's `log`
    /// yields (NaN or −∞ for floats).
    pub fn log(self) -> Self {
        Self::exact(self.lo.log(), self.hi.log())
    }

    /// Exponential of both bounds.
    pub fn exp(self) -> Self {
        Self::exact(self.lo.exp(), self.hi.exp())
    }

    /// Absolute value. When the interval contains zero, the minimum absolute
    /// value is zero; otherwise both bounds keep their distance to zero.
    pub fn abs(self) -> Self {
        let a = self.lo.abs();
        let b = self.hi.abs();
        if self.contains(T::zero()) {
            Self::exact(T::zero(), a.max(b))
        } else {
            Self::exact(a.min(b), a.max(b))
        }
    }

    pub fn is_finite(self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    pub fn is_nan(self) -> bool {
        self.lo.is_nan() || self.hi.is_nan()
    }

    /// Widen each bound outward by one representable step.
    ///
    /// Opt-in safeguard for callers who need the result to absorb the
    /// round-to-nearest error of the bound arithmetic; no operation applies
    /// it implicitly.
    pub fn outward(self) -> Self {
        Self::exact(self.lo.next_down(), self.hi.next_up())
    }
}

impl<T: Endpoint> From<T> for Interval<T> {
    #[inline]
    fn from(x: T) -> Self {
        Self::point(x)
    }
}

impl<T: Endpoint> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} , {}]", self.lo, self.hi)
    }
}

impl<T: Endpoint> Neg for Interval<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::exact(-self.hi, -self.lo)
    }
}

impl<T: Endpoint> Add for Interval<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::exact(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl<T: Endpoint> Add<T> for Interval<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self + Self::from(rhs)
    }
}

impl<T: Endpoint> AddAssign for Interval<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Endpoint> Sub for Interval<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T: Endpoint> Sub<T> for Interval<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self - Self::from(rhs)
    }
}

impl<T: Endpoint> SubAssign for Interval<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Endpoint> Mul for Interval<T> {
    type Output = Self;

    /// Interval multiplication is not monotone in general, so the result is
    /// the hull of all four endpoint cross products.
    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.lo * rhs.lo;
        let b = self.lo * rhs.hi;
        let c = self.hi * rhs.lo;
        let d = self.hi * rhs.hi;
        Self::exact(a.min(b).min(c).min(d), a.max(b).max(c).max(d))
    }
}

impl<T: Endpoint> Mul<T> for Interval<T> {
    type Output = Self;

    /// Scaling by a plain number preserves or reverses the bound order with
    /// the sign of the scalar, so the four-product hull reduces to one case
    /// split. Agrees with `self * Interval::point(rhs)`.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        if rhs >= T::zero() {
            Self::exact(rhs * self.lo, rhs * self.hi)
        } else {
            Self::exact(rhs * self.hi, rhs * self.lo)
        }
    }
}

impl<T: Endpoint> MulAssign for Interval<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Endpoint> Div<T> for Interval<T> {
    type Output = Self;

    /// Division by a plain number is multiplication by its reciprocal.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self * (T::one() / rhs)
    }
}

impl<T: Endpoint> Zero for Interval<T> {
    #[inline]
    fn zero() -> Self {
        Self::point(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }
}

impl<T: Endpoint> One for Interval<T> {
    #[inline]
    fn one() -> Self {
        Self::point(T::one())
    }
}

#[test]
fn construction_checks_bound_order() {
    let iv = Interval::new(1.0, 2.0).unwrap();
    assert_eq!(iv.lo(), 1.0);
    assert_eq!(iv.hi(), 2.0);
    assert_eq!(iv.mid(), 1.5);
    assert_eq!(Interval::new(2.0, 1.0), Err(IntervalError::InvalidBounds));
    let p = Interval::point(3.0);
    assert_eq!((p.lo(), p.hi(), p.mid()), (3.0, 3.0, 3.0));
}

#[test]
fn negation_mirrors_bounds() {
    let iv = Interval::new(-1.0, 2.5).unwrap();
    assert_eq!(-iv, Interval::new(-2.5, 1.0).unwrap());
    assert_eq!(-(-iv), iv);
}

#[test]
fn addition_and_subtraction() {
    let a = Interval::new(1.0, 2.0).unwrap();
    let b = Interval::new(-3.0, 4.0).unwrap();
    assert_eq!(a + b, Interval::new(-2.0, 6.0).unwrap());
    assert_eq!(a + 1.0, Interval::new(2.0, 3.0).unwrap());
    assert_eq!(a - b, Interval::new(-3.0, 5.0).unwrap());
    assert_eq!(a - 1.0, Interval::new(0.0, 1.0).unwrap());
    assert_eq!(a.sub_from(1.0), Interval::new(-1.0, 0.0).unwrap());
    let mut acc = a;
    acc += b;
    acc -= b;
    assert_eq!(acc, a);
}

#[test]
fn multiplication_takes_the_product_hull() {
    let a = Interval::new(1.0, 2.0).unwrap();
    let b = Interval::new(-3.0, 4.0).unwrap();
    assert_eq!(a * b, Interval::new(-6.0, 8.0).unwrap());
    let c = Interval::new(-2.0, 3.0).unwrap();
    assert_eq!(c * c, Interval::new(-6.0, 9.0).unwrap());
}

#[test]
fn scalar_multiplication_splits_on_sign() {
    let a = Interval::new(1.0, 2.0).unwrap();
    assert_eq!(a * 3.0, Interval::new(3.0, 6.0).unwrap());
    assert_eq!(a * -3.0, Interval::new(-6.0, -3.0).unwrap());
    assert_eq!(a * 0.0, Interval::new(0.0, 0.0).unwrap());
    assert_eq!(a * -3.0, a * Interval::point(-3.0));
    assert_eq!(a * 3.0, a * Interval::point(3.0));
}

#[test]
fn division_rejects_divisors_containing_zero() {
    let a = Interval::new(1.0, 2.0).unwrap();
    assert_eq!(
        a.checked_div(Interval::new(-1.0, 1.0).unwrap()),
        Err(IntervalError::DivisorContainsZero)
    );
    assert_eq!(
        a.checked_div(Interval::new(0.0, 1.0).unwrap()),
        Err(IntervalError::DivisorContainsZero)
    );
    assert_eq!(
        a.checked_div(Interval::new(2.0, 4.0).unwrap()),
        Ok(Interval::new(0.25, 1.0).unwrap())
    );
    assert_eq!(a / 2.0, Interval::new(0.5, 1.0).unwrap());
    assert_eq!(
        Interval::new(2.0, 4.0).unwrap().div_from(1.0),
        Ok(Interval::new(0.25, 0.5).unwrap())
    );
    assert_eq!(
        Interval::new(-1.0, 1.0).unwrap().div_from(1.0),
        Err(IntervalError::DivisorContainsZero)
    );
}

#[test]
fn powers_split_on_parity_and_sign() {
    let straddling = Interval::new(-2.0, 3.0).unwrap();
    assert_eq!(straddling.pow(2), Ok(Interval::new(0.0, 9.0).unwrap()));
    let positive = Interval::new(1.0, 3.0).unwrap();
    assert_eq!(positive.pow(2), Ok(Interval::new(1.0, 9.0).unwrap()));
    let negative = Interval::new(-3.0, -1.0).unwrap();
    assert_eq!(negative.pow(3), Ok(Interval::new(-27.0, -1.0).unwrap()));
    assert_eq!(negative.pow(2), Ok(Interval::new(1.0, 9.0).unwrap()));
    assert_eq!(straddling.pow(-1), Err(IntervalError::NegativeExponent));
    // x^0 is the constant 1, but the straddling case keeps its zero lower
    // bound: the enclosure is valid, just not tight.
    assert_eq!(positive.pow(0), Ok(Interval::new(1.0, 1.0).unwrap()));
    assert_eq!(straddling.pow(0), Ok(Interval::new(0.0, 1.0).unwrap()));
}

#[test]
fn sqrt_requires_nonnegative_lower_bound() {
    assert_eq!(
        Interval::new(-1.0, 4.0).unwrap().sqrt(),
        Err(IntervalError::SqrtOfNegative)
    );
    assert_eq!(
        Interval::new(4.0, 9.0).unwrap().sqrt(),
        Ok(Interval::new(2.0, 3.0).unwrap())
    );
}

#[test]
fn exp_and_log_map_bounds_monotonically() {
    use crate::assert_close;
    let iv = Interval::new(0.0, 1.0).unwrap();
    let e = iv.exp();
    assert_close!(e.lo(), 1.0);
    assert_close!(e.hi(), std::f64::consts::E);
    let back = e.log();
    assert_close!(back.lo(), 0.0);
    assert_close!(back.hi(), 1.0);
}

#[test]
fn log_leaves_the_domain_to_the_caller() {
    // The lower bound escapes to −∞ or NaN instead of erroring; callers
    // are expected to keep log arguments positive.
    let iv = Interval::new(0.0, 1.0).unwrap().log();
    assert!(!iv.is_finite());
    assert_eq!(iv.hi(), 0.0);
    assert!(Interval::new(-1.0, 1.0).unwrap().log().is_nan());
}

#[test]
fn abs_folds_at_zero() {
    assert_eq!(
        Interval::new(-3.0, 1.0).unwrap().abs(),
        Interval::new(0.0, 3.0).unwrap()
    );
    assert_eq!(
        Interval::new(-3.0, -1.0).unwrap().abs(),
        Interval::new(1.0, 3.0).unwrap()
    );
    assert_eq!(
        Interval::new(1.0, 3.0).unwrap().abs(),
        Interval::new(1.0, 3.0).unwrap()
    );
}

#[test]
fn containment_is_inclusive() {
    let iv = Interval::new(1.0, 2.0).unwrap();
    assert!(iv.contains(1.0));
    assert!(iv.contains(1.5));
    assert!(iv.contains(2.0));
    assert!(!iv.contains(0.999));
    assert!(!iv.contains(2.001));
}

#[test]
fn comparisons_are_dominance_tests() {
    let a = Interval::new(1.0, 5.0).unwrap();
    let b = Interval::new(2.0, 3.0).unwrap();
    // Overlapping intervals dominate in neither direction.
    assert!(!a.ge(b));
    assert!(!b.ge(a));
    assert!(Interval::new(5.0, 6.0).unwrap().ge(Interval::new(1.0, 2.0).unwrap()));
    assert!(Interval::new(5.0, 6.0).unwrap().gt(Interval::new(1.0, 2.0).unwrap()));
    // Touching bounds satisfy ge but not gt.
    assert!(Interval::new(3.0, 6.0).unwrap().ge(b));
    assert!(!Interval::new(3.0, 6.0).unwrap().gt(b));
    // Scalar forms compare against the relevant bound only.
    assert!(a.ge(1.0));
    assert!(!a.gt(1.0));
    assert!(a.le(5.0));
    assert!(!a.lt(5.0));
    assert!(a.lt(5.5));
    // An interval does not dominate itself unless it is degenerate.
    assert!(!a.ge(a));
    assert!(Interval::point(2.0).ge(Interval::point(2.0)));
}

#[test]
fn outward_takes_one_step_per_bound() {
    let iv = Interval::new(1.0, 2.0).unwrap();
    let widened = iv.outward();
    assert!(widened.lo() < iv.lo());
    assert!(widened.hi() > iv.hi());
    assert_eq!(widened.lo(), f64::next_down(1.0));
    assert_eq!(widened.hi(), f64::next_up(2.0));
}

#[test]
fn identities() {
    let zero = Interval::<f64>::zero();
    let one = Interval::<f64>::one();
    assert!(zero.is_zero());
    assert!(one.is_one());
    let iv = Interval::new(-1.0, 2.0).unwrap();
    assert_eq!(iv + zero, iv);
    assert_eq!(iv * one, iv);
}

#[test]
fn renders_with_spaced_comma() {
    use crate::numbers::F64;
    let iv = Interval::new(1.0, 2.5).unwrap();
    assert_eq!(iv.to_string(), "[1 , 2.5]");
    let iv = Interval::new(F64::from(1.0), F64::from(2.5)).unwrap();
    assert_eq!(iv.to_string(), "[1.0 , 2.5]");
}
