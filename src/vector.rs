use std::{
    fmt::{Display, Formatter},
    ops::Index,
};

use ndarray::Array1;
use num_traits::Zero;

use crate::{error::IntervalError, interval::Interval, numbers::Endpoint};

/// A fixed-length vector of closed intervals (a box), with the per-element
/// midpoints cached at construction.
///
/// Operations decompose into per-element [`Interval`] operations and
/// recompose the results into a fresh vector; nothing mutates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalVector<T> {
    elems: Array1<Interval<T>>,
    mean: Array1<T>,
}

impl<T: Endpoint> IntervalVector<T> {
    /// Build from a sequence of intervals. At least one element is required.
    pub fn new(intervals: impl IntoIterator<Item = Interval<T>>) -> Result<Self, IntervalError> {
        let elems: Vec<_> = intervals.into_iter().collect();
        if elems.is_empty() {
            return Err(IntervalError::EmptyVector);
        }
        Ok(Self::with_elems(Array1::from_vec(elems)))
    }

    /// Build from `(lo, hi)` bound pairs, validating each pair through
    /// [`Interval::new`].
    pub fn from_bounds(bounds: impl IntoIterator<Item = (T, T)>) -> Result<Self, IntervalError> {
        let intervals = bounds
            .into_iter()
            .map(|(lo, hi)| Interval::new(lo, hi))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(intervals)
    }

    fn with_elems(elems: Array1<Interval<T>>) -> Self {
        let mean = elems.iter().map(|iv| iv.mid()).collect();
        Self { elems, mean }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Always false: construction rejects empty vectors.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Checked element access; the unchecked `v[i]` sugar panics instead.
    pub fn get(&self, index: usize) -> Result<Interval<T>, IntervalError> {
        if index >= self.len() {
            return Err(IntervalError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.elems[index])
    }

    /// The per-element midpoints.
    pub fn mean(&self) -> &Array1<T> {
        &self.mean
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval<T>> {
        self.elems.iter()
    }

    /// Scale every element by a scalar interval. A plain-number factor goes
    /// through [`Interval::point`] first.
    pub fn scale(&self, factor: Interval<T>) -> Self {
        Self::with_elems(self.elems.mapv(|iv| factor * iv))
    }

    /// Products of two interval vectors are not part of this algebra; the
    /// request is refused explicitly rather than guessing a dot or
    /// elementwise product.
    pub fn mul_vector(&self, _rhs: &Self) -> Result<Self, IntervalError> {
        Err(IntervalError::VectorTimesVector)
    }

    /// Enclosure of the Euclidean norm: `sqrt(Σ elemᵢ²)`, reduced with
    /// interval addition.
    pub fn norm(&self) -> Result<Interval<T>, IntervalError> {
        self.elems
            .iter()
            .fold(Interval::zero(), |acc, iv| acc + iv.pow_nonneg(2))
            .sqrt()
    }
}

impl<T: Endpoint> Index<usize> for IntervalVector<T> {
    type Output = Interval<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elems[index]
    }
}

impl<'a, T: Endpoint> IntoIterator for &'a IntervalVector<T> {
    type Item = &'a Interval<T>;
    type IntoIter = ndarray::iter::Iter<'a, Interval<T>, ndarray::Ix1>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<T: Endpoint> Display for IntervalVector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, iv) in self.elems.iter().enumerate() {
            if i == 0 {
                write!(f, "({iv}")?;
            } else {
                write!(f, "\n {iv}")?;
            }
        }
        write!(f, ")")
    }
}

#[test]
fn construction_from_intervals_and_bounds() {
    let from_bounds = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
    let from_intervals = IntervalVector::new(vec![
        Interval::new(1.0, 2.0).unwrap(),
        Interval::new(3.0, 4.0).unwrap(),
    ])
    .unwrap();
    assert_eq!(from_bounds, from_intervals);
    assert_eq!(from_bounds.len(), 2);
    assert!(!from_bounds.is_empty());
    assert_eq!(
        IntervalVector::<f64>::new(vec![]),
        Err(IntervalError::EmptyVector)
    );
    assert_eq!(
        IntervalVector::from_bounds(vec![(1.0, 2.0), (4.0, 3.0)]),
        Err(IntervalError::InvalidBounds)
    );
}

#[test]
fn mean_holds_the_midpoints() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0), (-1.0, 1.0)]).unwrap();
    assert_eq!(v.mean().to_vec(), vec![1.5, 3.5, 0.0]);
}

#[test]
fn indexing_is_checked_through_get() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
    assert_eq!(v.get(1), Ok(Interval::new(3.0, 4.0).unwrap()));
    assert_eq!(
        v.get(2),
        Err(IntervalError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(v[0], Interval::new(1.0, 2.0).unwrap());
}

#[test]
fn scaling_applies_elementwise() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
    let scaled = v.scale(Interval::point(2.0));
    assert_eq!(
        scaled,
        IntervalVector::from_bounds(vec![(2.0, 4.0), (6.0, 8.0)]).unwrap()
    );
    for (s, o) in scaled.iter().zip(&v) {
        assert_eq!(*s, *o * 2.0);
    }
    let flipped = v.scale(Interval::new(-1.0, 0.0).unwrap());
    assert_eq!(
        flipped,
        IntervalVector::from_bounds(vec![(-2.0, 0.0), (-4.0, 0.0)]).unwrap()
    );
}

#[test]
fn vector_times_vector_is_refused() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0)]).unwrap();
    assert_eq!(v.mul_vector(&v), Err(IntervalError::VectorTimesVector));
}

#[test]
fn norm_encloses_the_euclidean_norm() {
    use crate::assert_close;
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
    // Σ elemᵢ² = [1, 4] + [9, 16] = [10, 20].
    let norm = v.norm().unwrap();
    assert_close!(norm.lo(), 10.0_f64.sqrt());
    assert_close!(norm.hi(), 20.0_f64.sqrt());
}

#[test]
fn renders_one_interval_per_line() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
    assert_eq!(v.to_string(), "([1 , 2]\n [3 , 4])");
    let single = IntervalVector::from_bounds(vec![(-1.0, 1.0)]).unwrap();
    assert_eq!(single.to_string(), "([-1 , 1])");
}
