use thiserror::Error;

/// Failures raised by interval construction and arithmetic.
///
/// Every failure is reported at the offending operation and propagated to the
/// caller; nothing is clamped or coerced into a "nearby" valid interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("lower interval bound must be smaller than or equal to the upper bound")]
    InvalidBounds,
    #[error("division by an interval containing zero")]
    DivisorContainsZero,
    #[error("interval exponent must be a nonnegative integer")]
    NegativeExponent,
    #[error("sqrt of an interval with a negative lower bound")]
    SqrtOfNegative,
    #[error("index {index} out of range for interval vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("multiplication between interval vectors is not defined")]
    VectorTimesVector,
    #[error("interval vector must contain at least one interval")]
    EmptyVector,
}
