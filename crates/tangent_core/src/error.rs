use thiserror::Error;

/// Errors raised by the checked dual-number operations.
///
/// Raised at the offending primitive and propagated unchanged through
/// [`try_derivative`](crate::derivative::try_derivative) to the caller;
/// there is no local recovery.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DualError {
    /// The divisor's primal value was exactly zero.
    #[error("division by zero: divisor primal is exactly 0")]
    DivisionByZero,

    /// The argument's primal value lies outside the operation's domain,
    /// e.g. `ln` of a non-positive number.
    #[error("domain error: {op}({arg}) is undefined")]
    Domain { op: &'static str, arg: f64 },
}
