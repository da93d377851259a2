use crate::dual::Dual;
use crate::error::DualError;

/// Evaluates the derivative of `f` at `x` by forward-mode propagation.
///
/// Seeds `Dual::variable(x)` (tangent 1), runs `f` once, and returns the
/// tangent of the result. `f` may be any closure over dual arithmetic,
/// including one delegating to a [`Scalar`](crate::traits::Scalar)-generic
/// routine; iterative algorithms differentiate without modification because
/// every iteration step is itself built from the primitive operations.
///
/// Arithmetic on this path is total with IEEE semantics. Use
/// [`try_derivative`] with the `checked_*` operations to surface
/// non-differentiable points as errors instead.
///
/// ```
/// use tangent_core::derivative::derivative;
///
/// let d = derivative(|x| x * x, 3.0);
/// assert!((d - 6.0).abs() < 1e-12);
/// ```
pub fn derivative<F>(f: F, x: f64) -> f64
where
    F: FnOnce(Dual) -> Dual,
{
    f(Dual::variable(x)).eps
}

/// Fallible variant of [`derivative`] for closures built on the `checked_*`
/// operations.
///
/// A [`DualError`] raised by any primitive propagates unchanged to the
/// caller; no recovery is attempted.
///
/// ```
/// use tangent_core::derivative::try_derivative;
/// use tangent_core::error::DualError;
///
/// let err = try_derivative(|x| x.checked_recip(), 0.0);
/// assert_eq!(err, Err(DualError::DivisionByZero));
/// ```
pub fn try_derivative<F>(f: F, x: f64) -> Result<f64, DualError>
where
    F: FnOnce(Dual) -> Result<Dual, DualError>,
{
    Ok(f(Dual::variable(x))?.eps)
}
