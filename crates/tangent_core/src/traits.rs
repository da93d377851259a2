use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can flow through differentiable numeric routines.
/// Must support floating-point arithmetic, debug printing, and conversion from f64.
///
/// `f64` satisfies this for plain evaluation; [`Dual`](crate::dual::Dual)
/// satisfies it for forward-mode differentiation, so any routine written
/// against `Scalar` differentiates without modification.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}
