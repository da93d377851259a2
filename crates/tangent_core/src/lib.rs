//! The `tangent_core` crate provides a forward-mode automatic
//! differentiation engine built on dual numbers. It is designed to be
//! generic: any numeric routine written against the `Scalar` trait runs with
//! standard floating-point arithmetic (`f64`) or with `Dual` values, in
//! which case derivatives propagate through it for free.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction over `num_traits::Float`).
//! - **Dual**: the dual-number type, its operator algebra and checked operations.
//! - **Derivative**: the `derivative` / `try_derivative` entry points.
//! - **Solvers**: fixed-iteration scalar refinement routines differentiable
//!   through `derivative`.

pub mod derivative;
pub mod dual;
pub mod error;
pub mod solvers;
pub mod traits;

pub use derivative::{derivative, try_derivative};
pub use dual::Dual;
pub use error::DualError;
pub use traits::Scalar;
