use crate::traits::Scalar;

/// Babylonian (Heron) square-root refinement.
///
/// Runs a fixed number of Newton iterations of `g = (g + x/g) / 2` from the
/// seed `g = x`, converging quadratically to `sqrt(x)` for positive `x`.
/// Written against [`Scalar`], so the same routine evaluates with `f64` and
/// differentiates with [`Dual`](crate::dual::Dual): each iteration step is
/// built from the primitive dual operations, and the converged tangent
/// matches `1 / (2 sqrt(x))`.
pub fn babylonian_sqrt<T: Scalar>(x: T, iterations: usize) -> T {
    let half = T::from_f64(0.5).unwrap();
    let mut guess = x;
    for _ in 0..iterations {
        guess = (guess + x / guess) * half;
    }
    guess
}

/// Applies `f` to `x0` a fixed number of times.
///
/// The generic fixed-iteration skeleton behind routines like
/// [`babylonian_sqrt`]; any map built from dual-compatible arithmetic keeps
/// its tangent consistent across iterations.
pub fn fixed_point<T, F>(f: F, x0: T, iterations: usize) -> T
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let mut x = x0;
    for _ in 0..iterations {
        x = f(x);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivative::derivative;
    use approx::assert_relative_eq;

    #[test]
    fn babylonian_sqrt_converges() {
        let s = babylonian_sqrt(5.0f64, 12);
        assert_relative_eq!(s, 5.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn derivative_flows_through_the_iteration() {
        // d sqrt(x)/dx at 5 is 1/(2 sqrt(5)).
        let d = derivative(|x| babylonian_sqrt(x, 12), 5.0);
        assert_relative_eq!(d, 1.0 / (2.0 * 5.0f64.sqrt()), epsilon = 1e-9);
        assert!((d - 0.22360679774997896).abs() < 1e-9);
    }

    #[test]
    fn fixed_point_reaches_the_map_fixpoint() {
        // x -> cos(x) contracts to the Dottie number.
        let x = fixed_point(|x: f64| x.cos(), 1.0, 200);
        assert_relative_eq!(x.cos(), x, epsilon = 1e-12);
    }

    #[test]
    fn fixed_point_derivative_matches_closed_form() {
        // Three applications of x -> x*x give x^8, whose derivative is 8x^7.
        fn square<T: Scalar>(x: T) -> T {
            x * x
        }
        let a = 1.1;
        let d = derivative(|x| fixed_point(square, x, 3), a);
        assert_relative_eq!(d, 8.0 * a.powi(7), epsilon = 1e-9);
    }
}
