//! Property-based tests for the differentiation entry points.

use approx::assert_relative_eq;
use num_traits::Float;
use proptest::prelude::*;
use tangent_core::solvers::babylonian_sqrt;
use tangent_core::{derivative, Dual};

fn point_strategy() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn product_rule_holds_everywhere(a in point_strategy()) {
        assert_relative_eq!(derivative(|x| x * x, a), 2.0 * a);
    }

    #[test]
    fn adding_a_constant_never_perturbs_the_tangent(
        a in point_strategy(),
        c in point_strategy()
    ) {
        prop_assert_eq!(derivative(move |x| x + c, a), 1.0);
        prop_assert_eq!(derivative(move |x| c + x, a), 1.0);
    }

    #[test]
    fn derivative_is_linear(
        a in -5.0..5.0f64,
        c1 in -10.0..10.0f64,
        c2 in -10.0..10.0f64
    ) {
        let combined = derivative(move |x| c1 * x.sin() + c2 * x.exp(), a);
        let separate =
            c1 * derivative(|x| x.sin(), a) + c2 * derivative(|x| x.exp(), a);
        assert_relative_eq!(combined, separate, max_relative = 1e-12, epsilon = 1e-12);
    }

    #[test]
    fn chain_rule_matches_closed_form(a in -3.0..3.0f64) {
        // d/dx sin(x^2) = 2x cos(x^2)
        let d = derivative(|x| (x * x).sin(), a);
        let closed_form = 2.0 * a * (a * a).cos();
        assert_relative_eq!(d, closed_form, max_relative = 1e-9, epsilon = 1e-9);
    }

    #[test]
    fn repeated_calls_are_bit_identical(a in point_strategy()) {
        let f = |x: Dual| (x * x + x.sin()).exp() / (x * x + 1.0);
        prop_assert_eq!(derivative(f, a).to_bits(), derivative(f, a).to_bits());
    }

    #[test]
    fn iterative_sqrt_differentiates_like_sqrt(a in 0.01..100.0f64) {
        let d = derivative(|x| babylonian_sqrt(x, 16), a);
        assert_relative_eq!(d, 0.5 / a.sqrt(), max_relative = 1e-9);
    }

    #[test]
    fn promotion_is_symmetric_under_multiplication(
        a in point_strategy(),
        c in point_strategy()
    ) {
        prop_assert_eq!(
            derivative(move |x| c * x, a).to_bits(),
            derivative(move |x| x * c, a).to_bits()
        );
    }
}
