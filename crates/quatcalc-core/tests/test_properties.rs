//! Property-based tests for the quaternion algebra and the calculator's
//! result invariant.

use proptest::prelude::*;

use quatcalc_core::{CalculatorState, Operation, Quaternion};

const EPSILON: f64 = 1e-8;

fn finite_component() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn quaternion() -> impl Strategy<Value = Quaternion> {
    (
        finite_component(),
        finite_component(),
        finite_component(),
        finite_component(),
    )
        .prop_map(|(w, i, j, k)| Quaternion::new(w, i, j, k))
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::None),
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn non_finite() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn quat_approx_eq(a: Quaternion, b: Quaternion) -> bool {
    let pairs = [
        (a.w(), b.w()),
        (a.i(), b.i()),
        (a.j(), b.j()),
        (a.k(), b.k()),
    ];
    pairs
        .iter()
        .all(|(x, y)| (x - y).abs() < EPSILON * (1.0 + x.abs() + y.abs()))
}

proptest! {
    // -----------------------------------------------------------------------
    // Algebraic laws
    // -----------------------------------------------------------------------

    #[test]
    fn prop_addition_commutes(a in quaternion(), b in quaternion()) {
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn prop_zero_is_additive_identity(q in quaternion()) {
        assert_eq!(q + Quaternion::ZERO, q);
    }

    #[test]
    fn prop_negation_cancels(q in quaternion()) {
        assert_eq!(q + (-q), Quaternion::ZERO);
        assert_eq!(q - q, Quaternion::ZERO);
    }

    #[test]
    fn prop_identity_is_multiplicative_identity(q in quaternion()) {
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn prop_conjugate_is_involutive(q in quaternion()) {
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn prop_conjugate_preserves_norm(q in quaternion()) {
        assert_eq!(q.conjugate().norm_sq(), q.norm_sq());
    }

    #[test]
    fn prop_norm_is_multiplicative(a in quaternion(), b in quaternion()) {
        let lhs = (a * b).norm_sq();
        let rhs = a.norm_sq() * b.norm_sq();
        assert!(
            (lhs - rhs).abs() < 1e-9 * (1.0 + lhs.abs() + rhs.abs()),
            "norm_sq(a*b) = {lhs}, norm_sq(a)*norm_sq(b) = {rhs}"
        );
    }

    #[test]
    fn prop_division_inverts_multiplication(q in quaternion(), d in quaternion()) {
        // Keep the divisor away from the zero quaternion so the round trip
        // is well conditioned.
        prop_assume!(d.norm_sq() > 1.0);
        let restored = (q * d).checked_div(d).unwrap();
        assert!(
            quat_approx_eq(restored, q),
            "(q*d)/d = {restored:?}, expected {q:?}"
        );
    }

    // -----------------------------------------------------------------------
    // Clamp policy
    // -----------------------------------------------------------------------

    #[test]
    fn prop_non_finite_writes_are_discarded(q in quaternion(), bad in non_finite()) {
        let mut touched = q;
        assert!(!touched.set_w(bad));
        assert!(!touched.set_i(bad));
        assert!(!touched.set_j(bad));
        assert!(!touched.set_k(bad));
        assert_eq!(touched, q);
    }

    #[test]
    fn prop_components_stay_finite(q in quaternion(), bad in non_finite()) {
        let clamped = Quaternion::new(bad, q.i(), q.j(), q.k());
        for component in clamped.to_components() {
            assert!(component.is_finite());
        }
    }

    // -----------------------------------------------------------------------
    // Calculator invariant
    // -----------------------------------------------------------------------

    #[test]
    fn prop_result_always_matches_active_operation(
        a in quaternion(),
        b in quaternion(),
        op in operation()
    ) {
        let mut state = CalculatorState::new();
        // A zero-norm divisor makes the transition fail, but commits anyway.
        let _ = state.set_operands(a, b, op);
        assert_eq!(state.result(), op.apply(a, b));
        assert_eq!(state.q1(), a);
        assert_eq!(state.q2(), b);
    }

    #[test]
    fn prop_snapshot_seed_round_trip(
        a in quaternion(),
        b in quaternion(),
        op in operation()
    ) {
        let mut state = CalculatorState::new();
        let _ = state.set_operands(a, b, op);
        let restored = CalculatorState::from_seed(&state.snapshot()).unwrap();
        assert_eq!(restored.q1(), state.q1());
        assert_eq!(restored.q2(), state.q2());
        assert_eq!(restored.op(), state.op());
        assert_eq!(restored.result(), state.result());
    }
}
