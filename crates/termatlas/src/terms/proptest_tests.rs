//! Property-based tests for the position algebra.

use proptest::prelude::*;

use super::position::{Position, Step};

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1..20u32).prop_map(Step::Argument),
        Just(Step::Lambda),
        (1..20u32).prop_map(Step::Meta),
    ]
}

fn arb_position() -> impl Strategy<Value = Position> {
    proptest::collection::vec(arb_step(), 0..8).prop_map(Position::from_steps)
}

proptest! {
    /// Equality is reflexive
    #[test]
    fn position_equality_reflexive(pos in arb_position()) {
        prop_assert_eq!(pos.clone(), pos);
    }

    /// Steps of the same magnitude but different kind never compare equal
    #[test]
    fn step_kinds_are_distinguished(n in 1..20u32, tail in arb_position()) {
        let arg = Position::argument(n, tail.clone());
        let meta = Position::meta(n, tail.clone());
        let lam = Position::lambda(tail);
        prop_assert_ne!(arg.clone(), meta.clone());
        prop_assert_ne!(arg, lam.clone());
        prop_assert_ne!(meta, lam);
    }

    /// `query_tail` strips exactly the outermost step
    #[test]
    fn tail_strips_one_step(step in arb_step(), tail in arb_position()) {
        let pos = Position::from_steps(std::iter::once(step).chain(tail.steps()));
        prop_assert_eq!(pos.query_tail().unwrap(), &tail);
    }

    /// Rendering ends with the empty-position marker and has one segment
    /// per step
    #[test]
    fn display_is_segment_per_step(pos in arb_position()) {
        let rendered = pos.to_string();
        prop_assert!(rendered.ends_with('ε'));
        prop_assert_eq!(rendered.matches('.').count(), pos.steps().count());
    }
}
