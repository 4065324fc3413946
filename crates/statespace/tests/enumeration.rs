use std::collections::HashSet;

use codym_statespace::{MAX_ORDER, StateSpace, StateSpaceError, TurnLength};

// ---------------------------------------------------------------------------
// 1. state_counts_and_widths
// ---------------------------------------------------------------------------
#[test]
fn state_counts_and_widths() {
    for order in 1..=8 {
        let space = StateSpace::new(order).unwrap();
        assert_eq!(space.n_states(), 1 << order, "order {order}");
        for state in space.states() {
            assert_eq!(state.order(), order, "order {order}");
        }
    }
}

// ---------------------------------------------------------------------------
// 2. states_all_distinct
// ---------------------------------------------------------------------------
#[test]
fn states_all_distinct() {
    for order in 1..=8 {
        let space = StateSpace::new(order).unwrap();
        let distinct: HashSet<_> = space.states().iter().map(|s| s.turns().to_vec()).collect();
        assert_eq!(distinct.len(), space.n_states(), "order {order}");
    }
}

// ---------------------------------------------------------------------------
// 3. transition_counts_widths_and_distinctness
// ---------------------------------------------------------------------------
#[test]
fn transition_counts_widths_and_distinctness() {
    for order in 1..=8 {
        let space = StateSpace::new(order).unwrap();
        assert_eq!(space.n_transitions(), 2 << order, "order {order}");
        let distinct: HashSet<_> = space
            .transitions()
            .iter()
            .map(|t| t.turns().to_vec())
            .collect();
        assert_eq!(distinct.len(), space.n_transitions(), "order {order}");
        for t in space.transitions() {
            assert_eq!(t.turns().len(), 2 * order, "order {order}");
        }
    }
}

// ---------------------------------------------------------------------------
// 4. trailing_bits_split_evenly
// ---------------------------------------------------------------------------
#[test]
fn trailing_bits_split_evenly() {
    for order in 1..=8 {
        let space = StateSpace::new(order).unwrap();
        let long_count = space
            .transitions()
            .iter()
            .filter(|t| t.trailing() == TurnLength::Long)
            .count();
        assert_eq!(long_count, space.n_transitions() / 2, "order {order}");
    }
}

// ---------------------------------------------------------------------------
// 5. self_loops_at_endpoints
// ---------------------------------------------------------------------------
#[test]
fn self_loops_at_endpoints() {
    for order in 1..=8 {
        let space = StateSpace::new(order).unwrap();
        let first = &space.transitions()[0];
        assert!(first.turns().iter().all(|&t| t == TurnLength::Short));
        let last = space.transitions().last().unwrap();
        assert!(last.turns().iter().all(|&t| t == TurnLength::Long));
    }
}

// ---------------------------------------------------------------------------
// 6. enumeration_is_deterministic
// ---------------------------------------------------------------------------
#[test]
fn enumeration_is_deterministic() {
    let a = StateSpace::new(5).unwrap();
    let b = StateSpace::new(5).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.states(), b.states());
    assert_eq!(a.transitions(), b.transitions());
}

// ---------------------------------------------------------------------------
// 7. order_bounds
// ---------------------------------------------------------------------------
#[test]
fn order_bounds() {
    assert!(matches!(
        StateSpace::new(0),
        Err(StateSpaceError::InvalidOrder { order: 0 })
    ));
    assert!(StateSpace::new(1).is_ok());
    assert!(StateSpace::new(MAX_ORDER).is_ok());
    assert!(StateSpace::new(MAX_ORDER + 1).is_err());
}
