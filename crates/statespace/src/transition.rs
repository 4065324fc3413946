//! State-to-state transition patterns and their canonical enumeration.

use std::fmt;

use crate::state::StatePattern;
use crate::turn::TurnLength;

/// A transition between two temporally adjacent states, overlap-elided.
///
/// A record holds `2k` turns: the from-state `S`, then `S` without its first
/// turn, then the single trailing turn that completes the to-state. The
/// to-state is therefore always a valid one-turn shift of the from-state,
/// and the record equals the from-window followed by the to-window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionPattern {
    turns: Vec<TurnLength>,
}

impl TransitionPattern {
    /// Builds the record for `from` followed by the trailing turn.
    pub(crate) fn new(from: &StatePattern, trailing: TurnLength) -> Self {
        let mut turns = Vec::with_capacity(2 * from.order());
        turns.extend_from_slice(from.turns());
        turns.extend_from_slice(&from.turns()[1..]);
        turns.push(trailing);
        Self { turns }
    }

    /// All `2k` turns of the record, from-window first.
    pub fn turns(&self) -> &[TurnLength] {
        &self.turns
    }

    /// The model order this record belongs to.
    pub fn order(&self) -> usize {
        self.turns.len() / 2
    }

    /// The from-state window (the first `k` turns).
    pub fn from_state(&self) -> &[TurnLength] {
        &self.turns[..self.order()]
    }

    /// The to-state window (the last `k` turns).
    pub fn to_state(&self) -> &[TurnLength] {
        &self.turns[self.order()..]
    }

    /// The trailing turn, i.e. the only turn of the to-state that is not
    /// shared with the from-state.
    pub fn trailing(&self) -> TurnLength {
        self.turns[self.turns.len() - 1]
    }
}

impl fmt::Display for TransitionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.turns {
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

/// Enumerates all `2·2^order` transition records.
///
/// For each state in canonical order, the trailing-`Short` record comes
/// first, then the trailing-`Long` one, so the record for (from-state `s`,
/// trailing bit `b`) sits at index `2·s + b`. Index 0 is the all-zero
/// self-loop and the last index is the all-one self-loop. Downstream
/// frequency vectors are aligned to this order; it must not change.
pub(crate) fn enumerate_transitions(states: &[StatePattern]) -> Vec<TransitionPattern> {
    let mut transitions = Vec::with_capacity(2 * states.len());
    for state in states {
        for trailing in TurnLength::ALL {
            transitions.push(TransitionPattern::new(state, trailing));
        }
    }
    transitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::enumerate_states;
    use crate::turn::TurnLength::{Long, Short};

    #[test]
    fn record_layout_order_2() {
        let from = StatePattern::from_index(1, 2); // 01
        let t = TransitionPattern::new(&from, Long);
        // 01 ++ 1 ++ 1
        assert_eq!(t.turns(), &[Short, Long, Long, Long]);
        assert_eq!(t.from_state(), &[Short, Long]);
        assert_eq!(t.to_state(), &[Long, Long]);
        assert_eq!(t.trailing(), Long);
        assert_eq!(t.order(), 2);
    }

    #[test]
    fn to_state_is_shift_of_from_state() {
        let states = enumerate_states(3);
        for t in enumerate_transitions(&states) {
            assert_eq!(&t.from_state()[1..], &t.to_state()[..t.order() - 1]);
        }
    }

    #[test]
    fn enumeration_index_contract() {
        let states = enumerate_states(2);
        let transitions = enumerate_transitions(&states);
        assert_eq!(transitions.len(), 8);
        // Record for (from-state s, trailing b) sits at 2s + b.
        for (s, state) in states.iter().enumerate() {
            for trailing in TurnLength::ALL {
                let t = &transitions[2 * s + trailing.as_index()];
                assert_eq!(t.from_state(), state.turns());
                assert_eq!(t.trailing(), trailing);
            }
        }
    }

    #[test]
    fn self_loop_endpoints() {
        let states = enumerate_states(3);
        let transitions = enumerate_transitions(&states);
        assert!(transitions[0].turns().iter().all(|&t| t == Short));
        assert!(
            transitions
                .last()
                .unwrap()
                .turns()
                .iter()
                .all(|&t| t == Long)
        );
    }

    #[test]
    fn display_concatenates_windows() {
        let from = StatePattern::from_index(2, 2); // 10
        assert_eq!(TransitionPattern::new(&from, Short).to_string(), "1000");
    }
}
