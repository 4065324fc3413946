//! The full state and transition space for one model order.

use crate::error::StateSpaceError;
use crate::state::{StatePattern, enumerate_states};
use crate::transition::{TransitionPattern, enumerate_transitions};
use crate::turn::TurnLength;

/// Largest supported model order.
///
/// The enumeration holds `2^k` states and `2·2^k` transitions, so it grows
/// exponentially in the order; published conversational models use orders
/// 1 through 5.
pub const MAX_ORDER: usize = 16;

/// Every possible state and transition for a fixed model order.
///
/// The space is a pure function of the order: two spaces of the same order
/// are always equal, and their enumeration orders are identical. Frequency
/// vectors produced by fitting are index-aligned to [`states`](Self::states)
/// and [`transitions`](Self::transitions), which is what makes element-wise
/// model algebra meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSpace {
    order: usize,
    states: Vec<StatePattern>,
    transitions: Vec<TransitionPattern>,
}

impl StateSpace {
    /// Enumerates the space for `order`.
    ///
    /// # Errors
    ///
    /// Returns [`StateSpaceError::InvalidOrder`] if `order` is zero or
    /// exceeds [`MAX_ORDER`].
    pub fn new(order: usize) -> Result<Self, StateSpaceError> {
        if order == 0 || order > MAX_ORDER {
            return Err(StateSpaceError::InvalidOrder { order });
        }
        let states = enumerate_states(order);
        let transitions = enumerate_transitions(&states);
        Ok(Self {
            order,
            states,
            transitions,
        })
    }

    /// The model order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// All `2^k` state patterns in canonical order.
    pub fn states(&self) -> &[StatePattern] {
        &self.states
    }

    /// All `2·2^k` transition records in canonical order.
    pub fn transitions(&self) -> &[TransitionPattern] {
        &self.transitions
    }

    /// Number of states, `2^k`.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Number of transitions, `2·2^k`.
    pub fn n_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Canonical index of a width-k window of turns.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the window's width is not the model order.
    pub fn state_index(&self, window: &[TurnLength]) -> usize {
        debug_assert_eq!(window.len(), self.order, "window width != model order");
        window.iter().fold(0, |acc, t| (acc << 1) | t.as_index())
    }

    /// Canonical index of the transition leaving the state at `from_index`
    /// through `trailing`.
    pub fn transition_index(&self, from_index: usize, trailing: TurnLength) -> usize {
        debug_assert!(from_index < self.n_states(), "from_index out of range");
        2 * from_index + trailing.as_index()
    }
}
