//! Fitting a conversational dynamics model to one conversation.

use std::sync::Arc;

use tracing::debug;

use codym_statespace::{StateSpace, TurnLength};

use crate::error::ModelError;
use crate::mask;
use crate::observe;

/// A fitted conversational dynamics model.
///
/// Holds the enumerated state space for its order and two frequency vectors
/// index-aligned to it: one over states, one over transitions. A model fit
/// from data carries probability distributions (each vector sums to 1, or is
/// all zero when the conversation produced no observations); models produced
/// by [`difference`](Self::difference) carry signed frequency differences
/// instead.
#[derive(Debug, Clone)]
pub struct CodymModel {
    space: Arc<StateSpace>,
    state_freqs: Vec<f64>,
    transition_freqs: Vec<f64>,
}

impl CodymModel {
    /// Assembles a model from already-computed frequency vectors.
    pub(crate) fn from_parts(
        space: Arc<StateSpace>,
        state_freqs: Vec<f64>,
        transition_freqs: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(state_freqs.len(), space.n_states());
        debug_assert_eq!(transition_freqs.len(), space.n_transitions());
        Self {
            space,
            state_freqs,
            transition_freqs,
        }
    }

    /// Fits a model of the given order to a sequence of binarized turns.
    ///
    /// Enumerates the state space for `order` and delegates to
    /// [`fit_with_space`](Self::fit_with_space); when fitting many
    /// conversations at the same order, enumerate once (see
    /// [`codym_statespace::SpaceCache`]) and call that method directly.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Space`] for an order outside
    /// `1..=`[`codym_statespace::MAX_ORDER`], or
    /// [`ModelError::MaskTooShort`] if a supplied mask cannot cover the
    /// observed sequence. Degenerate inputs (empty sequence, sequence no
    /// longer than the order) are not errors and produce all-zero vectors.
    pub fn fit(
        turns: &[TurnLength],
        order: usize,
        mask: Option<&[bool]>,
    ) -> Result<Self, ModelError> {
        let space = Arc::new(StateSpace::new(order)?);
        Self::fit_with_space(space, turns, mask)
    }

    /// Fits a model against an already-enumerated state space.
    ///
    /// The observed state sequence is the width-k windows starting at
    /// `0..N−k` (the final window is dropped; it has no successor), and the
    /// observed transition sequence pairs consecutive windows. A mask, when
    /// present and not all-false, filters states at offset k−1 and
    /// transitions at offset k before counting; an all-false mask is ignored
    /// with a warning. Counts over the enumerated space are then normalized
    /// into frequencies, with empty observations yielding all-zero vectors.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MaskTooShort`] if the mask has fewer than
    /// `offset + observed` entries for either filter.
    pub fn fit_with_space(
        space: Arc<StateSpace>,
        turns: &[TurnLength],
        mask: Option<&[bool]>,
    ) -> Result<Self, ModelError> {
        let order = space.order();

        let mut states = observe::observed_states(&space, turns);
        let mut transitions = observe::observed_transitions(&space, turns, &states);

        if let Some(mask) = mask::effective(mask) {
            states = mask::filter_observed(states, mask, order - 1)?;
            transitions = mask::filter_observed(transitions, mask, order)?;
        }

        debug!(
            order,
            n_turns = turns.len(),
            n_states_observed = states.len(),
            n_transitions_observed = transitions.len(),
            "fitted conversational dynamics model"
        );

        let state_counts = observe::count_indices(&states, space.n_states());
        let transition_counts = observe::count_indices(&transitions, space.n_transitions());

        Ok(Self::from_parts(
            space,
            observe::normalize_counts(&state_counts),
            observe::normalize_counts(&transition_counts),
        ))
    }

    /// The model order k.
    pub fn model_order(&self) -> usize {
        self.space.order()
    }

    /// The enumerated state space this model's vectors are aligned to.
    pub fn state_space(&self) -> &StateSpace {
        &self.space
    }

    /// Shared handle to the state space, for fitting further models
    /// against the same enumeration.
    pub fn shared_space(&self) -> Arc<StateSpace> {
        Arc::clone(&self.space)
    }

    /// Frequency of each state, aligned to [`StateSpace::states`].
    pub fn state_freqs(&self) -> &[f64] {
        &self.state_freqs
    }

    /// Frequency of each transition, aligned to [`StateSpace::transitions`].
    pub fn transition_freqs(&self) -> &[f64] {
        &self.transition_freqs
    }

    /// Frequency of the state at `index` in the canonical enumeration.
    pub fn state_freq(&self, index: usize) -> f64 {
        self.state_freqs[index]
    }

    /// Frequency of the transition at `index` in the canonical enumeration.
    pub fn transition_freq(&self, index: usize) -> f64 {
        self.transition_freqs[index]
    }
}
