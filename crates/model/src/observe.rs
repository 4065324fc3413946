//! Extraction of observed state and transition sequences from a conversation.

use codym_statespace::{StateSpace, TurnLength};

/// Canonical indices of the observed state windows.
///
/// Slides a width-k window over the first `N−k` start positions, one short
/// of the maximal window count: the final window is dropped because it has
/// no successor to pair into a transition. Empty when `N ≤ k`.
pub(crate) fn observed_states(space: &StateSpace, turns: &[TurnLength]) -> Vec<usize> {
    let order = space.order();
    let n_windows = turns.len().saturating_sub(order);
    let mut states = Vec::with_capacity(n_windows);
    for i in 0..n_windows {
        states.push(space.state_index(&turns[i..i + order]));
    }
    states
}

/// Canonical indices of the observed transitions between consecutive windows.
///
/// Transition i pairs window i with window i+1; since consecutive windows
/// overlap in all but one turn, the record is fully determined by the
/// from-state and the trailing turn `turns[i + k]`. Empty when fewer than
/// two windows exist.
pub(crate) fn observed_transitions(
    space: &StateSpace,
    turns: &[TurnLength],
    states: &[usize],
) -> Vec<usize> {
    let order = space.order();
    let n_transitions = states.len().saturating_sub(1);
    let mut transitions = Vec::with_capacity(n_transitions);
    for (i, &from) in states.iter().take(n_transitions).enumerate() {
        transitions.push(space.transition_index(from, turns[i + order]));
    }
    transitions
}

/// Tallies observed indices into a dense count vector of length `n`.
pub(crate) fn count_indices(observed: &[usize], n: usize) -> Vec<u64> {
    let mut counts = vec![0u64; n];
    for &i in observed {
        counts[i] += 1;
    }
    counts
}

/// Normalizes counts into a frequency vector.
///
/// Divides by the total count; a zero total yields an all-zero vector
/// rather than a division by zero.
pub(crate) fn normalize_counts(counts: &[u64]) -> Vec<f64> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&c| c as f64 / total as f64).collect()
}
