//! Inclusion masks over conversational turns.
//!
//! A mask is aligned 1:1 with the raw turn sequence and marks the turns
//! whose information a state or transition is considered to originate from
//! (e.g. only the patient's turns in a clinical conversation). It is not a
//! "window fully covered" test: each observed entry is kept or dropped by
//! the single mask bit it is aligned to.

use tracing::warn;

use crate::error::ModelError;

/// Resolves the mask actually applied during fitting.
///
/// `None` stays `None`. A mask selecting no turns at all (all-false, or
/// empty) cannot mean "drop everything" in any useful fit, so it degrades
/// to unmasked — announced with a warning rather than handled silently.
pub(crate) fn effective(mask: Option<&[bool]>) -> Option<&[bool]> {
    match mask {
        Some(m) if m.iter().all(|&included| !included) => {
            warn!("mask selects no turns, ignoring it");
            None
        }
        other => other,
    }
}

/// Filters an observed index sequence by the mask shifted by `offset`.
///
/// Entry `i` survives iff `mask[offset + i]` is true; relative order is
/// preserved. States use offset k−1 (mask index 0 aligns to the end of the
/// first window) and transitions use offset k.
// TODO: re-derive the transition offset from the turn-attribution rule; the
// reference model definition leaves it one turn later than the state offset
// without a stated rationale.
pub(crate) fn filter_observed(
    observed: Vec<usize>,
    mask: &[bool],
    offset: usize,
) -> Result<Vec<usize>, ModelError> {
    if observed.is_empty() {
        return Ok(observed);
    }
    let required = offset + observed.len();
    if mask.len() < required {
        return Err(ModelError::MaskTooShort {
            required,
            got: mask.len(),
        });
    }
    Ok(observed
        .into_iter()
        .enumerate()
        .filter(|&(i, _)| mask[offset + i])
        .map(|(_, entry)| entry)
        .collect())
}
