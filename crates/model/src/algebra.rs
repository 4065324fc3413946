//! Element-wise algebra over fitted models.
//!
//! Models of equal order share one canonical enumeration, so their frequency
//! vectors are index-aligned by construction; the operations here lean on
//! that invariant and check it at the boundary.

use crate::error::ModelError;
use crate::model::CodymModel;

impl CodymModel {
    /// Element-wise signed difference of two models, `self − other`.
    ///
    /// The result keeps the shared state space but its vectors are
    /// differences, not probabilities: entries may be negative and each
    /// vector sums to 0 rather than 1.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OrderMismatch`] if the orders differ.
    pub fn difference(&self, other: &CodymModel) -> Result<CodymModel, ModelError> {
        check_aligned(self, other)?;
        let state_freqs = zip_sub(self.state_freqs(), other.state_freqs());
        let transition_freqs = zip_sub(self.transition_freqs(), other.transition_freqs());
        Ok(CodymModel::from_parts(
            self.shared_space(),
            state_freqs,
            transition_freqs,
        ))
    }
}

/// Unweighted arithmetic mean of a collection of models, per index.
///
/// Every model contributes equally: a model fit from a three-turn
/// conversation carries the same weight as one fit from three hundred
/// turns. That is the intended population semantics, not an oversight —
/// the average describes the typical conversation, not the typical turn.
///
/// # Errors
///
/// Returns [`ModelError::NoModels`] for an empty collection and
/// [`ModelError::OrderMismatch`] if any model's order differs from the
/// first's.
pub fn average(models: &[CodymModel]) -> Result<CodymModel, ModelError> {
    let first = models.first().ok_or(ModelError::NoModels)?;
    for model in &models[1..] {
        check_aligned(first, model)?;
    }

    let n = models.len() as f64;
    let mut state_freqs = vec![0.0; first.state_freqs().len()];
    let mut transition_freqs = vec![0.0; first.transition_freqs().len()];
    for model in models {
        for (acc, &f) in state_freqs.iter_mut().zip(model.state_freqs()) {
            *acc += f;
        }
        for (acc, &f) in transition_freqs.iter_mut().zip(model.transition_freqs()) {
            *acc += f;
        }
    }
    for f in &mut state_freqs {
        *f /= n;
    }
    for f in &mut transition_freqs {
        *f /= n;
    }

    Ok(CodymModel::from_parts(
        first.shared_space(),
        state_freqs,
        transition_freqs,
    ))
}

/// Verifies that two models use the same enumeration.
///
/// Order inequality is a caller error; unequal spaces at equal order cannot
/// happen through this crate's constructors, so that stays a debug
/// assertion.
fn check_aligned(a: &CodymModel, b: &CodymModel) -> Result<(), ModelError> {
    if a.model_order() != b.model_order() {
        return Err(ModelError::OrderMismatch {
            left: a.model_order(),
            right: b.model_order(),
        });
    }
    debug_assert_eq!(a.state_space(), b.state_space(), "spaces diverged at equal order");
    Ok(())
}

fn zip_sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}
