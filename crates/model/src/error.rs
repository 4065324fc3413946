//! Error types for the codym-model crate.

use codym_statespace::StateSpaceError;

/// Error type for all fallible operations in the codym-model crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// Returned when the underlying state space cannot be enumerated
    /// (invalid model order).
    #[error(transparent)]
    Space(#[from] StateSpaceError),

    /// Returned when a mask has too few entries to cover the observed
    /// sequence at its alignment offset.
    #[error("mask too short: need at least {required} entries, got {got}")]
    MaskTooShort {
        /// Offset plus observed-sequence length.
        required: usize,
        /// Entries actually supplied.
        got: usize,
    },

    /// Returned when algebra is attempted between models of different order.
    #[error("model order mismatch: {left} vs {right}")]
    OrderMismatch {
        /// Order of the left-hand model.
        left: usize,
        /// Order of the right-hand model.
        right: usize,
    },

    /// Returned when averaging an empty collection of models.
    #[error("cannot average an empty collection of models")]
    NoModels,
}
