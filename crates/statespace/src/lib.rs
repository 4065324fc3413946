//! State and transition enumeration for conversational dynamics models.
//!
//! A conversational dynamics model (CODYM, Clarfeld et al. 2021) summarizes
//! a conversation as transitions between length-k windows of binarized turn
//! lengths. This crate enumerates, for a given model order k, every possible
//! window ("state", `2^k` of them) and every possible state-to-state
//! transition (`2·2^k`), in a canonical order that fitted frequency vectors
//! are index-aligned to.
//!
//! # Quick start
//!
//! ```
//! use codym_statespace::StateSpace;
//!
//! let space = StateSpace::new(2).unwrap();
//! assert_eq!(space.n_states(), 4);
//! assert_eq!(space.n_transitions(), 8);
//!
//! // States are ordered by their big-endian bit value: 00, 01, 10, 11.
//! assert_eq!(space.states()[2].to_string(), "10");
//! // The transition (from-state s, trailing bit b) sits at index 2s + b.
//! assert_eq!(space.transitions()[5].to_string(), "1001");
//! ```
//!
//! For repeated fits sharing an order, [`SpaceCache`] memoizes the
//! enumeration behind [`std::sync::Arc`] handles.

pub mod cache;
pub mod error;
pub mod space;
pub mod state;
pub mod transition;
pub mod turn;

pub use cache::SpaceCache;
pub use error::StateSpaceError;
pub use space::{MAX_ORDER, StateSpace};
pub use state::StatePattern;
pub use transition::TransitionPattern;
pub use turn::TurnLength;
