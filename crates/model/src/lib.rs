//! Conversational dynamics model (CODYM) fitting and algebra.
//!
//! A CODYM (Clarfeld et al. 2021) summarizes how a conversation moves
//! between local patterns of binarized turn lengths: a fixed-order,
//! Markov-style pair of frequency distributions over all possible length-k
//! states and all possible state-to-state transitions.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//!  │   observe    │────▶│  mask filter  │────▶│ count + norm  │
//!  │  (windows)   │     │  (optional)   │     │ (frequencies) │
//!  └──────────────┘     └───────────────┘     └───────────────┘
//! ```
//!
//! Fitting one conversation is independent, side-effect-free work over
//! immutable inputs; batches of conversations can be fitted concurrently
//! against one shared enumeration (see [`codym_statespace::SpaceCache`]).
//!
//! # Quick start
//!
//! ```
//! use codym_model::{CodymModel, average};
//! use codym_statespace::TurnLength::{Long, Short};
//!
//! // Two short conversations, already binarized upstream.
//! let a = CodymModel::fit(&[Short, Long, Long, Short, Long], 2, None).unwrap();
//! let b = CodymModel::fit(&[Long, Long, Short, Short, Long], 2, None).unwrap();
//!
//! // Population summary and group contrast.
//! let norm = average(&[a.clone(), b.clone()]).unwrap();
//! let contrast = a.difference(&b).unwrap();
//!
//! assert_eq!(norm.state_freqs().len(), 4);
//! let sum: f64 = norm.state_freqs().iter().sum();
//! assert!((sum - 1.0).abs() < 1e-12);
//! let zero: f64 = contrast.state_freqs().iter().sum();
//! assert!(zero.abs() < 1e-12);
//! ```

pub mod algebra;
pub mod error;
pub mod model;

pub(crate) mod mask;
pub(crate) mod observe;

pub use algebra::average;
pub use error::ModelError;
pub use model::CodymModel;
