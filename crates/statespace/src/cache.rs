//! Order-keyed memoization of state spaces.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::StateSpaceError;
use crate::space::StateSpace;

/// A caller-owned cache of enumerated spaces, keyed by model order.
///
/// A space is a pure function of its order, so recomputing it per fit is
/// wasted work when many conversations share an order. The cache hands out
/// [`Arc`] handles to immutable spaces; there is no global state, and a
/// cache can be dropped at any time without invalidating models that still
/// hold a handle.
#[derive(Debug, Default)]
pub struct SpaceCache {
    spaces: HashMap<usize, Arc<StateSpace>>,
}

impl SpaceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the space for `order`, enumerating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`StateSpaceError::InvalidOrder`] for orders [`StateSpace::new`]
    /// rejects; nothing is cached in that case.
    pub fn get(&mut self, order: usize) -> Result<Arc<StateSpace>, StateSpaceError> {
        if let Some(space) = self.spaces.get(&order) {
            return Ok(Arc::clone(space));
        }
        debug!(order, "enumerating state space");
        let space = Arc::new(StateSpace::new(order)?);
        self.spaces.insert(order, Arc::clone(&space));
        Ok(space)
    }

    /// Number of distinct orders currently cached.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}
