//! Error types for the codym-statespace crate.

use crate::space::MAX_ORDER;

/// Error type for all fallible operations in the codym-statespace crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StateSpaceError {
    /// Returned when a model order is zero or too large to enumerate.
    #[error("invalid model order: {order} (must be 1..={MAX_ORDER})")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_order() {
        let e = StateSpaceError::InvalidOrder { order: 0 };
        assert_eq!(e.to_string(), "invalid model order: 0 (must be 1..=16)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<StateSpaceError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StateSpaceError>();
    }
}
