//! Error types for hand operations.

use thiserror::Error;

/// Errors that can occur while filling a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand already holds as many cards as its capacity allows.
    #[error("hand is full (capacity {capacity})")]
    Full {
        /// The capacity of the hand.
        capacity: usize,
    },
}
