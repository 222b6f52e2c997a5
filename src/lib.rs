//! Compares card hands by grouping cards of matching rank, with optional
//! `no_std` support.
//!
//! A [`Hand`] keeps its cards sorted highest rank first. Comparing two hands
//! splits each into [`Subhand`]s (runs of equal rank), orders the groups
//! largest first, then compares group sizes, group counts, and group ranks in
//! that order. See [`ranking`] for the exact rules.
//!
//! # Example
//!
//! ```
//! use handrank::{Card, Hand, Outcome, Suit, compare_hands};
//!
//! let mut first = Hand::new();
//! first.extend([
//!     Card::new(Suit::Hearts, 1),
//!     Card::new(Suit::Hearts, 2),
//!     Card::new(Suit::Clubs, 3),
//!     Card::new(Suit::Hearts, 6),
//!     Card::new(Suit::Spades, 4),
//! ]);
//!
//! let mut second = Hand::new();
//! second.extend([
//!     Card::new(Suit::Hearts, 13),
//!     Card::new(Suit::Hearts, 2),
//!     Card::new(Suit::Clubs, 3),
//!     Card::new(Suit::Diamonds, 2),
//!     Card::new(Suit::Spades, 3),
//! ]);
//!
//! assert_eq!(compare_hands(&first, &second), Outcome::Lose);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod ranking;
pub mod result;
pub mod subhand;

// Re-export main types
pub use card::{Card, Suit};
pub use error::HandError;
pub use hand::Hand;
pub use options::{DEFAULT_CAPACITY, HandOptions};
pub use ranking::{
    NoopObserver, Observer, Side, TracingObserver, compare_counts, compare_hands, compare_ranks,
    compare_sizes, evaluate, evaluate_with,
};
pub use result::{Outcome, Phase, Verdict};
pub use subhand::{Subhand, group_by_rank, order_by_size, subhands};
