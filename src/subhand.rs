//! Partitioning a hand into groups of matching rank.
//!
//! A [`Subhand`] is a maximal run of equal-rank cards borrowed from a
//! [`Hand`]. Partitioning happens in two steps:
//!
//! 1. [`group_by_rank`] scans the rank-sorted cards and splits them into runs.
//! 2. [`order_by_size`] stably sorts the runs largest first. Runs of the same
//!    size keep their scan order, which for a sorted hand is highest rank
//!    first.
//!
//! [`subhands`] does both.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::{Hand, write_ranks};

/// A non-empty group of cards that all share one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subhand<'a> {
    cards: &'a [Card],
}

impl<'a> Subhand<'a> {
    /// Returns the cards in the group.
    #[must_use]
    pub const fn cards(&self) -> &'a [Card] {
        self.cards
    }

    /// Returns the number of cards in the group.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; a subhand holds at least one card.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the rank shared by every card in the group.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.cards[0].rank
    }
}

impl fmt::Display for Subhand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ranks(f, self.cards)
    }
}

/// Splits `cards` into maximal runs of identical rank, in scan order.
///
/// Only adjacent cards are grouped, so `cards` should already be sorted by
/// rank. An empty slice yields no groups.
///
/// # Example
///
/// ```
/// use handrank::{Card, Suit, group_by_rank};
///
/// let cards = [
///     Card::new(Suit::Hearts, 13),
///     Card::new(Suit::Spades, 3),
///     Card::new(Suit::Clubs, 3),
/// ];
/// let groups = group_by_rank(&cards);
/// assert_eq!(groups.len(), 2);
/// assert_eq!((groups[0].rank(), groups[0].len()), (13, 1));
/// assert_eq!((groups[1].rank(), groups[1].len()), (3, 2));
/// ```
#[must_use]
pub fn group_by_rank(cards: &[Card]) -> Vec<Subhand<'_>> {
    cards
        .chunk_by(|a, b| a.rank == b.rank)
        .map(|cards| Subhand { cards })
        .collect()
}

/// Sorts groups by size, largest first.
///
/// The sort is stable: groups of equal size keep their relative order. Rank
/// is not a key here.
pub fn order_by_size(subhands: &mut [Subhand<'_>]) {
    subhands.sort_by(|a, b| b.len().cmp(&a.len()));
}

/// Partitions a hand into rank groups ordered largest first.
///
/// Every card of `hand` lands in exactly one group.
#[must_use]
pub fn subhands(hand: &Hand) -> Vec<Subhand<'_>> {
    let mut groups = group_by_rank(hand.cards());
    order_by_size(&mut groups);
    groups
}
