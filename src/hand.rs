//! Rank-ordered hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::options::HandOptions;
use crate::ranking;
use crate::result::Outcome;

/// Writes the ranks of `cards` as ` { r1 r2 ... } `.
pub(crate) fn write_ranks(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str(" { ")?;
    for card in cards {
        write!(f, "{} ", card.rank)?;
    }
    f.write_str("} ")
}

/// A hand of cards kept in descending rank order.
///
/// Cards are appended with [`Hand::add`] and the hand re-sorts itself after
/// every insertion, so [`Hand::cards`] is always non-increasing by rank.
/// Suits are never used as a sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, highest rank first.
    cards: Vec<Card>,
    /// Capacity and enforcement settings.
    options: HandOptions,
}

impl Hand {
    /// Creates a new empty hand with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(HandOptions::default())
    }

    /// Creates a new empty hand that holds at most `capacity` cards.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::Hand;
    ///
    /// let hand = Hand::with_capacity(15);
    /// assert_eq!(hand.capacity(), Some(15));
    /// assert!(hand.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(HandOptions::default().with_capacity(capacity))
    }

    /// Creates a new empty hand from explicit options.
    #[must_use]
    pub fn with_options(options: HandOptions) -> Self {
        Self {
            cards: Vec::with_capacity(options.capacity),
            options,
        }
    }

    /// Adds a card to the hand.
    ///
    /// # Panics
    ///
    /// Panics if the hand is bounded and already full. Use [`Hand::try_add`]
    /// when a full hand is an expected condition.
    pub fn add(&mut self, card: Card) {
        assert!(
            !self.is_full(),
            "cannot add {card} to a full hand (capacity {})",
            self.options.capacity
        );
        self.insert(card);
    }

    /// Adds a card to the hand, failing instead of panicking when it is full.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Full`] if the hand is bounded and already holds
    /// `capacity` cards. The hand is left unchanged.
    pub fn try_add(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full {
                capacity: self.options.capacity,
            });
        }
        self.insert(card);
        Ok(())
    }

    fn insert(&mut self, card: Card) {
        self.cards.push(card);
        // Stable, so equal ranks keep insertion order.
        self.cards.sort_by(|a, b| b.rank.cmp(&a.rank));
    }

    /// Returns the cards in the hand, highest rank first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the maximum number of cards, or `None` for an unbounded hand.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        if self.options.bounded {
            Some(self.options.capacity)
        } else {
            None
        }
    }

    /// Returns whether another card would exceed the capacity.
    ///
    /// Always `false` for an unbounded hand.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.options.bounded && self.cards.len() >= self.options.capacity
    }

    /// Returns the options the hand was created with.
    #[must_use]
    pub const fn options(&self) -> HandOptions {
        self.options
    }

    /// Removes every card, keeping the options.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Compares this hand against `other`.
    ///
    /// Shorthand for [`compare_hands`](crate::compare_hands).
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::{Card, Hand, Outcome, Suit};
    ///
    /// let mut pair = Hand::new();
    /// pair.extend([Card::new(Suit::Hearts, 9), Card::new(Suit::Spades, 9)]);
    ///
    /// let mut high = Hand::new();
    /// high.extend([Card::new(Suit::Clubs, 14), Card::new(Suit::Clubs, 2)]);
    ///
    /// assert_eq!(pair.compare(&high), Outcome::Win);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Outcome {
        ranking::compare_hands(self, other)
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Card> for Hand {
    /// Adds each card in turn.
    ///
    /// Panics under the same condition as [`Hand::add`].
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.add(card);
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ranks(f, &self.cards)
    }
}
