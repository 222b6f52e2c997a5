//! Hand comparison.
//!
//! Two hands are compared through their [`subhands`], each list ordered
//! largest group first. Three phases run in order and the first one that
//! finds a difference decides:
//!
//! 1. [`compare_sizes`]: group sizes, position by position, over the shorter
//!    list. The larger group wins.
//! 2. [`compare_counts`]: the hand with more groups wins.
//! 3. [`compare_ranks`]: group ranks, position by position. The higher rank
//!    wins.
//!
//! If no phase finds a difference the hands tie. This is not standard poker
//! ranking: there are no straights or flushes, and suits are ignored.

use alloc::vec::Vec;

use tracing::{debug, instrument};

use crate::hand::Hand;
use crate::result::{Outcome, Phase, Verdict};
use crate::subhand::{Subhand, subhands};

/// Which argument of a comparison a callback refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first hand.
    First,
    /// The second hand.
    Second,
}

/// Receives the intermediate state of a comparison.
///
/// Both methods default to doing nothing, so implementors only override what
/// they need.
pub trait Observer {
    /// Called once per hand with its groups in comparison order.
    fn on_subhands(&mut self, side: Side, subhands: &[Subhand<'_>]) {
        let _ = (side, subhands);
    }

    /// Called once with the final verdict.
    fn on_verdict(&mut self, verdict: &Verdict) {
        let _ = verdict;
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Observer that emits `debug` level `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_subhands(&mut self, side: Side, subhands: &[Subhand<'_>]) {
        for (index, subhand) in subhands.iter().enumerate() {
            debug!(?side, index, rank = subhand.rank(), size = subhand.len(), "subhand");
        }
    }

    fn on_verdict(&mut self, verdict: &Verdict) {
        debug!(outcome = %verdict.outcome, phase = ?verdict.phase, "hands compared");
    }
}

/// Compares group sizes position by position over the common length.
///
/// Returns `None` if every overlapping position has equal sizes.
#[must_use]
pub fn compare_sizes(first: &[Subhand<'_>], second: &[Subhand<'_>]) -> Option<Outcome> {
    first
        .iter()
        .zip(second)
        .map(|(a, b)| a.len().cmp(&b.len()))
        .find(|ordering| ordering.is_ne())
        .map(Outcome::from)
}

/// Compares the number of groups. More groups wins.
///
/// Returns `None` if both hands have the same number of groups.
#[must_use]
pub fn compare_counts(first: &[Subhand<'_>], second: &[Subhand<'_>]) -> Option<Outcome> {
    let ordering = first.len().cmp(&second.len());
    ordering.is_ne().then(|| Outcome::from(ordering))
}

/// Compares group ranks position by position.
///
/// Returns `None` if no position differs.
#[must_use]
pub fn compare_ranks(first: &[Subhand<'_>], second: &[Subhand<'_>]) -> Option<Outcome> {
    first
        .iter()
        .zip(second)
        .map(|(a, b)| a.rank().cmp(&b.rank()))
        .find(|ordering| ordering.is_ne())
        .map(Outcome::from)
}

fn decide(first: &[Subhand<'_>], second: &[Subhand<'_>]) -> Verdict {
    let phases: [(Phase, fn(&[Subhand<'_>], &[Subhand<'_>]) -> Option<Outcome>); 3] = [
        (Phase::Size, compare_sizes),
        (Phase::Count, compare_counts),
        (Phase::Rank, compare_ranks),
    ];

    phases
        .into_iter()
        .find_map(|(phase, compare)| {
            compare(first, second).map(|outcome| Verdict { outcome, phase })
        })
        .unwrap_or(Verdict {
            outcome: Outcome::Tie,
            phase: Phase::Rank,
        })
}

/// Compares two hands, reporting progress to `observer`.
///
/// Neither hand is modified, and they may differ in length and capacity.
pub fn evaluate_with<O: Observer + ?Sized>(
    first: &Hand,
    second: &Hand,
    observer: &mut O,
) -> Verdict {
    let first_groups: Vec<Subhand<'_>> = subhands(first);
    let second_groups: Vec<Subhand<'_>> = subhands(second);
    observer.on_subhands(Side::First, &first_groups);
    observer.on_subhands(Side::Second, &second_groups);

    let verdict = decide(&first_groups, &second_groups);
    observer.on_verdict(&verdict);
    verdict
}

/// Compares two hands and reports which phase decided.
///
/// Events go to [`TracingObserver`].
///
/// # Example
///
/// ```
/// use handrank::{Card, Hand, Outcome, Phase, Suit, evaluate};
///
/// let mut first = Hand::new();
/// first.extend([2, 2, 5].map(|rank| Card::new(Suit::Hearts, rank)));
///
/// let mut second = Hand::new();
/// second.extend([2, 2, 4].map(|rank| Card::new(Suit::Spades, rank)));
///
/// let verdict = evaluate(&first, &second);
/// assert_eq!(verdict.outcome, Outcome::Win);
/// assert_eq!(verdict.phase, Phase::Rank);
/// ```
#[must_use]
#[instrument(level = "debug", skip_all, fields(first = %first, second = %second))]
pub fn evaluate(first: &Hand, second: &Hand) -> Verdict {
    evaluate_with(first, second, &mut TracingObserver)
}

/// Compares two hands and returns the result for `first`.
///
/// # Example
///
/// ```
/// use handrank::{Card, Hand, Outcome, Suit, compare_hands};
///
/// let mut quads = Hand::new();
/// quads.extend([14, 14, 14, 14, 13].map(|rank| Card::new(Suit::Hearts, rank)));
///
/// let mut run = Hand::new();
/// run.extend([1, 2, 3, 4, 5].map(|rank| Card::new(Suit::Spades, rank)));
///
/// assert_eq!(compare_hands(&quads, &run), Outcome::Win);
/// assert_eq!(compare_hands(&quads, &quads), Outcome::Tie);
/// ```
#[must_use]
pub fn compare_hands(first: &Hand, second: &Hand) -> Outcome {
    evaluate(first, second).outcome
}
