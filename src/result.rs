//! Comparison result types.

use core::cmp::Ordering;
use core::fmt;

/// Result of comparing a first hand against a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The first hand beats the second.
    Win,
    /// The first hand loses to the second.
    Lose,
    /// Neither hand is better.
    Tie,
}

impl Outcome {
    /// Returns the outcome from the second hand's point of view.
    ///
    /// ```
    /// use handrank::Outcome;
    ///
    /// assert_eq!(Outcome::Win.reverse(), Outcome::Lose);
    /// assert_eq!(Outcome::Tie.reverse(), Outcome::Tie);
    /// ```
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Win,
            Ordering::Less => Self::Lose,
            Ordering::Equal => Self::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "Win!",
            Self::Lose => "Lose!",
            Self::Tie => "Tie",
        })
    }
}

/// The comparison phase that settled a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Group sizes differed at some position.
    Size,
    /// One hand had more groups than the other.
    Count,
    /// Group ranks were compared; also reported for a tie.
    Rank,
}

/// Outcome of a comparison together with the phase that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict {
    /// Result for the first hand.
    pub outcome: Outcome,
    /// Phase that produced `outcome`.
    pub phase: Phase,
}
