//! Hand configuration options.

/// Capacity used by [`HandOptions::default`], one five-card hand.
pub const DEFAULT_CAPACITY: usize = 5;

/// Configuration options for a [`Hand`](crate::Hand).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handrank::HandOptions;
///
/// let options = HandOptions::default().with_capacity(15);
/// assert_eq!(options.capacity, 15);
/// assert!(options.bounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandOptions {
    /// Maximum number of cards the hand accepts.
    ///
    /// For unbounded hands this is only used to pre-allocate storage.
    pub capacity: usize,
    /// Whether adding past `capacity` is rejected.
    pub bounded: bool,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            bounded: true,
        }
    }
}

impl HandOptions {
    /// Sets the capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::HandOptions;
    ///
    /// let options = HandOptions::default().with_capacity(7);
    /// assert_eq!(options.capacity, 7);
    /// ```
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets whether the capacity is enforced.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::HandOptions;
    ///
    /// let options = HandOptions::default().with_bounded(false);
    /// assert!(!options.bounded);
    /// ```
    #[must_use]
    pub const fn with_bounded(mut self, bounded: bool) -> Self {
        self.bounded = bounded;
        self
    }
}
