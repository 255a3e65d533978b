//! Round configuration options.

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::RoundOptions;
///
/// let options = RoundOptions::default().with_dealer_hits_soft_17(true);
/// assert!(options.dealer_hits_soft_17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundOptions {
    /// Whether the dealer draws on a soft 17.
    ///
    /// Off by default: the dealer stands on any 17.
    pub dealer_hits_soft_17: bool,
}

impl RoundOptions {
    /// Sets whether the dealer draws on a soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_hits_soft_17(true);
    /// assert!(options.dealer_hits_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }
}
