//! Session configuration options.

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_funds(3)
///     .with_max_funds(20)
///     .with_clear_screen(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionOptions {
    /// Funds the player starts the session with.
    pub starting_funds: i32,
    /// The player is broke at or below this amount.
    pub min_funds: i32,
    /// The player is rich above this amount.
    pub max_funds: i32,
    /// Whether the console is cleared between phases.
    pub clear_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_funds: 5,
            min_funds: 0,
            max_funds: 10,
            clear_screen: true,
        }
    }
}

impl SessionOptions {
    /// Sets the starting funds.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_funds(8);
    /// assert_eq!(options.starting_funds, 8);
    /// ```
    #[must_use]
    pub const fn with_starting_funds(mut self, funds: i32) -> Self {
        self.starting_funds = funds;
        self
    }

    /// Sets the broke boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_min_funds(-2);
    /// assert_eq!(options.min_funds, -2);
    /// ```
    #[must_use]
    pub const fn with_min_funds(mut self, funds: i32) -> Self {
        self.min_funds = funds;
        self
    }

    /// Sets the rich boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_max_funds(15);
    /// assert_eq!(options.max_funds, 15);
    /// ```
    #[must_use]
    pub const fn with_max_funds(mut self, funds: i32) -> Self {
        self.max_funds = funds;
        self
    }

    /// Sets whether the console is cleared between phases.
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
