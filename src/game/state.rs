//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Showing the welcome banner.
    Welcome,
    /// Dealing the opening cards.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer reveals and draws to 17.
    DealerTurn,
    /// Comparing totals and settling funds and scores.
    Resolution,
    /// Deciding whether another round is played.
    Continue,
    /// Session is over.
    End,
}
