//! Round and session result types.

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// Push (tie).
    Push,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player declined another round.
    Quit,
    /// Player ran out of funds.
    Broke,
    /// Player won more than the table allows.
    Rich,
}

/// Summary returned when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Why the session ended.
    pub end: SessionEnd,
    /// Number of rounds played.
    pub rounds: u32,
    /// The player's funds at the end.
    pub funds: i32,
    /// Rounds won by the player.
    pub player_score: u32,
    /// Rounds won by the dealer.
    pub dealer_score: u32,
}
