//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::GameError;
use crate::options::SessionOptions;
use crate::participant::{Dealer, Player};
use crate::result::{SessionEnd, SessionSummary};

mod actions;
mod dealer;
mod prompt;
mod session;
pub mod state;

pub use prompt::{Answer, Move};
pub use state::GameState;

/// Cards dealt to each participant at the start of a round.
pub const CARDS_DEALT_AT_START: usize = 2;

/// The dealer keeps drawing while below this total.
pub const DEALER_STANDS_AT: u32 = 17;

/// A Game of 21 session between one player and the dealer.
///
/// The game owns the deck, both participants, and the console it talks
/// through. Funds and scores persist across rounds; the deck and hands are
/// replaced at the start of each new round.
pub struct Game<C> {
    /// Cards left for the current round.
    pub deck: Deck,
    /// The player.
    pub player: Player,
    /// The dealer.
    pub dealer: Dealer,
    /// Session options.
    pub options: SessionOptions,
    /// Current game state.
    state: GameState,
    /// Rounds started this session.
    rounds: u32,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
    console: C,
}

impl<C: Console> Game<C> {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, SessionOptions, Terminal};
    ///
    /// let mut game = Game::new(SessionOptions::default(), 42, Terminal);
    /// let _ = game.run();
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64, console: C) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            deck,
            player: Player::new(options.starting_funds, options.min_funds, options.max_funds),
            dealer: Dealer::new(),
            options,
            state: GameState::Welcome,
            rounds: 0,
            rng,
            console,
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started.
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the console.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the game and returns its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Replaces the deck with a freshly shuffled one and clears both hands.
    ///
    /// Funds and scores are kept.
    pub fn reset_round(&mut self) {
        self.deck = Deck::new(&mut self.rng);
        self.dealer.reset_hand();
        self.dealer.reset_points();
        self.player.reset_hand();
        self.player.reset_points();
        self.state = GameState::Dealing;
    }

    /// Returns why the session must end, if the player is broke or rich.
    pub const fn funds_limit_reached(&self) -> Option<SessionEnd> {
        if self.player.is_broke() {
            Some(SessionEnd::Broke)
        } else if self.player.is_rich() {
            Some(SessionEnd::Rich)
        } else {
            None
        }
    }

    /// Builds a summary of the session so far.
    pub fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            end,
            rounds: self.rounds,
            funds: self.player.funds(),
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
        }
    }

    fn say(&mut self, line: &str) -> Result<(), GameError> {
        self.console.print(line)?;
        Ok(())
    }

    fn blank(&mut self) -> Result<(), GameError> {
        self.say("")
    }

    fn clear(&mut self) -> Result<(), GameError> {
        if self.options.clear_screen {
            self.console.clear()?;
        }
        Ok(())
    }

    fn announce(&mut self, heading: &str) -> Result<(), GameError> {
        self.blank()?;
        self.say(heading)?;
        self.blank()
    }

    /// Prints both hands with their cached totals.
    fn show_hands(&mut self) -> Result<(), GameError> {
        let dealer = format!(
            "Dealer's hand: {}. Points: {}",
            self.dealer.render_hand(),
            self.dealer.hand_points()
        );
        let player = format!(
            "Player's hand: {}. Points: {}",
            self.player.render_hand(),
            self.player.hand_points()
        );
        self.say(&dealer)?;
        self.say(&player)
    }
}
