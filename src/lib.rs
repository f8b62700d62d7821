//! A terminal Game of 21 played against an automated dealer.
//!
//! The crate provides a [`Game`] type that runs a whole session: dealing,
//! the player's hit/stay decisions, the dealer's draw-to-17 policy, scoring,
//! and the funds that decide when the session is over. All text goes through
//! a [`Console`], so a session can be driven by a real terminal or by
//! scripted input.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, ScriptedConsole, SessionEnd, SessionOptions};
//!
//! let console = ScriptedConsole::new(["s", "n"]);
//! let mut game = Game::new(SessionOptions::default(), 7, console);
//! let summary = game.run().unwrap();
//! assert_eq!(summary.end, SessionEnd::Quit);
//! assert_eq!(summary.rounds, 1);
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, HIDDEN_CARD, Rank, Suit};
pub use console::{Console, ScriptedConsole, Terminal};
pub use deck::Deck;
pub use error::{DrawError, GameError, InputError};
pub use game::{Answer, CARDS_DEALT_AT_START, DEALER_STANDS_AT, Game, GameState, Move};
pub use options::SessionOptions;
pub use participant::{BUST_LIMIT, Dealer, Participant, Player};
pub use result::{RoundOutcome, SessionEnd, SessionSummary};
