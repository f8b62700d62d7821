//! Error types for game operations.

use std::io;

use thiserror::Error;

/// Errors that can occur while drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while parsing a typed answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input is not one of the accepted tokens.
    #[error("unrecognized input: {0:?}")]
    Unrecognized(String),
}

/// Errors that can end a session early.
#[derive(Debug, Error)]
pub enum GameError {
    /// A card could not be drawn.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// The console failed to read or write.
    #[error("console error: {0}")]
    Console(#[from] io::Error),
}
