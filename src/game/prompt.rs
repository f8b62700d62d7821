use core::str::FromStr;

use crate::console::Console;
use crate::error::{GameError, InputError};

use super::Game;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

impl FromStr for Move {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_lowercase().as_str() {
            "h" | "hit" => Ok(Self::Hit),
            "s" | "stay" => Ok(Self::Stay),
            _ => Err(InputError::Unrecognized(token.to_owned())),
        }
    }
}

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Yes.
    Yes,
    /// No.
    No,
}

impl FromStr for Answer {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Yes),
            "n" | "no" => Ok(Self::No),
            _ => Err(InputError::Unrecognized(token.to_owned())),
        }
    }
}

const MOVE_PROMPT: &str = "Player must enter 'h' to hit or 's' to stay. Hit or Stay? ";
const MOVE_CORRECTION: &str = "Player's input was invalid. Please try again.";
const AGAIN_PROMPT: &str = "Would you like to play another game? Enter 'y' for yes, 'n' for no: ";
const AGAIN_CORRECTION: &str = "Please enter 'y' for yes, 'n' for no.";

impl<C: Console> Game<C> {
    /// Reads lines until one parses as `T`, printing `correction` after each
    /// rejected line.
    fn prompt<T>(&mut self, prompt: &str, correction: &str) -> Result<T, GameError>
    where
        T: FromStr<Err = InputError>,
    {
        loop {
            self.blank()?;
            let line = self.console.read_line(prompt)?;
            match line.parse::<T>() {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    log::debug!("rejected input: {err}");
                    self.say(correction)?;
                }
            }
        }
    }

    /// Asks the player to hit or stay.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn prompt_move(&mut self) -> Result<Move, GameError> {
        self.prompt(MOVE_PROMPT, MOVE_CORRECTION)
    }

    /// Asks the player whether to play another round.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn play_again(&mut self) -> Result<bool, GameError> {
        let answer: Answer = self.prompt(AGAIN_PROMPT, AGAIN_CORRECTION)?;
        Ok(answer == Answer::Yes)
    }
}
