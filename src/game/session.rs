use crate::console::Console;
use crate::error::GameError;
use crate::result::{RoundOutcome, SessionEnd, SessionSummary};

use super::{Game, GameState};

impl<C: Console> Game<C> {
    /// Plays rounds until the player quits, goes broke, or gets rich.
    ///
    /// The first round uses the deck the game was created with. Every later
    /// round gets a newly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a deck runs out of cards or the console fails.
    pub fn run(&mut self) -> Result<SessionSummary, GameError> {
        self.state = GameState::Welcome;
        self.welcome()?;
        log::info!("session started with ${}", self.player.funds());

        let end = loop {
            self.play_round()?;

            if let Some(end) = self.funds_limit_reached() {
                self.report_funds_limit(end)?;
                break end;
            }

            self.state = GameState::Continue;
            if self.play_again()? {
                self.clear()?;
                self.reset_round();
            } else {
                break SessionEnd::Quit;
            }
        };

        self.state = GameState::End;
        self.goodbye()?;

        let summary = self.summary(end);
        log::info!(
            "session ended ({:?}) after {} rounds, funds ${}",
            summary.end,
            summary.rounds,
            summary.funds
        );
        Ok(summary)
    }

    /// Plays one round: deal, player turn, dealer turn, resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards or the console fails.
    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        self.rounds += 1;
        log::info!("round {} starting", self.rounds);

        let funds = format!("Player has a total of ${}", self.player.funds());
        self.say(&funds)?;

        self.deal_cards()?;
        self.player_turn()?;
        self.dealer_turn()?;
        let outcome = self.display_result()?;

        log::info!(
            "round {} {:?}: player {} vs dealer {}",
            self.rounds,
            outcome,
            self.player.hand_points(),
            self.dealer.hand_points()
        );
        Ok(outcome)
    }

    fn report_funds_limit(&mut self, end: SessionEnd) -> Result<(), GameError> {
        let funds = format!("You currently have ${}", self.player.funds());
        self.say(&funds)?;
        match end {
            SessionEnd::Broke => self.say("You ran out of money and can't play anymore!"),
            SessionEnd::Rich => self.say("You made too much money and can't play anymore!"),
            SessionEnd::Quit => Ok(()),
        }
    }

    fn welcome(&mut self) -> Result<(), GameError> {
        self.blank()?;
        self.say("+------------------------+")?;
        self.say("| Welcome to GAME of 21! |")?;
        self.say("+------------------------+")?;
        self.blank()
    }

    fn goodbye(&mut self) -> Result<(), GameError> {
        self.say("-------------------------------")?;
        self.say("Thank you for playing. Goodbye!")
    }
}
