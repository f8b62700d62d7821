use crate::console::Console;
use crate::error::GameError;
use crate::result::RoundOutcome;

use super::{DEALER_STANDS_AT, Game, GameState};

impl<C: Console> Game<C> {
    /// Dealer plays their hand.
    ///
    /// Skipped entirely when the player has busted. Otherwise the hidden card
    /// is revealed and the dealer draws while below 17. A busted total is
    /// already at least 17, so the loop needs no separate bust check.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards or the console fails.
    pub fn dealer_turn(&mut self) -> Result<(), GameError> {
        if self.player.is_busted() {
            return Ok(());
        }

        self.state = GameState::DealerTurn;
        self.announce("Dealer's turn")?;
        self.say("Dealer reveals the hidden card...")?;

        for card in self.dealer.reveal_hidden_card() {
            self.say(&format!("Dealer's hidden card: {card}"))?;
        }
        self.dealer.recompute_hand_points();
        self.show_hands()?;

        while self.dealer.hand_points() < DEALER_STANDS_AT {
            self.blank()?;
            self.say("Dealer is about to hit")?;

            let card = self.dealer.add_card(&mut self.deck)?;
            let points = self.dealer.recompute_hand_points();
            log::debug!("dealer drew {card}, now at {points}");
            self.show_hands()?;

            if self.dealer.is_busted() {
                self.say("Dealer busted!")?;
            }
        }

        Ok(())
    }

    /// Compares the cached totals and settles funds and scores.
    ///
    /// A dealer win costs the player 1 and a player win pays 1. A push
    /// changes nothing.
    pub fn determine_winner(&mut self) -> RoundOutcome {
        self.state = GameState::Resolution;

        let dealer_total = self.dealer.hand_points();
        let player_total = self.player.hand_points();

        let outcome = if self.player.is_busted()
            || (dealer_total > player_total && !self.dealer.is_busted())
        {
            RoundOutcome::DealerWins
        } else if self.dealer.is_busted()
            || (dealer_total < player_total && !self.player.is_busted())
        {
            RoundOutcome::PlayerWins
        } else {
            RoundOutcome::Push
        };

        match outcome {
            RoundOutcome::DealerWins => {
                self.dealer.increment_score();
                self.player.deduct_funds(1);
            }
            RoundOutcome::PlayerWins => {
                self.player.increment_score();
                self.player.add_funds(1);
            }
            RoundOutcome::Push => {}
        }

        outcome
    }

    /// Settles the round and prints the result with the running score.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn display_result(&mut self) -> Result<RoundOutcome, GameError> {
        let outcome = self.determine_winner();

        self.blank()?;
        self.say("RESULT OF THIS GAME:")?;
        self.say(match outcome {
            RoundOutcome::DealerWins => "Dealer won!",
            RoundOutcome::PlayerWins => "Player won!",
            RoundOutcome::Push => "It's a push (tie)!",
        })?;
        self.blank()?;
        self.say("TOTAL GAME SCORE")?;
        self.say("----------------")?;
        let score = format!(
            "Dealer: {}, Player: {}",
            self.dealer.score(),
            self.player.score()
        );
        self.say(&score)?;

        Ok(outcome)
    }
}
