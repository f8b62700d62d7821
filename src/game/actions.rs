use crate::console::Console;
use crate::error::GameError;

use super::{CARDS_DEALT_AT_START, Game, GameState, Move};

impl<C: Console> Game<C> {
    /// Deals the opening cards.
    ///
    /// The player gets two face-up cards. The dealer gets two cards and the
    /// first one is turned face-down, so the dealer's total reads 0 until it
    /// is revealed.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards.
    pub fn deal_cards(&mut self) -> Result<(), GameError> {
        self.state = GameState::Dealing;

        for _ in 0..CARDS_DEALT_AT_START {
            self.player.add_card(&mut self.deck)?;
        }
        self.player.recompute_hand_points();

        for _ in 0..CARDS_DEALT_AT_START {
            self.dealer.add_card(&mut self.deck)?;
        }
        self.dealer.set_card_face_down(0);
        self.dealer.recompute_hand_points();

        log::debug!(
            "dealt player [{}], dealer [{}]",
            self.player.render_hand(),
            self.dealer.render_hand()
        );
        Ok(())
    }

    /// Runs the player's turn: hit until busted or the player stays.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards or the console fails.
    pub fn player_turn(&mut self) -> Result<(), GameError> {
        self.state = GameState::PlayerTurn;
        self.announce("Player's turn")?;
        self.show_hands()?;

        while !self.player.is_busted() {
            match self.prompt_move()? {
                Move::Stay => {
                    self.clear()?;
                    self.say("Player decided to stay.")?;
                    break;
                }
                Move::Hit => {
                    self.clear()?;
                    self.say("Player decided to hit.")?;
                    self.blank()?;

                    let card = self.player.add_card(&mut self.deck)?;
                    let points = self.player.recompute_hand_points();
                    log::debug!("player drew {card}, now at {points}");
                    self.show_hands()?;

                    if self.player.is_busted() {
                        self.say("Player busted!")?;
                    }
                }
            }
        }

        Ok(())
    }
}
