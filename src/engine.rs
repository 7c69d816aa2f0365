// Round engine API boundary. Presentation adapters (TUI, text mode) drive a
// round through this trait and never reach into `Round` internals. It is
// implemented for the core `Round` type.

use crate::cards::Card;
use crate::config::RoundConfig;
use crate::evaluator::HandResult;
use crate::hand::Hand;
use crate::round::{ActionError, Round, RoundEvent, RoundState};

pub trait RoundEngine {
    // Lifecycle
    fn start(&mut self);

    // Actions
    fn play(&mut self, indices: &[usize]) -> Result<HandResult, ActionError>;
    fn discard(&mut self, indices: &[usize]) -> Result<Vec<Card>, ActionError>;

    // Queries
    fn hand(&self) -> &Hand;
    fn plays_remaining(&self) -> u32;
    fn discards_remaining(&self) -> u32;
    fn deck_remaining(&self) -> usize;
    fn status(&self) -> RoundState;
    fn history(&self) -> &[RoundEvent];
    fn total_score(&self) -> u64;
    fn config(&self) -> &RoundConfig;
}

impl RoundEngine for Round {
    fn start(&mut self) {
        self.start();
    }

    fn play(&mut self, indices: &[usize]) -> Result<HandResult, ActionError> {
        self.play(indices)
    }
    fn discard(&mut self, indices: &[usize]) -> Result<Vec<Card>, ActionError> {
        self.discard(indices)
    }

    fn hand(&self) -> &Hand {
        self.hand()
    }
    fn plays_remaining(&self) -> u32 {
        self.plays_remaining()
    }
    fn discards_remaining(&self) -> u32 {
        self.discards_remaining()
    }
    fn deck_remaining(&self) -> usize {
        self.deck_remaining()
    }
    fn status(&self) -> RoundState {
        self.status()
    }
    fn history(&self) -> &[RoundEvent] {
        self.history()
    }
    fn total_score(&self) -> u64 {
        self.total_score()
    }
    fn config(&self) -> &RoundConfig {
        self.config()
    }
}
