use crate::deck::STANDARD_SIZE;
use crate::error::ErrorKind;
use crate::evaluator::HAND_CARDS;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("hand size {0} is below the {HAND_CARDS} cards a play needs")]
    HandTooSmall(usize),
    #[error("hand size {0} exceeds the {STANDARD_SIZE}-card deck")]
    HandTooLarge(usize),
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Per-round limits. Defaults: 8 cards in hand, 5 plays, 5 discards.
///
/// ```
/// use balatro_rs::config::RoundConfig;
///
/// let cfg = RoundConfig::default().with_hand_size(7).with_max_plays(3);
/// assert_eq!(cfg.hand_size, 7);
/// assert_eq!(cfg.max_plays, 3);
/// assert_eq!(cfg.max_discards, 5);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub hand_size: usize,
    pub max_plays: u32,
    pub max_discards: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { hand_size: 8, max_plays: 5, max_discards: 5 }
    }
}

impl RoundConfig {
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_max_plays(mut self, max_plays: u32) -> Self {
        self.max_plays = max_plays;
        self
    }

    pub fn with_max_discards(mut self, max_discards: u32) -> Self {
        self.max_discards = max_discards;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size < HAND_CARDS {
            return Err(ConfigError::HandTooSmall(self.hand_size));
        }
        if self.hand_size > STANDARD_SIZE {
            return Err(ConfigError::HandTooLarge(self.hand_size));
        }
        Ok(())
    }
}
