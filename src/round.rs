use crate::cards::Card;
use crate::config::{ConfigError, RoundConfig};
use crate::deck::Deck;
use crate::error::ErrorKind;
use crate::evaluator::{evaluate, EvalError, HandResult, HAND_CARDS};
use crate::hand::{Hand, Selection, SelectionError};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundState {
    NotStarted,
    InProgress,
    /// Hand is empty and the deck cannot fill a play.
    Exhausted,
}

impl RoundState {
    pub fn label(self) -> &'static str {
        match self {
            RoundState::NotStarted => "not started",
            RoundState::InProgress => "in progress",
            RoundState::Exhausted => "exhausted",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("round has not been started")]
    NotStarted,
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("no plays remaining this round")]
    PlaysExhausted,
    #[error("no discards remaining this round")]
    DiscardsExhausted,
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::NotStarted => ErrorKind::InvalidArgument,
            ActionError::Selection(e) => e.kind(),
            ActionError::Eval(e) => e.kind(),
            ActionError::PlaysExhausted | ActionError::DiscardsExhausted => {
                ErrorKind::ExhaustedResource
            }
        }
    }
}

/// One completed action, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundEvent {
    Played { cards: Vec<Card>, result: HandResult },
    Discarded { cards: Vec<Card> },
}

impl RoundEvent {
    pub fn label(&self) -> &'static str {
        match self {
            RoundEvent::Played { .. } => "Play",
            RoundEvent::Discarded { .. } => "Discard",
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            RoundEvent::Played { cards, .. } | RoundEvent::Discarded { cards } => cards,
        }
    }

    /// Points scored by this event, zero for discards.
    pub fn score(&self) -> u64 {
        match self {
            RoundEvent::Played { result, .. } => result.total(),
            RoundEvent::Discarded { .. } => 0,
        }
    }
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        for c in self.cards() {
            write!(f, " {c}")?;
        }
        if let RoundEvent::Played { result, .. } = self {
            write!(f, " -> {result}")?;
        }
        Ok(())
    }
}

/// One round of play: a deck, the held hand, the played pile and the two
/// action budgets.
///
/// Every action validates before it mutates, so an `Err` leaves the round
/// exactly as it was.
///
/// ```
/// use balatro_rs::config::RoundConfig;
/// use balatro_rs::round::Round;
///
/// let mut round = Round::seeded(RoundConfig::default(), 42).unwrap();
/// round.start();
/// assert_eq!(round.hand().len(), 8);
/// let result = round.play(&[0, 1, 2, 3, 4]).unwrap();
/// assert!(result.total() >= 10);
/// assert_eq!(round.plays_remaining(), 4);
/// assert_eq!(round.hand().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    deck: Deck,
    hand: Hand,
    played: Vec<Card>,
    plays_remaining: u32,
    discards_remaining: u32,
    started: bool,
    history: Vec<RoundEvent>,
}

impl Default for Round {
    fn default() -> Self {
        Self::build(RoundConfig::default(), Deck::new())
    }
}

impl Round {
    /// A round over a freshly shuffled standard deck.
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        Self::with_deck(config, Deck::new())
    }

    /// Same as [`Round::new`] but with reproducible shuffles.
    pub fn seeded(config: RoundConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_deck(config, Deck::seeded(seed))
    }

    /// A round over a caller-supplied deck, e.g. [`Deck::stacked`].
    pub fn with_deck(config: RoundConfig, deck: Deck) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, deck))
    }

    fn build(config: RoundConfig, deck: Deck) -> Self {
        Self {
            config,
            deck,
            hand: Hand::new(),
            played: Vec::new(),
            plays_remaining: 0,
            discards_remaining: 0,
            started: false,
            history: Vec::new(),
        }
    }

    /// Begin a new round. Cards from any previous round go back into the
    /// deck before it is reshuffled and a fresh hand is dealt.
    pub fn start(&mut self) {
        let mut reclaimed = self.hand.take_all();
        reclaimed.append(&mut self.played);
        self.deck.return_cards(reclaimed);

        let dealt = self.deck.draw_up_to(self.config.hand_size);
        self.hand.extend(dealt);
        self.plays_remaining = self.config.max_plays;
        self.discards_remaining = self.config.max_discards;
        self.history.clear();
        self.started = true;

        log::debug!(
            "round started: hand {} deck {} plays {} discards {}",
            self.hand.len(),
            self.deck.remaining(),
            self.plays_remaining,
            self.discards_remaining
        );
    }

    /// Score five held cards, move them to the played pile and refill the hand.
    pub fn play(&mut self, indices: &[usize]) -> Result<HandResult, ActionError> {
        if !self.started {
            return Err(ActionError::NotStarted);
        }
        if self.plays_remaining == 0 {
            return Err(ActionError::PlaysExhausted);
        }
        let selection = Selection::for_play(indices, &self.hand)?;
        let result = evaluate(&self.hand.cards_at(&selection)?)?;

        let cards = self.hand.remove(&selection)?;
        self.played.extend_from_slice(&cards);
        self.plays_remaining -= 1;
        self.replenish();

        log::debug!(
            "played {:?}: {result}; plays left {}",
            selection.indices(),
            self.plays_remaining
        );
        self.history.push(RoundEvent::Played { cards, result });
        Ok(result)
    }

    /// Return up to `hand_size` held cards to the deck and refill the hand.
    /// Gives back the discarded cards in selection order.
    pub fn discard(&mut self, indices: &[usize]) -> Result<Vec<Card>, ActionError> {
        if !self.started {
            return Err(ActionError::NotStarted);
        }
        if self.discards_remaining == 0 {
            return Err(ActionError::DiscardsExhausted);
        }
        let selection = Selection::for_discard(indices, &self.hand, self.config.hand_size)?;

        let cards = self.hand.remove(&selection)?;
        self.deck.return_cards(cards.iter().copied());
        self.discards_remaining -= 1;
        self.replenish();

        log::debug!(
            "discarded {:?}; discards left {}",
            selection.indices(),
            self.discards_remaining
        );
        self.history.push(RoundEvent::Discarded { cards: cards.clone() });
        Ok(cards)
    }

    // Draws min(hand_size - held, deck remaining).
    fn replenish(&mut self) {
        let needed = self.config.hand_size.saturating_sub(self.hand.len());
        if needed > 0 {
            let drawn = self.deck.draw_up_to(needed);
            self.hand.extend(drawn);
        }
    }

    pub fn status(&self) -> RoundState {
        if !self.started {
            RoundState::NotStarted
        } else if self.hand.is_empty() && self.deck.remaining() < HAND_CARDS {
            RoundState::Exhausted
        } else {
            RoundState::InProgress
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards scored since the last `start`.
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    pub fn plays_remaining(&self) -> u32 {
        self.plays_remaining
    }

    pub fn discards_remaining(&self) -> u32 {
        self.discards_remaining
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn history(&self) -> &[RoundEvent] {
        &self.history
    }

    /// Sum of every hand scored since the last `start`.
    pub fn total_score(&self) -> u64 {
        self.history.iter().map(RoundEvent::score).sum()
    }
}
