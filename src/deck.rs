use crate::cards::{Card, Rank, Suit};
use crate::error::ErrorKind;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Number of cards in a standard deck.
pub const STANDARD_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("not enough cards left in the deck: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

impl DeckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::InsufficientCards { .. } => ErrorKind::InsufficientCards,
            DeckError::DuplicateCard(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[derive(Debug, Clone)]
enum Order {
    Shuffled(ChaCha8Rng),
    Stacked,
}

/// A sequence of unique cards. Draws come off the front; returned cards go
/// to the back and the deck is reshuffled.
///
/// ```
/// use balatro_rs::deck::Deck;
///
/// let mut deck = Deck::seeded(7);
/// assert_eq!(deck.remaining(), 52);
/// let hand = deck.draw(8).unwrap();
/// assert_eq!(hand.len(), 8);
/// assert_eq!(deck.remaining(), 44);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    order: Order,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A shuffled 52-card deck seeded from the thread RNG.
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// A shuffled 52-card deck with a reproducible order.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A shuffled 52-card deck driven by the given RNG.
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self { cards: standard_cards(), order: Order::Shuffled(rng) };
        deck.shuffle();
        deck
    }

    /// A deck that keeps exactly the given order. Shuffling is a no-op and
    /// returned cards are only appended, which makes replays deterministic.
    pub fn stacked(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(DeckError::DuplicateCard(c));
            }
        }
        Ok(Self { cards, order: Order::Stacked })
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Cards in draw order (front first).
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Randomize the current order in place. Membership never changes.
    pub fn shuffle(&mut self) {
        if let Order::Shuffled(rng) = &mut self.order {
            self.cards.shuffle(rng);
            log::trace!("shuffled deck of {}", self.cards.len());
        }
    }

    /// Remove and return the first `n` cards.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        log::trace!("draw {n} of {}", self.cards.len());
        Ok(self.cards.drain(..n).collect())
    }

    /// Draw `min(n, remaining)` cards; never fails.
    pub fn draw_up_to(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Put cards back at the bottom and reshuffle. Callers must only return
    /// cards that were drawn from this deck and are not already in it.
    pub(crate) fn return_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        let before = self.cards.len();
        self.cards.extend(cards);
        debug_assert!(
            self.cards.iter().copied().collect::<HashSet<_>>().len() == self.cards.len(),
            "returned cards must not already be in the deck"
        );
        log::trace!("took back {} cards", self.cards.len() - before);
        self.shuffle();
    }
}

fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_SIZE);
    for s in Suit::ALL {
        for r in Rank::ALL {
            cards.push(Card::new(r, s));
        }
    }
    cards
}
