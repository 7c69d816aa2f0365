use crate::cards::Card;
use crate::error::ErrorKind;
use crate::evaluator::HAND_CARDS;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("exactly {expected} cards must be selected, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("at most {max} cards can be selected, got {got}")]
    TooMany { max: usize, got: usize },
    #[error("no cards selected")]
    Empty,
    #[error("card index {0} selected more than once")]
    Duplicate(usize),
    #[error("card index {index} is out of range for a hand of {len}")]
    OutOfRange { index: usize, len: usize },
}

impl SelectionError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Positions into a [`Hand`], checked for range and uniqueness.
///
/// Keeps the caller's order so removed cards come back in the order they
/// were picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// A scoring selection: exactly five distinct in-range indices.
    pub fn for_play(indices: &[usize], hand: &Hand) -> Result<Self, SelectionError> {
        if indices.len() != HAND_CARDS {
            return Err(SelectionError::WrongCount { expected: HAND_CARDS, got: indices.len() });
        }
        Self::checked(indices, hand)
    }

    /// A discard selection: between one and `max` distinct in-range indices.
    pub fn for_discard(indices: &[usize], hand: &Hand, max: usize) -> Result<Self, SelectionError> {
        if indices.is_empty() {
            return Err(SelectionError::Empty);
        }
        if indices.len() > max {
            return Err(SelectionError::TooMany { max, got: indices.len() });
        }
        Self::checked(indices, hand)
    }

    fn checked(indices: &[usize], hand: &Hand) -> Result<Self, SelectionError> {
        let mut seen = HashSet::with_capacity(indices.len());
        for &index in indices {
            if index >= hand.len() {
                return Err(SelectionError::OutOfRange { index, len: hand.len() });
            }
            if !seen.insert(index) {
                return Err(SelectionError::Duplicate(index));
            }
        }
        Ok(Self { indices: indices.to_vec() })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Cards currently held by the player, in display order.
///
/// ```
/// use balatro_rs::cards::parse_cards;
/// use balatro_rs::hand::{Hand, Selection};
///
/// let mut hand = Hand::from_cards(parse_cards("2♠ 3♠ 4♠ 5♠ 6♠ 7♥").unwrap());
/// let sel = Selection::for_discard(&[5, 0], &hand, 8).unwrap();
/// let removed = hand.remove(&sel).unwrap();
/// assert_eq!(removed[0].to_string(), "7♥");
/// assert_eq!(hand.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// `(index, card)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.cards.iter().copied().enumerate()
    }

    /// Copies of the selected cards, in selection order. Fails when the
    /// selection was checked against a larger hand.
    pub fn cards_at(&self, selection: &Selection) -> Result<Vec<Card>, SelectionError> {
        let len = self.cards.len();
        selection
            .indices()
            .iter()
            .map(|&index| self.get(index).ok_or(SelectionError::OutOfRange { index, len }))
            .collect()
    }

    /// Remove the selected cards and return them in selection order.
    /// Nothing is removed unless every index is in range.
    pub fn remove(&mut self, selection: &Selection) -> Result<Vec<Card>, SelectionError> {
        let picked = self.cards_at(selection)?;
        // Highest index first so earlier positions stay valid.
        let mut desc = selection.indices().to_vec();
        desc.sort_unstable_by(|a, b| b.cmp(a));
        for i in desc {
            self.cards.remove(i);
        }
        Ok(picked)
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}
