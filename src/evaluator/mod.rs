pub(crate) mod analysis;
pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::error::ErrorKind;
use analysis::HandAnalysis;
use combinations::Combinations;
use detector::DETECTORS;
use std::fmt;

/// Number of cards in a scored hand.
pub const HAND_CARDS: usize = 5;

/// Scoring category, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// Base chips from the fixed reward table.
    pub const fn chips(self) -> u32 {
        match self {
            Category::HighCard => 10,
            Category::OnePair => 20,
            Category::TwoPair => 35,
            Category::ThreeOfAKind => 45,
            Category::Straight => 55,
            Category::Flush => 65,
            Category::FullHouse => 80,
            Category::FourOfAKind => 110,
            Category::StraightFlush => 140,
        }
    }

    /// Multiplier from the fixed reward table.
    pub const fn multiplier(self) -> u32 {
        match self {
            Category::HighCard => 1,
            Category::OnePair | Category::TwoPair => 2,
            Category::ThreeOfAKind => 3,
            Category::Straight | Category::Flush | Category::FullHouse => 4,
            Category::FourOfAKind => 7,
            Category::StraightFlush => 8,
        }
    }

    pub const fn result(self) -> HandResult {
        HandResult { category: self, chips: self.chips(), multiplier: self.multiplier() }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reward for one scored hand. `total = chips × multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandResult {
    category: Category,
    chips: u32,
    multiplier: u32,
}

impl HandResult {
    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn name(&self) -> &'static str {
        self.category.name()
    }

    pub const fn chips(&self) -> u32 {
        self.chips
    }

    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub const fn total(&self) -> u64 {
        self.chips as u64 * self.multiplier as u64
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} x {} = {})", self.name(), self.chips, self.multiplier, self.total())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("a scored hand needs exactly {HAND_CARDS} cards, got {0}")]
    WrongCardCount(usize),
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::WrongCardCount(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Score a hand. Fails unless exactly five cards are given.
///
/// ```
/// use balatro_rs::cards::parse_cards;
/// use balatro_rs::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("A♠ 2♥ 3♣ 4♦ 5♠").unwrap();
/// let result = evaluate(&cards).unwrap();
/// assert_eq!(result.category(), Category::Straight);
/// assert_eq!(result.total(), 220);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandResult, EvalError> {
    let five: &[Card; HAND_CARDS] =
        cards.try_into().map_err(|_| EvalError::WrongCardCount(cards.len()))?;
    Ok(evaluate_five(five))
}

/// Classify exactly five cards. The first detector that matches wins.
pub fn evaluate_five(cards: &[Card; HAND_CARDS]) -> HandResult {
    classify(&HandAnalysis::new(cards)).result()
}

fn classify(analysis: &HandAnalysis) -> Category {
    DETECTORS
        .iter()
        .find(|d| d.detect(analysis))
        .map(|d| d.category())
        .unwrap_or(Category::HighCard)
}

/// Best five-card play found in a larger hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// Ascending positions into the hand the suggestion was computed for.
    pub indices: [usize; HAND_CARDS],
    pub result: HandResult,
}

/// Try every five-card subset of `cards` and return the highest-scoring one.
/// Ties keep the lexicographically first index set. `None` with fewer than five cards.
///
/// ```
/// use balatro_rs::cards::parse_cards;
/// use balatro_rs::evaluator::{best_play, Category};
///
/// let hand = parse_cards("K♣ 9♥ 9♠ 2♦ 9♦ 4♣ K♥ 7♠").unwrap();
/// let hint = best_play(&hand).unwrap();
/// assert_eq!(hint.result.category(), Category::FullHouse);
/// assert_eq!(hint.indices, [0, 1, 2, 4, 6]);
/// ```
pub fn best_play(cards: &[Card]) -> Option<Suggestion> {
    let mut best: Option<Suggestion> = None;
    for indices in Combinations::new(cards.len()) {
        let hand = indices.map(|i| cards[i]);
        let result = evaluate_five(&hand);
        match best {
            Some(b) if result.total() <= b.result.total() => {}
            _ => best = Some(Suggestion { indices, result }),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> HandResult {
        evaluate(&parse_cards(s).expect("valid cards")).expect("five cards")
    }

    #[test]
    fn reward_table_matches_categories() {
        let table: Vec<(&str, u32, u32)> =
            Category::ALL.iter().map(|c| (c.name(), c.chips(), c.multiplier())).collect();
        assert_eq!(
            table,
            vec![
                ("High Card", 10, 1),
                ("One Pair", 20, 2),
                ("Two Pair", 35, 2),
                ("Three of a Kind", 45, 3),
                ("Straight", 55, 4),
                ("Flush", 65, 4),
                ("Full House", 80, 4),
                ("Four of a Kind", 110, 7),
                ("Straight Flush", 140, 8),
            ]
        );
    }

    #[test]
    fn totals_increase_with_category() {
        assert!(Category::ALL.windows(2).all(|w| w[0].result().total() < w[1].result().total()));
    }

    #[test]
    fn wrong_card_count_errors() {
        let four = parse_cards("2♠ 5♥ 9♣ J♦").unwrap();
        let err = evaluate(&four).unwrap_err();
        assert_eq!(err, EvalError::WrongCardCount(4));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let six = parse_cards("2♠ 5♥ 9♣ J♦ K♣ A♣").unwrap();
        assert!(matches!(evaluate(&six), Err(EvalError::WrongCardCount(6))));
        assert!(matches!(evaluate(&[]), Err(EvalError::WrongCardCount(0))));
    }

    #[test]
    fn every_category() {
        assert_eq!(eval("9♠ 10♠ J♠ Q♠ K♠").category(), Category::StraightFlush);
        assert_eq!(eval("A♠ A♥ A♦ A♣ K♠").category(), Category::FourOfAKind);
        assert_eq!(eval("3♠ 3♥ 3♦ 8♣ 8♦").category(), Category::FullHouse);
        assert_eq!(eval("2♠ 5♠ 8♠ J♠ K♠").category(), Category::Flush);
        assert_eq!(eval("A♠ 2♥ 3♣ 4♦ 5♠").category(), Category::Straight);
        assert_eq!(eval("Q♠ Q♥ Q♦ 6♣ 10♠").category(), Category::ThreeOfAKind);
        assert_eq!(eval("5♠ 5♥ K♣ K♦ 7♣").category(), Category::TwoPair);
        assert_eq!(eval("4♠ 4♥ 8♣ 9♦ J♣").category(), Category::OnePair);
        assert_eq!(eval("2♠ 5♥ 9♣ J♦ K♣").category(), Category::HighCard);
    }

    #[test]
    fn suited_wheel_is_straight_flush() {
        let r = eval("A♥ 2♥ 3♥ 4♥ 5♥");
        assert_eq!(r.category(), Category::StraightFlush);
        assert_eq!(r.total(), 1120);
    }

    #[test]
    fn ace_does_not_wrap_around() {
        assert_eq!(eval("Q♠ K♥ A♣ 2♦ 3♠").category(), Category::HighCard);
    }

    #[test]
    fn display_formats_reward() {
        assert_eq!(eval("4♠ 4♥ 8♣ 9♦ J♣").to_string(), "One Pair (20 x 2 = 40)");
    }

    #[test]
    fn best_play_needs_five_cards() {
        let four = parse_cards("2♠ 5♥ 9♣ J♦").unwrap();
        assert_eq!(best_play(&four), None);
    }

    #[test]
    fn best_play_on_exactly_five_is_the_hand() {
        let five = parse_cards("2♠ 5♥ 9♣ J♦ K♣").unwrap();
        let s = best_play(&five).unwrap();
        assert_eq!(s.indices, [0, 1, 2, 3, 4]);
        assert_eq!(s.result.category(), Category::HighCard);
    }

    #[test]
    fn best_play_finds_hidden_flush() {
        let hand = parse_cards("2♥ K♠ 7♥ 7♣ 9♥ J♥ 3♦ Q♥").unwrap();
        let s = best_play(&hand).unwrap();
        assert_eq!(s.result.category(), Category::Flush);
        assert_eq!(s.indices, [0, 2, 4, 5, 7]);
    }
}
