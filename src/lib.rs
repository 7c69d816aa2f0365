//! balatro-rs: a simplified poker-hand scoring game
//!
//! Goals:
//! - Score any five cards into a fixed chips × multiplier table
//! - A small round state machine: hand size, play and discard budgets, deck depletion
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a hand
//! ```
//! use balatro_rs::cards::parse_cards;
//! use balatro_rs::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("K♠ K♥ K♦ 4♣ 4♠").unwrap();
//! let result = evaluate(&cards).unwrap();
//! assert_eq!(result.category(), Category::FullHouse);
//! assert_eq!(result.total(), 320);
//! ```
//!
//! ## Quick start: play a round
//! ```
//! use balatro_rs::cards::parse_cards;
//! use balatro_rs::config::RoundConfig;
//! use balatro_rs::deck::Deck;
//! use balatro_rs::round::Round;
//!
//! let deck = Deck::stacked(parse_cards("2♠ 3♠ 4♠ 5♠ 6♠ 7♥ 8♦ 9♣ 10♣").unwrap()).unwrap();
//! let mut round = Round::with_deck(RoundConfig::default(), deck).unwrap();
//! round.start();
//! let result = round.play(&[0, 1, 2, 3, 4]).unwrap();
//! assert_eq!(result.total(), 1120);
//! assert_eq!(round.hand().len(), 4);
//! ```
//!
//! ## Front ends
//! ```sh
//! cargo run --bin balatro-rs            # full-screen TUI
//! cargo run --bin balatro-rs -- --text  # line mode
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod hand;
pub mod round;
pub mod text;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
