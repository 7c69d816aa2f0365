//! Error classification shared by every fallible core operation.
//!
//! Each module keeps its own error enum; [`ErrorKind`] groups them into the
//! three recoverable classes an adapter has to distinguish. No failure ever
//! leaves the core partially mutated.

pub use crate::config::ConfigError;
pub use crate::deck::DeckError;
pub use crate::evaluator::EvalError;
pub use crate::hand::SelectionError;
pub use crate::round::ActionError;

/// Coarse class of a core failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed caller input: wrong count, duplicate or out-of-range indices.
    InvalidArgument,
    /// A draw asked for more cards than the deck holds.
    InsufficientCards,
    /// The play or discard budget of the round is used up.
    ExhaustedResource,
}
