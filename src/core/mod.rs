//! Core types for five card stud analysis: cards, hands, the deck,
//! hand classification, and same-category comparison.

/// Module for all things card related.
mod card;
/// Export `Card`, `Suit`, and `Value`.
pub use self::card::{Card, Suit, Value};

/// Module for the errors a deal can run into.
mod errors;
/// Export the error and result types.
pub use self::errors::{Result, StudError};

/// Module for the five card hand.
mod hand;
/// Export `Hand`.
pub use self::hand::Hand;

/// Module for hand classification.
mod rank;
/// Export `Category`, the `Classifiable` trait, and `ValueCounts`.
pub use self::rank::{Category, Classifiable, ValueCounts};

/// Module for the within-category tie-break comparison.
mod compare;
/// Export the comparator and its key function.
pub use self::compare::{compare_same_category, tie_break_key};

/// Module for the deck.
mod deck;
/// Export `Deck`.
pub use self::deck::Deck;
