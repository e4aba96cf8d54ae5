//! Ranking a six-hand five card stud deal, and loading the deal from
//! a test deck file.

/// Module for ranking a deal best first.
mod ranker;
/// Export `RankedHand` and the ranking entry point.
pub use self::ranker::{RankedHand, rank_hands};

/// Module for test deck files.
mod test_deck;
/// Export `TestDeck`.
pub use self::test_deck::TestDeck;
