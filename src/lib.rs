//! # stud_poker: a five card stud hand analyzer
//!
//! A library to classify five card poker hands into the ten standard
//! categories and to rank a six-hand deal best first, with
//! category-specific tie breaks. The deal can come off a shuffled
//! deck or out of a test deck file.
//!
//! ## Modules
//!
//! - [`core`] - cards, hands, the deck, classification, comparison
//! - [`stud`] - ranking a deal and loading test decks
//!
//! ## Quick Start
//!
//! ```
//! use stud_poker::core::{Category, Classifiable, Hand};
//! use stud_poker::stud::rank_hands;
//!
//! let quads: Hand = "7D 7C 7H 7S 2D".parse().unwrap();
//! let boat: Hand = "9D 9C 9H 5S 5D".parse().unwrap();
//! assert_eq!(Category::FourOfAKind, quads.classify());
//!
//! // Four of a kind outranks the full house.
//! let ranked = rank_hands(vec![boat, quads]);
//! assert_eq!(Category::FourOfAKind, ranked[0].category());
//! ```
pub mod core;
pub mod stud;
