use thiserror::Error;

use crate::core::card::Card;

/// Errors from parsing card tokens and assembling deals.
///
/// A single bad token invalidates the whole deal, so none of these are
/// recoverable mid-batch; callers abort and surface the error.
#[derive(Error, Debug)]
pub enum StudError {
    #[error("card token must be 2 or 3 characters: {0:?}")]
    InvalidCardLength(String),

    #[error("card suit must be one of the uppercase characters D, C, H, S: {0:?}")]
    InvalidSuit(String),

    #[error("unknown card face: {0:?}")]
    InvalidFace(String),

    #[error("a hand is exactly 5 cards, found {0}")]
    InvalidHandSize(usize),

    #[error("a deal is exactly 6 hands, found {0}")]
    InvalidHandCount(usize),

    #[error("duplicate card in deal: {0}")]
    DuplicateCard(Card),

    #[error("unable to read test deck: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for deal loading operations.
pub type Result<T> = std::result::Result<T, StudError>;
