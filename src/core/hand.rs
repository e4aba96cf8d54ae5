use crate::core::card::Card;
use crate::core::errors::StudError;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// A hand of five card stud: exactly five cards, kept in the order
/// they were dealt. The fixed-size array makes a wrong-sized hand
/// impossible to construct rather than something to check at runtime.
///
/// A hand does not police duplicates; that is the deal loader's job,
/// since a duplicate can span two hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Create a hand from five cards, preserving their order.
    pub const fn new(cards: [Card; 5]) -> Hand {
        Hand { cards }
    }

    /// The cards as dealt.
    pub const fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Iterate the cards by value, in deal order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

/// Parse a hand from five whitespace-separated card tokens.
///
/// # Examples
///
/// ```
/// use stud_poker::core::Hand;
///
/// let hand: Hand = "10H JH QH KH AH".parse().unwrap();
/// assert_eq!("10H JH QH KH AH", hand.to_string());
/// ```
impl FromStr for Hand {
    type Err = StudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(Card::from_token)
            .collect::<Result<Vec<Card>, StudError>>()?;
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|v: Vec<Card>| StudError::InvalidHandSize(v.len()))?;
        Ok(Hand::new(cards))
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = Card;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter().copied()
    }
}

/// Hands display as their five tokens separated by single spaces.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
