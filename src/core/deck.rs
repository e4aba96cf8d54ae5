use crate::core::card::{Card, Suit, Value};
use crate::core::hand::Hand;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// How many cards a six-hand deal consumes.
const DEALT: usize = Hand::SIZE * Deck::HANDS;

/// The standard 52 card deck. Fresh decks come ordered suit by suit
/// (diamonds, clubs, hearts, spades), each suit running two through
/// ace; shuffle before dealing for a real game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// How many hands a deal produces.
    pub const HANDS: usize = 6;

    /// Create an ordered deck.
    ///
    /// # Examples
    ///
    /// ```
    /// use stud_poker::core::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(52, deck.cards().len());
    /// ```
    pub fn new() -> Deck {
        let mut cards = Vec::with_capacity(Suit::COUNT * Value::COUNT);
        for suit in Suit::suits() {
            for value in Value::values() {
                cards.push(Card::new(value, suit));
            }
        }
        Deck { cards }
    }

    /// Every card currently in deck order. The first thirty are what
    /// a deal consumes.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
        debug!("shuffled deck");
    }

    /// Deal six hands of five consecutive cards off the top of the
    /// deck. The deck itself is unchanged, so the same deal can be
    /// read again (for printing the remainder, say).
    pub fn deal(&self) -> [Hand; Deck::HANDS] {
        let hands = std::array::from_fn(|i| {
            Hand::new(std::array::from_fn(|j| self.cards[i * Hand::SIZE + j]))
        });
        debug!(hands = Deck::HANDS, "dealt hands off the top");
        hands
    }

    /// The twenty-two cards a deal leaves behind.
    pub fn remainder(&self) -> &[Card] {
        &self.cards[DEALT..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}
