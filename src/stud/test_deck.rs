use crate::core::{Card, Deck, Hand, Result, StudError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A six-hand deal read from a test deck file instead of a shuffled
/// deck: six lines, five comma-separated card tokens each.
///
/// Loading is where the whole-deal preconditions are enforced. Every
/// token must parse, every hand must hold five cards, and no card may
/// appear twice anywhere in the deal; the classification and ranking
/// code downstream assumes all of that. The first violation aborts
/// the load with nothing produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDeck {
    hands: [Hand; Deck::HANDS],
}

impl TestDeck {
    /// Read a test deck from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<TestDeck> {
        let path = path.as_ref();
        debug!(?path, "loading test deck");
        let input = fs::read_to_string(path)?;
        TestDeck::parse(&input)
    }

    /// Parse a test deck from its text form.
    ///
    /// Whitespace inside a token is stripped before parsing, so
    /// `10 H` and ` QS` both read naturally. Blank lines are skipped;
    /// lines past the sixth are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use stud_poker::stud::TestDeck;
    ///
    /// let deck = TestDeck::parse(
    ///     "10H,JH,QH,KH,AH\n\
    ///      7D,7C,7H,7S,2D\n\
    ///      9D,9C,9H,5S,5D\n\
    ///      2C,3C,4D,5C,6C\n\
    ///      AD,AC,JD,8C,10S\n\
    ///      KD,QC,8H,4S,3D\n",
    /// )
    /// .unwrap();
    /// assert_eq!(6, deck.hands().len());
    /// ```
    pub fn parse(input: &str) -> Result<TestDeck> {
        let mut hands: Vec<Hand> = Vec::with_capacity(Deck::HANDS);
        let mut seen: HashSet<Card> = HashSet::with_capacity(Deck::HANDS * Hand::SIZE);

        for line in input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .take(Deck::HANDS)
        {
            let mut cards: Vec<Card> = Vec::with_capacity(Hand::SIZE);
            for token in line.split(',') {
                let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
                let card = Card::from_token(&token)?;
                if !seen.insert(card) {
                    return Err(StudError::DuplicateCard(card));
                }
                cards.push(card);
            }
            let cards: [Card; Hand::SIZE] = cards
                .try_into()
                .map_err(|v: Vec<Card>| StudError::InvalidHandSize(v.len()))?;
            hands.push(Hand::new(cards));
        }

        let hands: [Hand; Deck::HANDS] = hands
            .try_into()
            .map_err(|v: Vec<Hand>| StudError::InvalidHandCount(v.len()))?;
        debug!("loaded test deck");
        Ok(TestDeck { hands })
    }

    /// The six hands, in file order.
    pub const fn hands(&self) -> &[Hand; Deck::HANDS] {
        &self.hands
    }

    /// Take the hands for ranking.
    pub fn into_hands(self) -> [Hand; Deck::HANDS] {
        self.hands
    }
}
