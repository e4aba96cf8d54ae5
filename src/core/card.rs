use crate::core::errors::StudError;
use std::fmt;

/// Card value, or face.
///
/// The discriminant is the bit position used by the rank and
/// tie-break code, so `Two` is 0 and `Ace` is 12. Use
/// [`Value::to_numeric`] for the conventional 2-14 scale.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// 10
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values, in ascending order.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// How many different values are there?
    pub const COUNT: usize = 13;

    /// Get all the values, weakest first.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Parse a face substring of a card token.
    ///
    /// Digit faces parse numerically, `10` being the only
    /// two-character face. Returns `None` for anything that isn't a
    /// face of a standard deck (`1`, `0`, `T`, lowercase letters, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use stud_poker::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_face("10"));
    /// assert_eq!(Some(Value::Ace), Value::from_face("A"));
    /// assert_eq!(None, Value::from_face("T"));
    /// ```
    pub fn from_face(face: &str) -> Option<Value> {
        match face {
            "2" => Some(Value::Two),
            "3" => Some(Value::Three),
            "4" => Some(Value::Four),
            "5" => Some(Value::Five),
            "6" => Some(Value::Six),
            "7" => Some(Value::Seven),
            "8" => Some(Value::Eight),
            "9" => Some(Value::Nine),
            "10" => Some(Value::Ten),
            "J" => Some(Value::Jack),
            "Q" => Some(Value::Queen),
            "K" => Some(Value::King),
            "A" => Some(Value::Ace),
            _ => None,
        }
    }

    /// The face substring for this value (`"10"`, `"J"`, ...).
    pub const fn to_face(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }

    /// The conventional numeric value: 2 through 10 for the digit
    /// faces, then J = 11, Q = 12, K = 13, A = 14.
    pub const fn to_numeric(self) -> u8 {
        self as u8 + 2
    }

    /// How card-values away is this value from the other?
    pub fn gap(self, other: Value) -> u8 {
        let min = (self as u8).min(other as u8);
        let max = (self as u8).max(other as u8);
        max - min
    }
}

/// Enum for the four different suits.
///
/// The discriminant order is the layout order of the unshuffled deck,
/// diamonds first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Diamonds
    Diamond = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. In the deck layout order.
const SUITS: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];

impl Suit {
    /// How many different suits are there?
    pub const COUNT: usize = 4;

    /// Provide all the suits, in deck layout order.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Translate a suit character into a `Suit`. Only the uppercase
    /// characters `D`, `C`, `H` and `S` are accepted.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// The uppercase character for this suit.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// The main struct of this library. This is a carrier for `Suit` and `Value`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    ///
    /// # Examples
    ///
    /// ```
    /// use stud_poker::core::{Card, Suit, Value};
    ///
    /// let c = Card::new(Value::Ace, Suit::Spade);
    /// assert_eq!("AS", c.to_string());
    /// ```
    pub const fn new(value: Value, suit: Suit) -> Card {
        Card { value, suit }
    }

    /// Parse a card token: a face substring followed by exactly one
    /// uppercase suit character, for a total length of two or three
    /// (`10` is the only two-character face).
    ///
    /// # Errors
    ///
    /// * [`StudError::InvalidCardLength`] when the token is empty, a
    ///   single character, or longer than three characters.
    /// * [`StudError::InvalidSuit`] when the trailing character is not
    ///   one of the uppercase suit characters.
    /// * [`StudError::InvalidFace`] when the leading substring is not a
    ///   face of a standard deck.
    ///
    /// # Examples
    ///
    /// ```
    /// use stud_poker::core::{Card, Suit, Value};
    ///
    /// let c = Card::from_token("10H").unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Heart), c);
    ///
    /// assert!(Card::from_token("10h").is_err());
    /// assert!(Card::from_token("S").is_err());
    /// ```
    pub fn from_token(token: &str) -> Result<Card, StudError> {
        // Byte length is character length for every well formed token;
        // anything non-ASCII can't name a card anyway.
        if !token.is_ascii() || token.len() < 2 || token.len() > 3 {
            return Err(StudError::InvalidCardLength(token.to_string()));
        }
        let (face, suit_char) = token.split_at(token.len() - 1);
        let suit = suit_char
            .chars()
            .next()
            .and_then(Suit::from_char)
            .ok_or_else(|| StudError::InvalidSuit(token.to_string()))?;
        let value =
            Value::from_face(face).ok_or_else(|| StudError::InvalidFace(token.to_string()))?;
        Ok(Card { value, suit })
    }
}

/// Cards display as face then suit, the token format they parse from.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_face(), self.suit.to_char())
    }
}
