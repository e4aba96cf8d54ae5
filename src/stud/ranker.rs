use crate::core::{Category, Classifiable, Hand, tie_break_key};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// A hand bundled with its classification and tie-break key. This is
/// the unit a deal's ranking orders.
///
/// Equality and ordering are hand strength only: two hands with the
/// same category and key are equal no matter which suits carry them.
#[derive(Debug, Clone, Copy)]
pub struct RankedHand {
    hand: Hand,
    category: Category,
    key: u32,
}

impl RankedHand {
    /// Classify a hand and compute its tie-break key. Both are pure
    /// functions of the cards, computed once and carried from there.
    pub fn new(hand: Hand) -> RankedHand {
        let category = hand.classify();
        let key = tie_break_key(&hand, category);
        RankedHand {
            hand,
            category,
            key,
        }
    }

    /// The cards, in deal order.
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The one category this hand classifies into.
    pub const fn category(&self) -> Category {
        self.category
    }
}

impl From<Hand> for RankedHand {
    fn from(hand: Hand) -> RankedHand {
        RankedHand::new(hand)
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.key == other.key
    }
}

impl Eq for RankedHand {}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greater is the stronger hand: categories decide first, the
/// within-category key only breaks ties between equal categories.
impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// Ranked hands display the way the analyzer prints a result line:
/// the cards, then the category name.
impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.hand, self.category)
    }
}

/// Rank a deal's hands best first.
///
/// One stable sort orders the whole batch: category strength decides
/// across categories, the tie-break key inside one. Hands that are
/// true ties (same category, same key) keep their deal order.
///
/// # Examples
///
/// ```
/// use stud_poker::core::Category;
/// use stud_poker::stud::rank_hands;
///
/// let ranked = rank_hands(vec![
///     "9D 9C 9H 5S 5D".parse().unwrap(),
///     "7D 7C 7H 7S 2D".parse().unwrap(),
/// ]);
/// assert_eq!(Category::FourOfAKind, ranked[0].category());
/// assert_eq!(Category::FullHouse, ranked[1].category());
/// ```
pub fn rank_hands(hands: Vec<Hand>) -> Vec<RankedHand> {
    let mut ranked: Vec<RankedHand> = hands.into_iter().map(RankedHand::new).collect();
    ranked.sort_by(|a, b| b.cmp(a));
    debug!(hands = ranked.len(), "ranked deal");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn test_four_of_a_kind_beats_full_house() {
        let ranked = rank_hands(vec![hand("7D 7C 7H 7S 2D"), hand("9D 9C 9H 5S 5D")]);
        assert_eq!(Category::FourOfAKind, ranked[0].category());
        assert_eq!(Category::FullHouse, ranked[1].category());
    }

    #[test]
    fn test_six_hands_one_per_category_span() {
        // One hand from each of six different categories, fed in
        // scrambled order with no card repeated anywhere in the deal;
        // the ranking must restore the category table's order.
        let ranked = rank_hands(vec![
            hand("KD QC 8H 4S 3D"),  // high card
            hand("10H JH QH KH AH"), // royal straight flush
            hand("AD AC JD 8C 10S"), // pair
            hand("7D 7C 7H 7S 2D"),  // four of a kind
            hand("2C 3C 4D 5C 6C"),  // straight
            hand("9D 9C 9H 5S 5D"),  // full house
        ]);
        let strengths: Vec<u8> = ranked.iter().map(|r| r.category().strength()).collect();
        assert_eq!(vec![1, 3, 4, 6, 9, 10], strengths);
    }

    #[test]
    fn test_all_ten_categories_rank_by_the_table() {
        let ranked = rank_hands(vec![
            hand("AD AC 9D 8C 10S"),  // pair
            hand("AD 8D 9D 10D 5D"),  // flush
            hand("2C 2S 2H 5S 6D"),   // three of a kind
            hand("10H JH QH KH AH"),  // royal straight flush
            hand("AD 8H 9C 10C 5C"),  // high card
            hand("9D 9C 9H 5S 5D"),   // full house
            hand("5C 6C 7C 8C 9C"),   // straight flush
            hand("AH AS 9H 9S 10C"),  // two pair
            hand("7D 7C 7H 7S 2D"),   // four of a kind
            hand("2C 3S 4H 5S 6H"),   // straight
        ]);
        let strengths: Vec<u8> = ranked.iter().map(|r| r.category().strength()).collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10], strengths);
    }

    #[test]
    fn test_pair_kickers_break_the_tie() {
        // Same pair of aces, same 9 and 5; the 3 kicker beats the 2.
        let weaker = hand("AD AC 9H 5S 2D");
        let stronger = hand("AH AS 9D 5C 3D");
        let ranked = rank_hands(vec![weaker, stronger]);
        assert_eq!(&stronger, ranked[0].hand());
        assert_eq!(&weaker, ranked[1].hand());
    }

    #[test]
    fn test_two_pair_lower_pair_breaks_the_tie() {
        let weaker = hand("AD AC 8H 8S KD");
        let stronger = hand("AH AS 9D 9C 2D");
        let ranked = rank_hands(vec![weaker, stronger]);
        assert_eq!(&stronger, ranked[0].hand());
    }

    #[test]
    fn test_three_way_straight_tie_is_consistent() {
        // Three straights of distinct heights arrive worst first; the
        // order must come out fully inverted, not just pairwise fixed.
        let ranked = rank_hands(vec![
            hand("AD 2C 3H 4S 5D"),
            hand("2D 3C 4H 5S 6C"),
            hand("3D 4C 5H 6S 7C"),
        ]);
        assert_eq!(&hand("3D 4C 5H 6S 7C"), ranked[0].hand());
        assert_eq!(&hand("2D 3C 4H 5S 6C"), ranked[1].hand());
        assert_eq!(&hand("AD 2C 3H 4S 5D"), ranked[2].hand());
    }

    #[test]
    fn test_true_ties_keep_deal_order() {
        // Identical strength, different suits: stable sort keeps the
        // deal order.
        let first = hand("AD AC 9H 5S 2D");
        let second = hand("AH AS 9D 5C 2H");
        let ranked = rank_hands(vec![first, second]);
        assert_eq!(&first, ranked[0].hand());
        assert_eq!(&second, ranked[1].hand());
    }

    #[test]
    fn test_ranked_hand_equality_ignores_suits() {
        assert_eq!(
            RankedHand::new(hand("AD AC 9H 5S 2D")),
            RankedHand::new(hand("AH AS 9D 5C 2H"))
        );
        assert_ne!(
            RankedHand::new(hand("AD AC 9H 5S 2D")),
            RankedHand::new(hand("AH AS 9D 5C 3H"))
        );
    }

    #[test]
    fn test_display_line() {
        let ranked = RankedHand::new(hand("10H JH QH KH AH"));
        assert_eq!(
            "10H JH QH KH AH - Royal Straight Flush",
            ranked.to_string()
        );
    }

    #[test]
    fn test_empty_batch() {
        assert!(rank_hands(Vec::new()).is_empty());
    }
}
