use crate::core::hand::Hand;
use crate::core::rank::{Category, Classifiable, rank_straight};
use std::cmp::Ordering;

/// Compute the tie-break key for a hand already classified into
/// `category`. Keys only order hands within one category: a higher
/// key is the stronger hand, an equal key is a true tie.
///
/// The packing puts the category's group values (the pair, the trip,
/// the quad, both pairs) in the high bits and the kicker set in the
/// low thirteen, so a plain integer comparison walks the comparison
/// chain each category calls for: group value first, then kickers
/// highest first.
///
/// Straight-shaped categories use the run height instead, which makes
/// the wheel the weakest straight rather than an ace-high one.
pub fn tie_break_key(hand: &Hand, category: Category) -> u32 {
    let counts = hand.value_counts();
    let value_set = hand
        .iter()
        .fold(0u32, |set, c| set | (1 << c.value as u32));

    match category {
        // Degenerate: every royal is equal to every other.
        Category::RoyalStraightFlush => 0,
        Category::StraightFlush | Category::Straight => rank_straight(value_set).unwrap_or(0),
        Category::Flush | Category::HighCard => value_set,
        Category::FourOfAKind => (counts.bits_with_count(4) << 13) | counts.bits_with_count(1),
        Category::FullHouse => (counts.bits_with_count(3) << 13) | counts.bits_with_count(2),
        Category::ThreeOfAKind => (counts.bits_with_count(3) << 13) | counts.bits_with_count(1),
        Category::TwoPair | Category::Pair => {
            (counts.bits_with_count(2) << 13) | counts.bits_with_count(1)
        }
    }
}

/// Order two hands of the same category. `Greater` means `a` is the
/// stronger hand; `Equal` is a true tie and callers keep their
/// existing order.
///
/// Cross-category ordering is the ranker's job (category strength
/// decides it outright) and never reaches this comparison.
pub fn compare_same_category(a: &Hand, b: &Hand, category: Category) -> Ordering {
    tie_break_key(a, category).cmp(&tie_break_key(b, category))
}
