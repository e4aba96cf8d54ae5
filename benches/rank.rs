use criterion::{Criterion, criterion_group, criterion_main};

use stud_poker::core::{Classifiable, Deck, Hand};
use stud_poker::stud::rank_hands;

/// Fixed six-hand deal covering a spread of categories.
fn make_hands() -> Vec<Hand> {
    [
        "10H JH QH KH AH",
        "7D 7C 7H 7S 2D",
        "9D 9C 9H 5S 5D",
        "2C 3C 4D 5C 6C",
        "AD AC JD 8C 10S",
        "KD QC 8H 4S 3D",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

fn bench_classify(c: &mut Criterion) {
    let hands = make_hands();

    c.bench_function("classify_six_hands", |b| {
        b.iter(|| {
            for hand in &hands {
                std::hint::black_box(hand.classify());
            }
        });
    });
}

fn bench_rank_deal(c: &mut Criterion) {
    let hands = make_hands();

    c.bench_function("rank_six_hands", |b| {
        b.iter(|| std::hint::black_box(rank_hands(hands.clone())));
    });
}

fn bench_classify_every_deal_slice(c: &mut Criterion) {
    // Every hand a fresh (unshuffled) deck deals; flushes and
    // straight flushes all the way down.
    let deck = Deck::new();

    c.bench_function("classify_fresh_deal", |b| {
        b.iter(|| {
            for hand in deck.deal() {
                std::hint::black_box(hand.classify());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_rank_deal,
    bench_classify_every_deal_slice,
);
criterion_main!(benches);
