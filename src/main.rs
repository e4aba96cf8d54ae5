use std::env;
use std::process::ExitCode;

use stud_poker::core::{Card, Deck, StudError};
use stud_poker::stud::{TestDeck, rank_hands};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => {
            run_shuffled();
            ExitCode::SUCCESS
        }
        2 => match run_test_deck(&args[1]) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("*** ERROR - {e} ***");
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("usage: stud_poker [test-deck-file]");
            ExitCode::FAILURE
        }
    }
}

/// Shuffle a fresh deck, deal six hands, and print the whole session:
/// the shuffled deck, the hands, what's left, and the winning order.
fn run_shuffled() {
    println!("*** POKER HAND ANALYZER ***\n");

    let mut deck = Deck::new();
    deck.shuffle(&mut rand::thread_rng());

    println!("*** Shuffled 52 card deck:");
    print_rows(deck.cards());

    let hands = deck.deal();

    println!("\n*** Here are the six hands...");
    for hand in &hands {
        println!("{hand}");
    }

    println!("\n*** Here is what remains in the deck...");
    print_rows(deck.remainder());

    print_winning_order(hands.to_vec());
}

/// Load a test deck file, then rank and print the winning order.
fn run_test_deck(filename: &str) -> Result<(), StudError> {
    println!("*** P O K E R   H A N D   A N A L Y Z E R ***\n");
    println!("*** USING TEST DECK ***\n");
    println!("*** File: {filename}");

    let deck = TestDeck::load(filename)?;

    println!("\n*** Here are the six hands...");
    for hand in deck.hands() {
        println!("{hand}");
    }

    print_winning_order(deck.into_hands().to_vec());
    Ok(())
}

fn print_winning_order(hands: Vec<stud_poker::core::Hand>) {
    println!("\n--- WINNING HAND ORDER ---");
    for ranked in rank_hands(hands) {
        println!("{ranked}");
    }
}

/// Print cards thirteen to a row, the shape a fresh deck lays out in.
fn print_rows(cards: &[Card]) {
    for row in cards.chunks(13) {
        let line: Vec<String> = row.iter().map(Card::to_string).collect();
        println!("{}", line.join(" "));
    }
}
