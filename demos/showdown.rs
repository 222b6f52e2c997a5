//! Compares a fixed set of hands and prints each result.
//!
//! Run with `RUST_LOG=handrank=debug` to see the rank groups behind each
//! verdict.

use handrank::Suit::{Clubs, Hearts, Spades};
use handrank::{Card, Hand, Suit, compare_hands};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn hand(capacity: usize, cards: &[(u8, Suit)]) -> Hand {
    let mut hand = Hand::with_capacity(capacity);
    hand.extend(cards.iter().map(|&(rank, suit)| Card::new(suit, rank)));
    hand
}

fn print_showdown(name: &str, first: &Hand, second: &Hand) {
    println!("{name}");
    println!("  first: {first}");
    println!("  second:{second}");
    println!("  {}\n", compare_hands(first, second));
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "handrank=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let hand1 = hand(5, &[(1, Hearts), (2, Hearts), (3, Clubs), (6, Hearts), (4, Spades)]);
    let hand2 = hand(5, &[(13, Hearts), (2, Hearts), (3, Clubs), (2, Hearts), (3, Spades)]);
    let hand4 = hand(5, &[(13, Hearts), (14, Hearts), (14, Clubs), (14, Hearts), (14, Spades)]);
    let hand5 = hand(5, &[(1, Hearts), (2, Hearts), (3, Clubs), (4, Hearts), (5, Spades)]);

    print_showdown("singles vs two pair", &hand1, &hand2);
    print_showdown("four of a kind vs singles", &hand4, &hand5);
    print_showdown("four of a kind vs itself", &hand4, &hand4);
    print_showdown("six high vs five high", &hand1, &hand5);

    let hand6 = hand(
        15,
        &[
            (1, Hearts),
            (9, Hearts),
            (3, Clubs),
            (11, Hearts),
            (5, Spades),
            (1, Hearts),
            (7, Hearts),
            (3, Clubs),
            (6, Hearts),
            (1, Spades),
            (1, Hearts),
            (3, Hearts),
            (13, Clubs),
            (14, Hearts),
            (5, Spades),
        ],
    );
    let hand7 = hand(
        15,
        &[1, 2, 3, 4, 5, 1, 2, 3, 4, 5, 1, 2, 3, 4, 5].map(|rank| (rank, Hearts)),
    );

    print_showdown("fifteen cards", &hand6, &hand7);
}
