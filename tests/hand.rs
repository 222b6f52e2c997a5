//! Hand and partitioning integration tests.

use handrank::{
    Card, DEFAULT_CAPACITY, Hand, HandError, HandOptions, Suit, group_by_rank, order_by_size,
    subhands,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn ranks(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(|card| card.rank).collect()
}

fn random_hand(rng: &mut ChaCha8Rng, capacity: usize) -> Hand {
    let mut hand = Hand::with_capacity(capacity);
    let len = rng.random_range(0..=capacity);
    for _ in 0..len {
        let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
        hand.add(card(suit, rng.random_range(1..=14)));
    }
    hand
}

#[test]
fn add_keeps_cards_sorted_descending() {
    let mut hand = Hand::new();
    hand.add(card(Suit::Hearts, 1));
    assert_eq!(ranks(hand.cards()), [1]);
    hand.add(card(Suit::Hearts, 2));
    hand.add(card(Suit::Clubs, 3));
    hand.add(card(Suit::Hearts, 6));
    hand.add(card(Suit::Spades, 4));

    assert_eq!(ranks(hand.cards()), [6, 4, 3, 2, 1]);
    assert_eq!(hand.len(), 5);
    assert!(hand.is_full());
}

#[test]
fn equal_ranks_keep_insertion_order() {
    let mut hand = Hand::new();
    hand.add(card(Suit::Hearts, 7));
    hand.add(card(Suit::Spades, 9));
    hand.add(card(Suit::Clubs, 7));

    assert_eq!(
        hand.cards(),
        [
            card(Suit::Spades, 9),
            card(Suit::Hearts, 7),
            card(Suit::Clubs, 7),
        ]
    );
}

#[test]
fn default_hand_uses_default_capacity() {
    let hand = Hand::default();
    assert!(hand.is_empty());
    assert_eq!(hand.capacity(), Some(DEFAULT_CAPACITY));
    assert_eq!(hand.options(), HandOptions::default());
}

#[test]
#[should_panic(expected = "full hand (capacity 5)")]
fn add_past_capacity_panics() {
    let mut hand = Hand::new();
    for rank in 1..=6 {
        hand.add(card(Suit::Hearts, rank));
    }
}

#[test]
fn try_add_reports_full_hand() {
    let mut hand = Hand::with_capacity(2);
    hand.try_add(card(Suit::Hearts, 3)).unwrap();
    hand.try_add(card(Suit::Hearts, 8)).unwrap();

    let err = hand.try_add(card(Suit::Hearts, 5)).unwrap_err();
    assert_eq!(err, HandError::Full { capacity: 2 });
    assert_eq!(err.to_string(), "hand is full (capacity 2)");
    assert_eq!(ranks(hand.cards()), [8, 3]);
}

#[test]
fn zero_capacity_hand_is_always_full() {
    let mut hand = Hand::with_capacity(0);
    assert!(hand.is_full());
    assert_eq!(
        hand.try_add(card(Suit::Spades, 1)),
        Err(HandError::Full { capacity: 0 })
    );
}

#[test]
fn unbounded_hand_grows_past_capacity() {
    let options = HandOptions::default().with_capacity(2).with_bounded(false);
    let mut hand = Hand::with_options(options);
    hand.extend((1..=20).map(|rank| card(Suit::Diamonds, rank)));

    assert_eq!(hand.len(), 20);
    assert_eq!(hand.capacity(), None);
    assert!(!hand.is_full());
}

#[test]
fn clear_empties_hand_and_keeps_options() {
    let mut hand = Hand::with_capacity(15);
    hand.extend([card(Suit::Hearts, 4), card(Suit::Clubs, 4)]);
    hand.clear();

    assert!(hand.is_empty());
    assert_eq!(hand.capacity(), Some(15));
}

#[test]
fn display_lists_ranks() {
    let mut hand = Hand::new();
    hand.extend([
        card(Suit::Hearts, 13),
        card(Suit::Hearts, 14),
        card(Suit::Clubs, 14),
    ]);
    assert_eq!(hand.to_string(), " { 14 14 13 } ");
    assert_eq!(Hand::new().to_string(), " { } ");
    assert_eq!(card(Suit::Spades, 12).to_string(), "12♠");
}

#[test]
fn empty_hand_has_no_subhands() {
    assert!(subhands(&Hand::new()).is_empty());
    assert!(group_by_rank(&[]).is_empty());
}

#[test]
fn group_by_rank_follows_scan_order() {
    let mut hand = Hand::new();
    hand.extend([13, 2, 3, 2, 3].map(|rank| card(Suit::Hearts, rank)));

    let groups = group_by_rank(hand.cards());
    let shape: Vec<(u8, usize)> = groups.iter().map(|g| (g.rank(), g.len())).collect();
    assert_eq!(shape, [(13, 1), (3, 2), (2, 2)]);
}

#[test]
fn order_by_size_is_stable_and_ignores_rank() {
    let cards = [9, 5, 5, 3, 2, 2].map(|rank| card(Suit::Clubs, rank));
    let mut groups = group_by_rank(&cards);
    order_by_size(&mut groups);

    let shape: Vec<(u8, usize)> = groups.iter().map(|g| (g.rank(), g.len())).collect();
    assert_eq!(shape, [(5, 2), (2, 2), (9, 1), (3, 1)]);
}

#[test]
fn fifteen_card_hand_partitions_by_group_size() {
    let mut hand = Hand::with_capacity(15);
    hand.extend(
        [1, 9, 3, 11, 5, 1, 7, 3, 6, 1, 1, 3, 13, 14, 5].map(|rank| card(Suit::Hearts, rank)),
    );
    assert!(hand.is_full());

    let shape: Vec<(u8, usize)> = subhands(&hand)
        .iter()
        .map(|g| (g.rank(), g.len()))
        .collect();
    assert_eq!(
        shape,
        [
            (1, 4),
            (3, 3),
            (5, 2),
            (14, 1),
            (13, 1),
            (11, 1),
            (9, 1),
            (7, 1),
            (6, 1),
        ]
    );
    assert_eq!(subhands(&hand)[0].to_string(), " { 1 1 1 1 } ");
}

#[test]
fn random_hands_stay_sorted() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..500 {
        let hand = random_hand(&mut rng, 15);
        assert!(hand.cards().windows(2).all(|w| w[0].rank >= w[1].rank));
    }
}

#[test]
fn random_hands_partition_completely() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..500 {
        let hand = random_hand(&mut rng, 15);
        let groups = subhands(&hand);

        for group in &groups {
            assert!(!group.is_empty());
            assert!(group.cards().iter().all(|c| c.rank == group.rank()));
        }
        assert!(groups.windows(2).all(|w| w[0].len() >= w[1].len()));

        let mut rejoined: Vec<Card> = groups
            .iter()
            .flat_map(|g| g.cards().iter().copied())
            .collect();
        let mut original = hand.cards().to_vec();
        let key = |c: &Card| (c.rank, c.suit as u8);
        rejoined.sort_by_key(key);
        original.sort_by_key(key);
        assert_eq!(rejoined, original);
    }
}
