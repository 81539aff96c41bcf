use holdem_core::cards::{parse_cards, Card, Rank, Suit};
use holdem_core::evaluator::{best_five, evaluate, Category, EvalError};

#[test]
fn category_ladder_is_strictly_ordered() {
    let ladder = [
        ("Ah Kh Qh Jh Th", Category::RoyalFlush),
        ("9s 8s 7s 6s 5s", Category::StraightFlush),
        ("9c 9d 9h 9s Ac", Category::FourOfAKind),
        ("3c 3d 3h Js Jc", Category::FullHouse),
        ("Kh Th 8h 6h 3h", Category::Flush),
        // The wheel is the weakest straight and still beats any trips.
        ("Ac 5c 4d 3h 2s", Category::Straight),
        ("Qc Qd Qh Ts 2c", Category::ThreeOfAKind),
        ("Jc Jd 9c 9h 2s", Category::TwoPair),
        ("Ah Ad Ts 9c 2d", Category::OnePair),
        ("Ah Kd 7s 5c 2d", Category::HighCard),
    ];
    let results: Vec<_> = ladder
        .iter()
        .map(|(s, want)| {
            let e = evaluate(&parse_cards(s).unwrap()).unwrap();
            assert_eq!(e.category, *want, "{s}");
            e
        })
        .collect();
    for pair in results.windows(2) {
        assert!(pair[0] > pair[1], "{} should beat {}", pair[0].category, pair[1].category);
    }
}

#[test]
fn category_royal_flush() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Hearts),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::RoyalFlush));
    assert_eq!(e.tiebreak, vec![Rank::Ace]);
}

#[test]
fn category_straight_flush() {
    let xs = [
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Eight, Suit::Spades),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Six, Suit::Spades),
        Card::new(Rank::Five, Suit::Spades),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::StraightFlush));
    assert_eq!(e.tiebreak, vec![Rank::Nine]);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::FourOfAKind));
    assert_eq!(e.tiebreak, vec![Rank::Nine, Rank::Ace]);
}

#[test]
fn category_full_house() {
    let xs = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Jack, Suit::Clubs),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::FullHouse));
    assert_eq!(e.tiebreak, vec![Rank::Three, Rank::Jack]);
}

#[test]
fn category_flush() {
    let xs = [
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::Flush));
    assert_eq!(e.tiebreak, vec![Rank::King, Rank::Ten, Rank::Eight, Rank::Six, Rank::Three]);
}

#[test]
fn category_straight_counts_the_wheel() {
    let xs = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Four, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Two, Suit::Spades),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::Straight));
    // The ace plays low, so the wheel tops out at five.
    assert_eq!(e.tiebreak, vec![Rank::Five]);
}

#[test]
fn category_three_of_a_kind() {
    let xs = [
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::ThreeOfAKind));
    assert_eq!(e.tiebreak, vec![Rank::Queen, Rank::Ten, Rank::Two]);
}

#[test]
fn category_two_pair() {
    let xs = [
        Card::new(Rank::Jack, Suit::Clubs),
        Card::new(Rank::Jack, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Two, Suit::Spades),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::TwoPair));
    assert_eq!(e.tiebreak, vec![Rank::Jack, Rank::Nine, Rank::Two]);
}

#[test]
fn category_one_pair() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::OnePair));
    assert_eq!(e.tiebreak, vec![Rank::Ace, Rank::Ten, Rank::Nine, Rank::Two]);
}

#[test]
fn category_high_card() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let e = evaluate(&xs).unwrap();
    assert!(matches!(e.category, Category::HighCard));
    assert_eq!(e.tiebreak, vec![Rank::Ace, Rank::King, Rank::Seven, Rank::Five, Rank::Two]);
}

#[test]
fn kicker_decides_between_equal_pairs() {
    let king_kicker = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let queen_kicker = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let hi = evaluate(&king_kicker).unwrap();
    let lo = evaluate(&queen_kicker).unwrap();
    assert_eq!(hi.category, lo.category);
    assert!(hi > lo);
}

#[test]
fn best_five_finds_the_flush_buried_in_seven() {
    let xs = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::King, Suit::Diamonds),
    ];
    let e = best_five(&xs).unwrap();
    // The clubs flush outranks the pair of aces.
    assert!(matches!(e.category, Category::Flush));
    assert_eq!(e.tiebreak, vec![Rank::Ace, Rank::Queen, Rank::Nine, Rank::Seven, Rank::Two]);
}

#[test]
fn wrong_card_counts_are_rejected() {
    let four = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(evaluate(&four), Err(EvalError::WrongCardCount(4)));
    assert_eq!(best_five(&four), Err(EvalError::WrongCardCount(4)));
}

#[test]
fn duplicate_cards_are_rejected() {
    let dup = Card::new(Rank::Ace, Suit::Hearts);
    let xs = [
        dup,
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        dup,
    ];
    assert_eq!(evaluate(&xs), Err(EvalError::DuplicateCard(dup)));
}
