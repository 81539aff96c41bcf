use holdem_core::cards::{Card, Rank, Suit};
use holdem_core::evaluator::{best_five, evaluate, Category};
use proptest::prelude::*;
use std::cmp::Ordering;

fn rank_from_val(v: u8) -> Rank {
    Rank::ALL[(v - 2) as usize]
}

fn card_from_index(i: u8) -> Card {
    Card::new(Rank::ALL[(i % 13) as usize], Suit::ALL[(i / 13) as usize])
}

/// `n` distinct cards drawn from a 52-card deck.
fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::btree_set(0u8..52, n)
        .prop_map(|set| set.into_iter().map(card_from_index).collect())
}

fn straight_cards(top: u8) -> [Card; 5] {
    let ranks = if top == 5 {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        [
            rank_from_val(top - 4),
            rank_from_val(top - 3),
            rank_from_val(top - 2),
            rank_from_val(top - 1),
            rank_from_val(top),
        ]
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    [
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ]
}

fn ranks_desc(ranks: &[Rank]) -> Vec<Rank> {
    let mut out = ranks.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    for i in 0..a.len().min(b.len()) {
        let ord = a[i].cmp(&b[i]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().map(rank_from_val).collect())
}

proptest! {
    #[test]
    fn five_card_ordering_is_antisymmetric_and_transitive(
        a in distinct_cards(5),
        b in distinct_cards(5),
        c in distinct_cards(5),
    ) {
        let ea = evaluate(&a).unwrap();
        let eb = evaluate(&b).unwrap();
        let ec = evaluate(&c).unwrap();

        // antisymmetric: if a >= b and b >= a then a == b
        if ea >= eb && eb >= ea { prop_assert_eq!(&ea, &eb); }

        // transitive: if a >= b and b >= c then a >= c
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn evaluation_ignores_card_order(cards in distinct_cards(5)) {
        let forward = evaluate(&cards).unwrap();
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(forward, evaluate(&reversed).unwrap());
    }

    #[test]
    fn best_five_of_exactly_five_is_evaluate(cards in distinct_cards(5)) {
        prop_assert_eq!(best_five(&cards).unwrap(), evaluate(&cards).unwrap());
    }

    #[test]
    fn seven_card_best_is_at_least_as_good_as_any_five(cards in distinct_cards(7)) {
        let best7 = best_five(&cards).unwrap();
        // Check against each 5-subset deterministically
        for i in 0..3 { for j in (i+1)..4 { for k in (j+1)..5 { for l in (k+1)..6 { for m in (l+1)..7 {
            let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
            let e5 = evaluate(&five).unwrap();
            prop_assert!(best7 >= e5);
        }}}}}
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate(&straight_cards(top_hi)).unwrap();
        let e_lo = evaluate(&straight_cards(top_lo)).unwrap();
        prop_assert_eq!(e_hi.category, Category::Straight);
        prop_assert_eq!(e_lo.category, Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let e_wheel = evaluate(&straight_cards(5)).unwrap();
        let e_high = evaluate(&straight_cards(top)).unwrap();
        prop_assert_eq!(e_wheel.category, Category::Straight);
        prop_assert_eq!(&e_wheel.tiebreak, &vec![Rank::Five]);
        prop_assert!(e_high > e_wheel);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let suit = Suit::Hearts;
        let hand_a: Vec<Card> = a.iter().map(|&r| Card::new(r, suit)).collect();
        let hand_b: Vec<Card> = b.iter().map(|&r| Card::new(r, suit)).collect();
        let e_a = evaluate(&hand_a).unwrap();
        let e_b = evaluate(&hand_b).unwrap();
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);
        prop_assert_eq!(&e_a.tiebreak, &ranks_desc(&a));

        match compare_rank_lists(&ranks_desc(&a), &ranks_desc(&b)) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}
