pub(crate) mod analysis;
pub(crate) mod classify;
pub(crate) mod combinations;
pub(crate) mod rank_groups;
pub(crate) mod straight;
pub(crate) mod suits;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use analysis::HandAnalysis;
use classify::DETECTORS;
use combinations::FiveOfN;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Conventional English name, e.g. "Full House".
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluated strength of a five-card hand.
///
/// Ordering is the showdown contract: categories compare by ordinal, and
/// hands in the same category compare by their tie-break ranks
/// lexicographically. Equal results mean an exact tie (a split pot).
/// The derived `Ord` gives exactly that because `category` precedes
/// `tiebreak`, and two signatures in one category always have equal length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    pub tiebreak: Vec<Rank>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("wrong number of cards: {0}")]
    WrongCardCount(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Evaluate exactly five distinct cards.
///
/// ```
/// use holdem_core::cards::parse_cards;
/// use holdem_core::evaluator::{evaluate, Category};
///
/// let royal = parse_cards("Ah Kh Qh Jh Th").unwrap();
/// let result = evaluate(&royal).unwrap();
/// assert_eq!(result.category, Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandResult, EvalError> {
    let five: [Card; 5] = cards
        .try_into()
        .map_err(|_| EvalError::WrongCardCount(cards.len()))?;
    if let Some(dup) = first_duplicate(cards) {
        return Err(EvalError::DuplicateCard(dup));
    }
    Ok(classify_five(&five))
}

/// Find the best five-card hand among five, six, or seven distinct cards.
/// Checks every five-card subset and keeps the strongest.
///
/// ```
/// use holdem_core::cards::parse_cards;
/// use holdem_core::evaluator::{best_five, Category};
///
/// let seven = parse_cards("As Ah 2c 2d 2h 9s 4c").unwrap();
/// let result = best_five(&seven).unwrap();
/// assert_eq!(result.category, Category::FullHouse);
/// ```
pub fn best_five(cards: &[Card]) -> Result<HandResult, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::WrongCardCount(cards.len()));
    }
    if let Some(dup) = first_duplicate(cards) {
        return Err(EvalError::DuplicateCard(dup));
    }

    let mut best: Option<HandResult> = None;
    for indices in FiveOfN::new(cards.len()) {
        let hand = [
            cards[indices[0]],
            cards[indices[1]],
            cards[indices[2]],
            cards[indices[3]],
            cards[indices[4]],
        ];
        let result = classify_five(&hand);
        if best.as_ref().map_or(true, |b| result > *b) {
            best = Some(result);
        }
    }

    Ok(best.unwrap_or_else(|| {
        classify_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]])
    }))
}

/// Classify five cards; inputs are assumed distinct.
fn classify_five(cards: &[Card; 5]) -> HandResult {
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.matches(&analysis) {
            return detector.result(&analysis);
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("high card detector should always match")
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Some(*card);
        }
    }
    None
}
