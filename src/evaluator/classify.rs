use super::analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, HandResult};

/// Each category knows how to recognize itself in an analyzed hand and how
/// to produce the tie-break signature for it.
pub trait CategoryDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool;
    fn result(&self, analysis: &HandAnalysis) -> HandResult;
}

/// Royal Flush: Ace-high straight flush.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suits.is_flush && a.straight.top_rank == Some(Rank::Ace)
    }

    fn result(&self, _a: &HandAnalysis) -> HandResult {
        // All royal flushes tie; the signature is the fixed top card.
        HandResult { category: Category::RoyalFlush, tiebreak: vec![Rank::Ace] }
    }
}

/// Straight Flush: five consecutive ranks, one suit (below Ace-high).
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suits.is_flush && a.straight.is_straight
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        let top = a.straight.top_rank.unwrap_or(Rank::Five);
        HandResult { category: Category::StraightFlush, tiebreak: vec![top] }
    }
}

/// Four of a Kind: quad rank, then the kicker.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.quad().is_some()
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        let mut tiebreak = Vec::with_capacity(2);
        tiebreak.extend(a.groups.quad());
        tiebreak.extend(a.groups.kickers().first().copied());
        HandResult { category: Category::FourOfAKind, tiebreak }
    }
}

/// Full House: trips rank, then the pair rank.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.has_full_house()
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        let mut tiebreak = Vec::with_capacity(2);
        tiebreak.extend(a.groups.trips());
        tiebreak.extend(a.groups.pairs().first().copied());
        HandResult { category: Category::FullHouse, tiebreak }
    }
}

/// Flush: all five ranks, descending.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suits.is_flush
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        HandResult { category: Category::Flush, tiebreak: a.ranks_desc.to_vec() }
    }
}

/// Straight: the top rank alone (Five for the wheel).
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.straight.is_straight
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        let top = a.straight.top_rank.unwrap_or(Rank::Five);
        HandResult { category: Category::Straight, tiebreak: vec![top] }
    }
}

/// Three of a Kind: trips rank, then both kickers.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.trips().is_some() && !a.groups.has_full_house()
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        let mut tiebreak = Vec::with_capacity(3);
        tiebreak.extend(a.groups.trips());
        tiebreak.extend(a.groups.kickers());
        HandResult { category: Category::ThreeOfAKind, tiebreak }
    }
}

/// Two Pair: high pair, low pair, kicker.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.pairs().len() == 2
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        let mut tiebreak = a.groups.pairs();
        tiebreak.extend(a.groups.kickers());
        HandResult { category: Category::TwoPair, tiebreak }
    }
}

/// One Pair: pair rank, then three kickers.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.pairs().len() == 1
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        let mut tiebreak = a.groups.pairs();
        tiebreak.extend(a.groups.kickers());
        HandResult { category: Category::OnePair, tiebreak }
    }
}

/// High Card: all five ranks, descending. Always matches as the fallback.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn matches(&self, _a: &HandAnalysis) -> bool {
        true
    }

    fn result(&self, a: &HandAnalysis) -> HandResult {
        HandResult { category: Category::HighCard, tiebreak: a.ranks_desc.to_vec() }
    }
}

/// Detectors in strict priority order, strongest category first. The first
/// match wins, so later detectors never see hands a stronger one claimed.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
