use super::rank_groups::RankGroups;
use super::straight::StraightInfo;
use super::suits::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed facts about a 5-card hand, built once and shared by every
/// category detector.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// The hand's ranks sorted descending (flush and high-card signatures).
    pub ranks_desc: [Rank; 5],
    pub groups: RankGroups,
    pub suits: SuitInfo,
    pub straight: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks_desc = [
            cards[0].rank(),
            cards[1].rank(),
            cards[2].rank(),
            cards[3].rank(),
            cards[4].rank(),
        ];
        ranks_desc.sort_by(|a, b| b.cmp(a));

        let groups = RankGroups::new(&ranks_desc);
        let suits = SuitInfo::detect(cards);
        let straight = StraightInfo::detect(&ranks_desc);

        Self { ranks_desc, groups, suits, straight }
    }
}
