use crate::cards::Rank;

/// Whether a hand's ranks form a straight, and if so its top rank.
///
/// The wheel (A-2-3-4-5) is the one place Ace plays low; its top rank is
/// Five, which makes it the weakest straight under signature comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from five ranks, in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        let consecutive = (0..4).all(|i| sorted[i].value() == sorted[i + 1].value() + 1);
        if consecutive {
            return StraightInfo { is_straight: true, top_rank: Some(sorted[0]) };
        }

        let wheel = sorted
            == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
        if wheel {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }

        StraightInfo { is_straight: false, top_rank: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn ace_high_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel_tops_at_five() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn six_high_straight() {
        let info = StraightInfo::detect(&[Rank::Six, Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn broken_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn paired_hand_is_not_a_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn detection_ignores_input_order() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }
}
