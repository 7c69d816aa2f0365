use crate::cards::Rank;

/// Whether five ranks form a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

// A-2-3-4-5 in ascending order: the Ace sorts high but plays low.
const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

impl StraightInfo {
    /// Detect a straight from five ranks sorted ascending.
    pub fn detect(sorted: &[Rank; 5]) -> Self {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "ranks must be sorted");
        let consecutive = sorted.windows(2).all(|w| w[1].order() == w[0].order() + 1);
        StraightInfo { is_straight: consecutive || *sorted == WHEEL }
    }
}
