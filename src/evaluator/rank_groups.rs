use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 13];
        for r in ranks {
            counts[r.order()] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter(|r| counts[r.order()] > 0)
            .map(|r| (r, counts[r.order()]))
            .collect();

        // Only the sizes matter for scoring; rank desc just keeps the order stable.
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Size of the largest group.
    pub fn largest(&self) -> u8 {
        self.size_at(0)
    }

    /// Size of the second-largest group, 0 if there is none.
    pub fn second(&self) -> u8 {
        self.size_at(1)
    }

    fn size_at(&self, i: usize) -> u8 {
        self.groups.get(i).map(|&(_, count)| count).unwrap_or(0)
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad() {
        let groups = RankGroups::from_ranks(&[Rank::Ace, Rank::King, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(groups.largest(), 4);
        assert_eq!(groups.second(), 1);
        assert!(groups.pairs().is_empty());
    }

    #[test]
    fn full_house() {
        let groups =
            RankGroups::from_ranks(&[Rank::King, Rank::Ace, Rank::King, Rank::Ace, Rank::Ace]);
        assert_eq!(groups.largest(), 3);
        assert_eq!(groups.second(), 2);
        assert_eq!(groups.pairs(), vec![Rank::King]);
    }

    #[test]
    fn two_pair() {
        let groups =
            RankGroups::from_ranks(&[Rank::Ace, Rank::Ace, Rank::King, Rank::King, Rank::Ten]);
        assert_eq!(groups.pairs(), vec![Rank::Ace, Rank::King]);
        assert_eq!(groups.largest(), 2);
        assert_eq!(groups.second(), 2);
    }

    #[test]
    fn high_card() {
        let groups =
            RankGroups::from_ranks(&[Rank::Ace, Rank::Ten, Rank::Seven, Rank::Five, Rank::Two]);
        assert_eq!(groups.largest(), 1);
        assert!(groups.pairs().is_empty());
        assert_eq!(groups.groups().len(), 5);
    }

    #[test]
    fn sorted_by_size_then_rank() {
        let groups =
            RankGroups::from_ranks(&[Rank::Five, Rank::Ace, Rank::Ten, Rank::Five, Rank::Two]);
        let ranks: Vec<Rank> = groups.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Five, Rank::Ace, Rank::Ten, Rank::Two]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let groups = RankGroups::from_ranks(&[]);
        assert_eq!(groups.largest(), 0);
        assert_eq!(groups.second(), 0);
    }
}
