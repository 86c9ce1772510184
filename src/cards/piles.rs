use super::card::Card;
use super::pile::Pile;
use super::rank::Rank;

/// A card multiset grouped by rank, one [`Pile`] per distinct rank.
///
/// This is the substrate that classification, comparison and candidate
/// search all consume. Built two ways:
///
/// - [`From<&[Card]>`] sorts piles by count descending then rank ascending,
///   the order classification pattern-matches against.
/// - [`Piles::sequential`] keeps first-appearance order, which over a sorted
///   hand walks ranks upward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Piles(Vec<Pile>);

impl Piles {
    /// Groups cards by rank in first-appearance order.
    pub fn sequential(cards: &[Card]) -> Self {
        let mut piles: Vec<(Rank, usize)> = Vec::new();
        for card in cards {
            match piles.iter_mut().find(|(rank, _)| *rank == card.rank()) {
                Some((_, count)) => *count += 1,
                None => piles.push((card.rank(), 1)),
            }
        }
        Self(piles.into_iter().map(Pile::from).collect())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Pile> {
        self.0.iter()
    }
    pub fn as_slice(&self) -> &[Pile] {
        &self.0
    }
    /// Rank of the leading pile, which orders plays of the same shape.
    pub fn anchor(&self) -> Option<Rank> {
        self.0.first().map(|p| p.rank())
    }
    /// Per-position pile sizes.
    pub fn counts(&self) -> Vec<usize> {
        self.0.iter().map(|p| p.count()).collect()
    }
    /// Total cards across all piles.
    pub fn cards(&self) -> usize {
        self.0.iter().map(|p| p.count()).sum()
    }
    /// Cards held of the given rank.
    pub fn count(&self, rank: Rank) -> usize {
        self.0
            .iter()
            .find(|p| p.rank() == rank)
            .map(|p| p.count())
            .unwrap_or(0)
    }
    /// True when both groupings have the same sizes in the same positions.
    pub fn aligns(&self, other: &Self) -> bool {
        self.counts() == other.counts()
    }
}

impl From<&[Card]> for Piles {
    fn from(cards: &[Card]) -> Self {
        let mut piles = Self::sequential(cards);
        piles.0.sort();
        piles
    }
}

impl From<Vec<Pile>> for Piles {
    fn from(piles: Vec<Pile>) -> Self {
        Self(piles)
    }
}

impl std::fmt::Display for Piles {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for pile in self.0.iter() {
            write!(f, "{}", pile)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn piles(s: &str) -> Piles {
        Hand::try_from(s).unwrap().piles()
    }

    #[test]
    fn ordered_by_count_then_rank() {
        let p = piles("9 3 3 3 K K 4 4 4");
        let order = p.iter().map(|p| (p.rank(), p.count())).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                (Rank::Three, 3),
                (Rank::Four, 3),
                (Rank::King, 2),
                (Rank::Nine, 1)
            ]
        );
        assert_eq!(p.anchor(), Some(Rank::Three));
        assert_eq!(p.cards(), 9);
    }

    #[test]
    fn sequential_walks_up_a_sorted_hand() {
        let hand = Hand::try_from("K 3 3 9 3").unwrap();
        let ranks = hand.sequence().iter().map(|p| p.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![Rank::Three, Rank::Nine, Rank::King]);
    }

    #[test]
    fn empty_grouping() {
        let p = Piles::from(&[][..]);
        assert!(p.is_empty());
        assert_eq!(p.anchor(), None);
    }

    #[test]
    fn alignment() {
        assert!(piles("3 3 3 4").aligns(&piles("9 9 9 2")));
        assert!(!piles("3 3 3 4").aligns(&piles("9 9 9 2 2")));
    }

    #[test]
    fn counts_by_rank() {
        let p = piles("5 5 8");
        assert_eq!(p.count(Rank::Five), 2);
        assert_eq!(p.count(Rank::Six), 0);
    }
}
