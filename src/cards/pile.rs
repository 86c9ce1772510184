use super::rank::Rank;

/// How many cards of one rank a multiset holds. Count is in `1..=4`
/// (jokers only ever reach 1).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pile {
    rank: Rank,
    count: usize,
}

impl Pile {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn count(&self) -> usize {
        self.count
    }
    /// A quad, the only pile that stands alone as a bomb.
    pub fn is_quad(&self) -> bool {
        self.count == 4
    }
}

impl From<(Rank, usize)> for Pile {
    fn from((rank, count): (Rank, usize)) -> Self {
        debug_assert!((1..=4).contains(&count));
        Self { rank, count }
    }
}

/// Classification order: larger piles first, lower ranks first within a size.
impl Ord for Pile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}
impl PartialOrd for Pile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.rank, self.count)
    }
}
