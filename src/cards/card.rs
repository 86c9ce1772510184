use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// A playing card encoded as a single byte.
///
/// The 52 suited cards map to `0..52` as `(strength - 1) * 4 + (suit - 1)`,
/// and the two jokers take `52` and `53`. This yields a natural ordering
/// where cards sort first by rank, then by suit within each rank, and gives
/// every card in the deck a unique identity.
///
/// # Representations
///
/// - `u8`: Compact index `0..54`
/// - `u64`: Single-bit representation for set membership and census
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        match self.0 {
            52 => Rank::Small,
            53 => Rank::Big,
            n => Rank::from(n / 4 + 1),
        }
    }
    pub fn suit(&self) -> Suit {
        match self.0 {
            52 | 53 => Suit::Joker,
            n => Suit::from(n % 4 + 1),
        }
    }
}

/// (Rank, Suit) isomorphism
///
/// Jokers ignore the suit argument; suited ranks must not be given `Suit::Joker`.
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        match r {
            Rank::Small => Self(52),
            Rank::Big => Self(53),
            _ => {
                assert!(s != Suit::Joker, "suited rank {} without a suit", r);
                Self((u8::from(r) - 1) * 4 + (u8::from(s) - 1))
            }
        }
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < crate::DECK as u8, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..crate::DECK as u8))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
