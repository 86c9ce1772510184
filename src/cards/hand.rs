use super::card::Card;
use super::piles::Piles;
use super::rank::Rank;
use crate::Weight;

/// A multiset of cards held by a seat, always sorted by rank then suit.
///
/// Cards are unique by identity, so a hand is really a set keyed by [`Card`].
/// Selection and removal are separate steps: [`pick`](Self::pick) resolves
/// ranks into concrete cards without touching the hand, and
/// [`discard`](Self::discard) removes those exact cards all at once or not
/// at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.binary_search(card).is_ok()
    }
    /// How many cards of the given rank are held.
    pub fn count(&self, rank: Rank) -> usize {
        self.0.iter().filter(|c| c.rank() == rank).count()
    }
    /// Summed heuristic weight of every card held.
    pub fn weight(&self) -> Weight {
        self.0.iter().map(|c| c.rank().weight()).sum()
    }
    /// Rank piles, ordered by count descending then rank ascending.
    pub fn piles(&self) -> Piles {
        Piles::from(self.0.as_slice())
    }
    /// Rank piles in hand order, which for a sorted hand is ascending rank.
    pub fn sequence(&self) -> Piles {
        Piles::sequential(self.0.as_slice())
    }
    /// Merges cards in, keeping the hand sorted.
    pub fn add(&mut self, cards: &[Card]) {
        debug_assert!(cards.iter().all(|c| !self.contains(c)));
        self.0.extend_from_slice(cards);
        self.0.sort();
    }
    /// Resolves one concrete card per requested rank, repeating ranks as
    /// many times as they are requested. `None` if the hand runs short.
    pub fn pick(&self, ranks: &[Rank]) -> Option<Vec<Card>> {
        let mut taken = vec![false; self.0.len()];
        ranks
            .iter()
            .map(|rank| {
                self.0
                    .iter()
                    .enumerate()
                    .find(|(i, c)| !taken[*i] && c.rank() == *rank)
                    .map(|(i, c)| {
                        taken[i] = true;
                        *c
                    })
            })
            .collect()
    }
    /// Removes exactly these cards. Fails without mutating if any card is
    /// missing or repeated.
    /// Fails unless every card is distinct and held.
    pub fn holds(&self, cards: &[Card]) -> anyhow::Result<()> {
        let mask = cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b);
        if mask.count_ones() as usize != cards.len() {
            return Err(anyhow::anyhow!("repeated card in discard"));
        }
        if let Some(card) = cards.iter().find(|c| !self.contains(c)) {
            return Err(anyhow::anyhow!("{} is not in hand", card));
        }
        Ok(())
    }
    pub fn discard(&mut self, cards: &[Card]) -> anyhow::Result<()> {
        self.holds(cards)?;
        let mask = cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b);
        self.0.retain(|c| u64::from(*c) & mask == 0);
        Ok(())
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Vec<Card>> for Hand {
    fn from(mut cards: Vec<Card>) -> Self {
        cards.sort();
        Self(cards)
    }
}
impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

/// u64 bitset of every card held.
impl From<&Hand> for u64 {
    fn from(hand: &Hand) -> Self {
        hand.0.iter().map(|c| u64::from(*c)).fold(0, |a, b| a | b)
    }
}

/// Parses rank tokens into a hand, assigning suits in order so that
/// repeated ranks stay distinct cards. Handy for tests and scripted seats.
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut seen = [0u8; 16];
        Rank::parse(s)?
            .into_iter()
            .map(|rank| {
                let n = &mut seen[rank as usize];
                let suit = match rank.is_joker() {
                    true if *n == 0 => super::suit::Suit::Joker,
                    false if *n < 4 => super::suit::Suit::all()[*n as usize],
                    _ => return Err(anyhow::anyhow!("too many {}", rank)),
                };
                *n += 1;
                Ok(Card::from((rank, suit)))
            })
            .collect::<anyhow::Result<Vec<Card>>>()
            .map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sorts_and_suits() {
        let hand = Hand::try_from("4 3 3 :D").unwrap();
        assert_eq!(hand.size(), 4);
        assert_eq!(hand.cards()[0].rank(), Rank::Three);
        assert_ne!(hand.cards()[0], hand.cards()[1]);
        assert_eq!(hand.cards()[3].rank(), Rank::Big);
    }

    #[test]
    fn parse_rejects_fifth_copy() {
        assert!(Hand::try_from("5 5 5 5 5").is_err());
        assert!(Hand::try_from(":) :)").is_err());
    }

    #[test]
    fn pick_repeated_ranks() {
        let hand = Hand::try_from("3 3 3 4").unwrap();
        let cards = hand.pick(&[Rank::Three, Rank::Three, Rank::Four]).unwrap();
        assert_eq!(cards.len(), 3);
        assert_ne!(cards[0], cards[1]);
        assert!(hand.pick(&[Rank::Four, Rank::Four]).is_none());
    }

    #[test]
    fn discard_is_atomic() {
        let mut hand = Hand::try_from("3 4 5").unwrap();
        let stranger = Hand::try_from("6").unwrap().cards()[0];
        let mut mixed = hand.pick(&[Rank::Three]).unwrap();
        mixed.push(stranger);
        assert!(hand.discard(&mixed).is_err());
        assert_eq!(hand.size(), 3);
        let three = hand.pick(&[Rank::Three]).unwrap();
        hand.discard(&three).unwrap();
        assert_eq!(hand.size(), 2);
        assert_eq!(hand.count(Rank::Three), 0);
    }

    #[test]
    fn discard_rejects_repeats() {
        let mut hand = Hand::try_from("3 4").unwrap();
        let three = hand.cards()[0];
        assert!(hand.discard(&[three, three]).is_err());
        assert_eq!(hand.size(), 2);
    }

    #[test]
    fn add_keeps_order() {
        let mut hand = Hand::try_from("3 K").unwrap();
        hand.add(Hand::try_from("7 :)").unwrap().cards());
        let ranks = hand.cards().iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![Rank::Three, Rank::Seven, Rank::King, Rank::Small]);
    }

    #[test]
    fn weight_sums_fibonacci() {
        assert_eq!(Hand::try_from("3 4 5").unwrap().weight(), 1 + 2 + 3);
    }
}
