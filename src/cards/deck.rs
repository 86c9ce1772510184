use super::card::Card;
use super::hand::Hand;
use crate::Arbitrary;
use rand::Rng;
use rand::seq::SliceRandom;

/// The full 54-card deck in dealing order.
///
/// The deck is never consumed: dealing copies cards out of it, so the same
/// deck is reshuffled between rounds and always holds every card exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh deck in sorted order.
    pub fn new() -> Self {
        Self((0..crate::DECK as u8).map(Card::from).collect())
    }
    /// Shuffles in place with the given source of randomness.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Deals one hand per seat round-robin, then the reserve from the remainder.
    pub fn deal(&self) -> ([Hand; crate::N], Hand) {
        let mut hands = [(); crate::N].map(|_| Vec::with_capacity(crate::HAND + crate::RESERVE));
        let (dealt, reserve) = self.0.split_at(crate::N * crate::HAND);
        for (i, card) in dealt.iter().enumerate() {
            hands[i % crate::N].push(*card);
        }
        (hands.map(Hand::from), Hand::from(reserve.to_vec()))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut rand::rng());
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn deck_is_complete() {
        let deck = Deck::random();
        let mask = deck.cards().iter().map(|c| u64::from(*c)).fold(0, |a, b| a | b);
        assert_eq!(deck.cards().len(), crate::DECK);
        assert_eq!(mask.count_ones() as usize, crate::DECK);
    }

    #[test]
    fn deal_sizes() {
        let (hands, reserve) = Deck::random().deal();
        assert!(hands.iter().all(|h| h.size() == crate::HAND));
        assert_eq!(reserve.size(), crate::RESERVE);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut SmallRng::seed_from_u64(7));
        b.shuffle(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_ne!(a, Deck::new());
    }
}
