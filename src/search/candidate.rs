use crate::LEFTOVER_WEIGHT;
use crate::TIER_WEIGHT;
use crate::TWO_REBATE;
use crate::Weight;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Piles;
use crate::pattern::Shape;

/// A concrete, legal selection of cards from a hand, with its heuristic cost.
///
/// Cost mixes the shape's rarity, the cards' own weights, a rebate for every
/// "2" spent and a charge for every card left behind. Cheaper is better.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    cards: Vec<Card>,
    shape: Shape,
    score: Weight,
}

impl Candidate {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn score(&self) -> Weight {
        self.score
    }
    pub fn piles(&self) -> Piles {
        Piles::from(self.cards.as_slice())
    }
    fn cost(shape: Shape, cards: &[Card], hand: &Hand) -> Weight {
        let twos = cards.iter().filter(|c| c.rank().is_two()).count() as Weight;
        let left = (hand.size() - cards.len()) as Weight;
        let weight = cards.iter().map(|c| c.rank().weight()).sum::<Weight>();
        shape.tier() * TIER_WEIGHT + weight - twos * TWO_REBATE + left * LEFTOVER_WEIGHT
    }
}

/// Prices `cards` as a play out of `hand`.
impl From<(Vec<Card>, &Hand)> for Candidate {
    fn from((cards, hand): (Vec<Card>, &Hand)) -> Self {
        let shape = Shape::from(cards.as_slice());
        let score = Self::cost(shape, &cards, hand);
        Self {
            cards,
            shape,
            score,
        }
    }
}

impl From<Candidate> for Vec<Card> {
    fn from(candidate: Candidate) -> Self {
        candidate.cards
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{} [{}] ${}", self.shape, cards.join(" "), self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(play: &str, hand: &str) -> Candidate {
        let hand = Hand::try_from(hand).unwrap();
        let ranks = crate::cards::Rank::parse(play).unwrap();
        let cards = hand.pick(&ranks).unwrap();
        Candidate::from((cards, &hand))
    }

    #[test]
    fn lower_ranks_are_cheaper() {
        let hand = "3 9 K";
        assert!(candidate("3", hand).score() < candidate("9", hand).score());
        assert!(candidate("9", hand).score() < candidate("K", hand).score());
    }

    #[test]
    fn emptying_the_hand_is_cheaper() {
        let a = candidate("5 5", "5 5 6");
        let b = candidate("5 5", "5 5");
        assert_eq!(a.score(), b.score() + LEFTOVER_WEIGHT);
    }

    #[test]
    fn twos_get_a_rebate() {
        let two = candidate("2", "2 A");
        let ace = candidate("A", "2 A");
        assert_eq!(two.score(), ace.score() + 377 - 233 - TWO_REBATE);
    }

    #[test]
    fn shape_is_classified() {
        assert_eq!(candidate("3 3 3 4", "3 3 3 4").shape(), Shape::TripleSingle);
    }
}
