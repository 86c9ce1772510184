use crate::Position;
use crate::cards::Card;
use crate::cards::Piles;
use crate::pattern::Shape;

/// One seat's discard, or its pass when `cards` is empty.
/// Immutable once it lands on the [`Stack`](super::Stack).
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Play {
    owner: Position,
    cards: Vec<Card>,
    shape: Shape,
}

impl Play {
    pub fn pass(owner: Position) -> Self {
        Self {
            owner,
            cards: Vec::new(),
            shape: Shape::Invalid,
        }
    }
    pub fn owner(&self) -> Position {
        self.owner
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn piles(&self) -> Piles {
        Piles::from(self.cards.as_slice())
    }
    pub fn is_pass(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A discard by `owner`, classified on the way in.
impl From<(Position, Vec<Card>)> for Play {
    fn from((owner, mut cards): (Position, Vec<Card>)) -> Self {
        cards.sort();
        let shape = Shape::from(cards.as_slice());
        Self {
            owner,
            cards,
            shape,
        }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_pass() {
            return write!(f, "@{} pass", self.owner);
        }
        let cards = self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "@{} [{}] := {}", self.owner, cards.join(" "), self.shape)
    }
}
