use crate::cards::Card;

/// What a seat puts forward on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    Pass,
    Cards(Vec<Card>),
}

/// No cards is a pass.
impl From<Vec<Card>> for Proposal {
    fn from(cards: Vec<Card>) -> Self {
        match cards.is_empty() {
            true => Self::Pass,
            false => Self::Cards(cards),
        }
    }
}

impl std::fmt::Display for Proposal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Cards(cards) => {
                let cards = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
                write!(f, "[{}]", cards.join(" "))
            }
        }
    }
}
