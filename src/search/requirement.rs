use crate::cards::Piles;
use crate::cards::Rank;
use crate::pattern::Shape;

/// What a candidate has to satisfy to be worth proposing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Free lead. Every legal shape qualifies.
    Lead,
    /// A particular shape at any rank, bombs and the rocket included.
    /// `Shape(Invalid)` asks for nothing in particular and reads as a lead.
    Shape(Shape),
    /// Must beat this play on top of the table.
    Beat(Piles),
}

impl Requirement {
    /// The shape that candidates are generated for, `None` when leading.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Self::Lead | Self::Shape(Shape::Invalid) => None,
            Self::Shape(shape) => Some(*shape),
            Self::Beat(table) => Some(Shape::from(table)),
        }
    }
    /// Body ranks must sit strictly above this.
    pub fn floor(&self) -> Option<Rank> {
        match self {
            Self::Beat(table) => table.anchor(),
            _ => None,
        }
    }
    /// Exact run length to match when following a run.
    pub fn rungs(&self) -> Option<usize> {
        match self {
            Self::Beat(table) => {
                let shape = Shape::from(table);
                shape
                    .minimum_run()
                    .map(|_| table.cards() / (shape.width() + shape.kicker()))
            }
            _ => None,
        }
    }
    pub fn is_lead(&self) -> bool {
        matches!(self, Self::Lead | Self::Shape(Shape::Invalid))
    }
}

/// An empty table is a free lead.
impl From<Piles> for Requirement {
    fn from(table: Piles) -> Self {
        match Shape::from(&table) {
            Shape::Invalid => Self::Lead,
            _ => Self::Beat(table),
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lead => write!(f, "lead"),
            Self::Shape(shape) => write!(f, "any {}", shape),
            Self::Beat(table) => write!(f, "beat {}", table),
        }
    }
}
