use crate::N;
use crate::Points;
use crate::Position;
use crate::STAKE;
use crate::Times;

/// Score deltas for a finished round.
///
/// The landlord wins or loses twice the stake times the multiplier; each
/// peasant moves the other way by the stake times the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Settlement {
    deltas: [Points; N],
}

impl Settlement {
    pub fn deltas(&self) -> [Points; N] {
        self.deltas
    }
    pub fn delta(&self, seat: Position) -> Points {
        self.deltas[seat]
    }
}

/// `(landlord, landlord side won, multiplier)`
impl From<(Position, bool, Times)> for Settlement {
    fn from((landlord, won, times): (Position, bool, Times)) -> Self {
        let unit = STAKE * times as Points;
        let sign = if won { 1 } else { -1 };
        let mut deltas = [-sign * unit; N];
        deltas[landlord] = sign * 2 * unit;
        Self { deltas }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let deltas = self.deltas.iter().map(|d| format!("{:+}", d)).collect::<Vec<_>>();
        write!(f, "{}", deltas.join(" "))
    }
}
