use crate::Points;
use crate::Position;
use crate::Times;
use crate::Weight;
use crate::cards::Card;
use crate::gameplay::Board;
use crate::gameplay::Outcome;
use crate::gameplay::Phase;
use crate::gameplay::Role;
use crate::pattern::Shape;

/// Everything a writer may show about the table at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub reserve: Vec<String>,
    pub times: Times,
    pub top: Option<Top>,
    pub seats: Vec<Sitting>,
}

/// The play to beat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Top {
    pub owner: Position,
    pub cards: Vec<String>,
    pub shape: Shape,
}

/// One seat as the table sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Sitting {
    pub position: Position,
    pub role: Role,
    pub hand: Vec<String>,
    pub value: Weight,
    pub score: Points,
    pub demand: Option<u8>,
    pub outcome: Outcome,
}

fn names(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}

impl From<&Board> for Snapshot {
    fn from(board: &Board) -> Self {
        Self {
            phase: board.phase(),
            reserve: names(board.reserve().cards()),
            times: board.times(),
            top: board.stack().top().map(|play| Top {
                owner: play.owner(),
                cards: names(play.cards()),
                shape: play.shape(),
            }),
            seats: board
                .seats()
                .iter()
                .enumerate()
                .map(|(position, seat)| Sitting {
                    position,
                    role: seat.role(),
                    hand: names(seat.hand().cards()),
                    value: seat.hand().weight(),
                    score: seat.score(),
                    demand: seat.demand(),
                    outcome: seat.outcome(),
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for Sitting {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "@{} {} {:>4} {:<8} [{}] := {}",
            self.position,
            self.role,
            self.score,
            self.outcome.to_string(),
            self.hand.join(" "),
            self.value
        )
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "[Reserve] [{}] x{}", self.reserve.join(" "), self.times)?;
        match &self.top {
            Some(top) => writeln!(f, "[Stack]   @{} [{}] := {}", top.owner, top.cards.join(" "), top.shape)?,
            None => writeln!(f, "[Stack]   -")?,
        }
        write!(f, "[Seats]")?;
        for seat in self.seats.iter() {
            write!(f, "\n{}", seat)?;
        }
        Ok(())
    }
}
