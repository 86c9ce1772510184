use crate::HOLDBACK_CARDS;
use crate::HOLDBACK_DANGER;
use crate::N;
use crate::Position;
use crate::ROBOT_DEMANDS;
use crate::gameplay::Board;
use crate::gameplay::Proposal;
use crate::search::Search;

/// Greedy automated seat.
///
/// Demands by how its hand ranks among the three, and plays the cheapest
/// legal candidate. It never searches ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Robot;

impl Robot {
    pub fn demand(&self, board: &Board, seat: Position) -> u8 {
        ROBOT_DEMANDS[board.standing(seat)]
    }
    pub fn think(&self, board: &Board, seat: Position) -> Proposal {
        let requirement = board.requirement(seat);
        if !requirement.is_lead() && self.holds_back(board, seat) {
            log::debug!("seat {} holds back for its teammate", seat);
            return Proposal::Pass;
        }
        match Search::from((board.hand(seat), requirement)).best() {
            Some(candidate) => Proposal::Cards(candidate.into()),
            None => Proposal::Pass,
        }
    }
    /// Leaves a teammate's play alone when it is big, or while an opponent
    /// is about to go out.
    fn holds_back(&self, board: &Board, seat: Position) -> bool {
        let Some(top) = board.stack().top() else {
            return false;
        };
        let side = board.side(seat);
        let friendly = top.owner() != seat && board.side(top.owner()) == side;
        let danger = (0..N)
            .filter(|s| board.side(*s) != side)
            .any(|s| board.hand(s).size() <= HOLDBACK_DANGER);
        friendly && (top.cards().len() >= HOLDBACK_CARDS || danger)
    }
}

impl std::fmt::Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "CPU")
    }
}
