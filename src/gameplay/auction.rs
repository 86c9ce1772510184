use crate::MAX_DEMAND;
use crate::N;
use crate::Position;

/// Bidding for the landlord role.
///
/// Active seats demand in seat order, one full round at a time. After a
/// round, seats below the round's maximum drop out. Demanding the maximum
/// wins outright. A round that eliminates nobody while several seats remain
/// goes to the earliest of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    active: Vec<Position>,
    demands: [Option<u8>; N],
    cursor: usize,
    max: u8,
    claimants: usize,
}

impl Default for Auction {
    fn default() -> Self {
        Self {
            active: (0..N).collect(),
            demands: [None; N],
            cursor: 0,
            max: 0,
            claimants: 0,
        }
    }
}

impl Auction {
    /// The seat due to demand, or `None` once the landlord is decided.
    pub fn next(&self) -> Option<Position> {
        match self.winner() {
            Some(_) => None,
            None => self.active.get(self.cursor).copied(),
        }
    }
    pub fn winner(&self) -> Option<Position> {
        match self.active.as_slice() {
            [seat] => Some(*seat),
            _ => None,
        }
    }
    pub fn max(&self) -> u8 {
        self.max
    }
    /// Seats that have demanded the running maximum this round.
    pub fn claimants(&self) -> usize {
        self.claimants
    }
    pub fn demands(&self) -> &[Option<u8>; N] {
        &self.demands
    }
    pub fn active(&self) -> &[Position] {
        &self.active
    }

    /// Records a demand from the seat whose turn it is.
    pub fn bid(&mut self, seat: Position, demand: u8) -> anyhow::Result<()> {
        if self.next() != Some(seat) {
            return Err(anyhow::anyhow!("seat {} is not due to demand", seat));
        }
        if demand > MAX_DEMAND {
            return Err(anyhow::anyhow!("demand {} is above {}", demand, MAX_DEMAND));
        }
        self.demands[seat] = Some(demand);
        match demand {
            d if d > self.max || self.claimants == 0 => {
                self.max = d;
                self.claimants = 1;
            }
            d if d == self.max => self.claimants += 1,
            _ => {}
        }
        if demand == MAX_DEMAND {
            self.active = vec![seat];
            return Ok(());
        }
        self.cursor += 1;
        if self.cursor == self.active.len() {
            self.eliminate();
        }
        Ok(())
    }
    fn eliminate(&mut self) {
        let before = self.active.len();
        let max = self.max;
        let demands = self.demands;
        self.active.retain(|s| demands[*s] == Some(max));
        if self.active.len() == before {
            self.active.truncate(1);
        }
        self.cursor = 0;
        self.max = 0;
        self.claimants = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(auction: &mut Auction, demands: &[u8]) {
        for d in demands {
            let seat = auction.next().unwrap();
            auction.bid(seat, *d).unwrap();
        }
    }

    #[test]
    fn maximum_wins_outright() {
        let mut auction = Auction::default();
        run(&mut auction, &[1, 3]);
        assert_eq!(auction.winner(), Some(1));
        assert_eq!(auction.next(), None);
    }

    #[test]
    fn lower_demands_drop_out() {
        let mut auction = Auction::default();
        run(&mut auction, &[1, 2, 0]);
        assert_eq!(auction.winner(), Some(1));
    }

    #[test]
    fn ties_go_another_round() {
        let mut auction = Auction::default();
        run(&mut auction, &[2, 2, 1]);
        assert_eq!(auction.winner(), None);
        assert_eq!(auction.active(), &[0, 1]);
        run(&mut auction, &[1, 2]);
        assert_eq!(auction.winner(), Some(1));
    }

    #[test]
    fn stalemate_goes_to_the_earliest_seat() {
        let mut auction = Auction::default();
        run(&mut auction, &[0, 0, 0]);
        assert_eq!(auction.winner(), Some(0));
    }

    #[test]
    fn out_of_turn_and_out_of_range() {
        let mut auction = Auction::default();
        assert!(auction.bid(1, 1).is_err());
        assert!(auction.bid(0, 4).is_err());
        assert_eq!(auction.next(), Some(0));
    }
}
