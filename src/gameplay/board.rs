use super::auction::Auction;
use super::outcome::Outcome;
use super::phase::Phase;
use super::play::Play;
use super::proposal::Proposal;
use super::role::Role;
use super::seat::Seat;
use super::settlement::Settlement;
use super::stack::Stack;
use crate::DECK;
use crate::HERO;
use crate::N;
use crate::Position;
use crate::Times;
use crate::Weight;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::pattern::Verdict;
use crate::search::Requirement;
use rand::Rng;

/// The table: every seat's cards, the play stack, bidding, the running
/// multiplier and the round's lifecycle.
///
/// The board owns the rules. Callers drive it one decision at a time through
/// [`demand`](Self::demand) during bidding and [`apply`](Self::apply) during
/// play. Rejected decisions leave cards and stack exactly as they were and
/// mark the seat's outcome `Invalid`, so the same seat can simply be asked
/// again.
#[derive(Debug, Clone)]
pub struct Board {
    deck: Deck,
    seats: [Seat; N],
    reserve: Hand,
    stack: Stack,
    auction: Auction,
    times: Times,
    phase: Phase,
    landlord: Option<Position>,
    ticker: Position,
    winner: Option<Position>,
    settlement: Option<Settlement>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            deck: Deck::new(),
            seats: std::array::from_fn(|_| Seat::default()),
            reserve: Hand::empty(),
            stack: Stack::default(),
            auction: Auction::default(),
            times: 1,
            phase: Phase::NotStarted,
            landlord: None,
            ticker: 0,
            winner: None,
            settlement: None,
        }
    }
}

/// A board dealt from prearranged hands and reserve, ready for bidding.
impl From<([Hand; N], Hand)> for Board {
    fn from((hands, reserve): ([Hand; N], Hand)) -> Self {
        let mut board = Self::default();
        board.lay(hands, reserve);
        board
    }
}

/// lifecycle
impl Board {
    /// Clears the round back to an undealt table. Scores carry over.
    pub fn reset(&mut self) {
        self.seats.iter_mut().for_each(Seat::reset);
        self.reserve.clear();
        self.stack.clear();
        self.auction = Auction::default();
        self.times = 1;
        self.phase = Phase::NotStarted;
        self.landlord = None;
        self.ticker = 0;
        self.winner = None;
        self.settlement = None;
    }
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
    }
    /// Deals the deck as it stands and opens bidding.
    pub fn deal(&mut self) {
        let (hands, reserve) = self.deck.deal();
        self.lay(hands, reserve);
    }
    /// Reset, shuffle and deal in one go.
    pub fn begin<R: Rng>(&mut self, rng: &mut R) {
        self.reset();
        self.shuffle(rng);
        self.deal();
    }
    fn lay(&mut self, hands: [Hand; N], reserve: Hand) {
        for (seat, hand) in self.seats.iter_mut().zip(hands) {
            seat.deal(hand);
        }
        self.reserve = reserve;
        self.phase = Phase::Bidding;
        log::debug!("dealt, reserve {}", self.reserve);
    }
}

/// bidding
impl Board {
    /// A seat's hand valued together with the reserve it could win.
    pub fn appraise(&self, seat: Position) -> Weight {
        self.seats[seat].hand().weight() + self.reserve.weight()
    }
    /// Seats from strongest to weakest appraisal, ties in seat order.
    pub fn appraisal(&self) -> [Position; N] {
        let mut order = std::array::from_fn(|i| i);
        order.sort_by_key(|s| std::cmp::Reverse(self.appraise(*s)));
        order
    }
    /// Where `seat` falls in the appraisal, 0 for the strongest hand.
    pub fn standing(&self, seat: Position) -> usize {
        self.appraisal()
            .iter()
            .position(|s| *s == seat)
            .unwrap_or(N - 1)
    }
    /// The seat due to demand, while bidding is open.
    pub fn bidder(&self) -> Option<Position> {
        match self.phase {
            Phase::Bidding => self.auction.next(),
            _ => None,
        }
    }
    pub fn demand(&mut self, seat: Position, demand: u8) -> anyhow::Result<()> {
        if self.phase != Phase::Bidding {
            return Err(anyhow::anyhow!("no bidding while {}", self.phase));
        }
        self.auction.bid(seat, demand)?;
        self.seats[seat].bid(demand);
        log::info!("seat {} demands {}", seat, demand);
        if let Some(winner) = self.auction.winner() {
            self.crown(winner);
        }
        Ok(())
    }
    /// Hands the reserve to the landlord, who leads first.
    fn crown(&mut self, seat: Position) {
        let reserve = self.reserve.cards().to_vec();
        self.seats[seat].crown();
        self.seats[seat].hand_mut().add(&reserve);
        self.landlord = Some(seat);
        self.ticker = seat;
        self.phase = Phase::Playing;
        log::info!("seat {} is the landlord", seat);
    }
}

/// playing
impl Board {
    /// The seat whose turn it is, while play is on.
    pub fn actor(&self) -> Option<Position> {
        match self.phase {
            Phase::Playing => Some(self.ticker),
            _ => None,
        }
    }
    /// True when nothing stands to be beaten, either because nothing has
    /// been played or because everyone passed on this seat's play.
    pub fn leading(&self, seat: Position) -> bool {
        self.stack.top().is_none_or(|top| top.owner() == seat)
    }
    pub fn requirement(&self, seat: Position) -> Requirement {
        match self.stack.top() {
            Some(top) if top.owner() != seat => Requirement::Beat(top.piles()),
            _ => Requirement::Lead,
        }
    }
    pub fn side(&self, seat: Position) -> Role {
        self.seats[seat].role()
    }
    /// Resolves typed ranks against the seat's hand, then applies them.
    /// No ranks is a pass.
    pub fn play(&mut self, seat: Position, ranks: &[Rank]) -> anyhow::Result<Outcome> {
        if ranks.is_empty() {
            return self.apply(seat, Proposal::Pass);
        }
        match self.seats[seat].hand().pick(ranks) {
            Some(cards) => self.apply(seat, Proposal::Cards(cards)),
            None if self.actor() == Some(seat) => {
                self.seats[seat].record(Outcome::Invalid);
                Err(anyhow::anyhow!("seat {} does not hold those cards", seat))
            }
            None => Err(anyhow::anyhow!("seat {} is not due to play", seat)),
        }
    }
    /// Marks the actor's turn invalid for input that never made it to a
    /// proposal. The table is untouched and the seat stays on turn.
    pub fn reject(&mut self, seat: Position) {
        if self.actor() == Some(seat) {
            self.seats[seat].record(Outcome::Invalid);
        }
    }
    /// Judges and, if legal, commits one seat's turn.
    pub fn apply(&mut self, seat: Position, proposal: Proposal) -> anyhow::Result<Outcome> {
        if self.actor() != Some(seat) {
            return Err(anyhow::anyhow!("seat {} is not due to play", seat));
        }
        log::debug!("seat {} proposes {}", seat, proposal);
        let result = match proposal {
            Proposal::Pass => self.pass(seat),
            Proposal::Cards(cards) => self.discard(seat, cards),
        };
        match result {
            Ok(outcome) => {
                self.seats[seat].record(outcome);
                Ok(outcome)
            }
            Err(e) => {
                self.seats[seat].record(Outcome::Invalid);
                Err(e)
            }
        }
    }
    fn pass(&mut self, seat: Position) -> anyhow::Result<Outcome> {
        if self.leading(seat) {
            return Err(anyhow::anyhow!("seat {} has the lead and cannot pass", seat));
        }
        self.stack.push(Play::pass(seat));
        self.advance();
        Ok(Outcome::Passed)
    }
    fn discard(&mut self, seat: Position, cards: Vec<Card>) -> anyhow::Result<Outcome> {
        self.seats[seat].hand().holds(&cards)?;
        let play = Play::from((seat, cards));
        let verdict = match self.stack.top() {
            Some(top) if top.owner() != seat => Verdict::compare(&play.piles(), &top.piles()),
            _ => Verdict::lead(&play.piles()),
        };
        if !verdict.outranks() {
            return Err(anyhow::anyhow!("{} does not beat the table", play));
        }
        self.seats[seat].hand_mut().discard(play.cards())?;
        self.times *= verdict.times();
        log::debug!("{} x{}", play, self.times);
        self.stack.push(play);
        match self.seats[seat].hand().is_empty() {
            true => self.finish(seat),
            false => self.advance(),
        }
        Ok(Outcome::Played(verdict.shape()))
    }
    fn advance(&mut self) {
        self.ticker = (self.ticker + 1) % N;
    }
    /// The first empty hand ends the round for its whole side.
    fn finish(&mut self, seat: Position) {
        let Some(landlord) = self.landlord else {
            unreachable!("round finished without a landlord");
        };
        let won = self.seats[seat].is_landlord();
        let settlement = Settlement::from((landlord, won, self.times));
        for (s, delta) in self.seats.iter_mut().zip(settlement.deltas()) {
            s.settle(delta);
        }
        self.winner = Some(seat);
        self.settlement = Some(settlement);
        self.phase = match self.side(HERO) == self.side(seat) {
            true => Phase::Won,
            false => Phase::Lost,
        };
        log::info!("seat {} goes out, {} ({})", seat, self.phase, settlement);
    }
}

/// inspection
impl Board {
    pub fn seats(&self) -> &[Seat; N] {
        &self.seats
    }
    pub fn hand(&self, seat: Position) -> &Hand {
        self.seats[seat].hand()
    }
    pub fn reserve(&self) -> &Hand {
        &self.reserve
    }
    pub fn stack(&self) -> &Stack {
        &self.stack
    }
    pub fn auction(&self) -> &Auction {
        &self.auction
    }
    pub fn times(&self) -> Times {
        self.times
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn landlord(&self) -> Option<Position> {
        self.landlord
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    pub fn settlement(&self) -> Option<Settlement> {
        self.settlement
    }
    /// Every card is accounted for exactly once across hands, the stack and
    /// (until someone takes it) the reserve.
    pub fn census(&self) -> anyhow::Result<()> {
        let mut cards = self
            .seats
            .iter()
            .flat_map(|s| s.hand().cards().iter())
            .chain(self.stack.cards())
            .copied()
            .collect::<Vec<Card>>();
        if self.landlord.is_none() {
            cards.extend_from_slice(self.reserve.cards());
        }
        let mask = cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b);
        anyhow::ensure!(cards.len() == DECK, "{} cards on the table", cards.len());
        anyhow::ensure!(mask.count_ones() as usize == DECK, "duplicate cards on the table");
        Ok(())
    }
}
