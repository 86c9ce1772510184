use super::gate::Always;
use super::gate::Gate;
use super::reader;
use super::reader::Answer;
use super::reader::Reader;
use super::snapshot::Snapshot;
use super::writer::Writer;
use crate::HERO;
use crate::N;
use crate::Position;
use crate::cards::Rank;
use crate::gameplay::Board;
use crate::gameplay::Outcome;
use crate::gameplay::Phase;
use crate::players::Brain;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Cooperative driver for a session of rounds.
///
/// Each call to [`step`](Self::step) makes at most one decision: the start
/// prompt, one seat's demand, or one seat's turn. A seat whose gate is not
/// ready simply gets polled again on the next step, and nothing committed
/// before that point is redone. A rejected decision leaves the same seat
/// on turn.
///
/// The start prompt and every human seat read from the single reader.
/// Robots never touch it.
pub struct Engine<R, W> {
    board: Board,
    reader: R,
    writer: W,
    brains: [Brain; N],
    gates: [Box<dyn Gate>; N],
    rng: SmallRng,
    halted: bool,
}

impl<R, W> Engine<R, W>
where
    R: Reader,
    W: Writer,
{
    /// Three robots behind always-open gates. Seat humans with
    /// [`sit`](Self::sit).
    pub fn new(reader: R, writer: W, seed: u64) -> Self {
        log::info!("session seed {}", seed);
        Self {
            board: Board::default(),
            reader,
            writer,
            brains: [Brain::default(); N],
            gates: std::array::from_fn(|_| Box::new(Always) as Box<dyn Gate>),
            rng: SmallRng::seed_from_u64(seed),
            halted: false,
        }
    }
    pub fn sit<G>(&mut self, seat: Position, brain: Brain, gate: G)
    where
        G: Gate + 'static,
    {
        self.brains[seat] = brain;
        self.gates[seat] = Box::new(gate);
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn writer(&self) -> &W {
        &self.writer
    }
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Advances by at most one decision. False once the session is over.
    pub fn step(&mut self) -> bool {
        if self.halted {
            return false;
        }
        match self.board.phase() {
            Phase::NotStarted | Phase::Won | Phase::Lost => self.ask_start(),
            Phase::Bidding => self.ask_demand(),
            Phase::Playing => self.ask_turn(),
        }
        !self.halted
    }
    /// Steps until the session halts.
    pub fn run(&mut self) {
        while self.step() {}
    }
}

impl<R, W> Engine<R, W>
where
    R: Reader,
    W: Writer,
{
    fn ask_start(&mut self) {
        if !self.gates[HERO].ready() {
            return;
        }
        match Answer::from(self.reader.start().as_str()) {
            Answer::Start => {
                self.board.begin(&mut self.rng);
                log::info!("new round");
                self.writer.splitter();
                self.dump();
            }
            Answer::Quit => {
                self.halted = true;
                self.writer.bye();
            }
            Answer::Unclear => {}
        }
    }
    fn ask_demand(&mut self) {
        let Some(seat) = self.board.bidder() else {
            return;
        };
        if !self.gates[seat].ready() {
            return;
        }
        let demand = match &self.brains[seat] {
            Brain::Robot(robot) => Ok(robot.demand(&self.board, seat)),
            Brain::Human => reader::demand(&self.reader.demand()),
        };
        match demand.and_then(|d| self.board.demand(seat, d).map(|_| d)) {
            Ok(d) => {
                self.writer
                    .announce(&format!("{}@{} demands {}", self.brains[seat], seat, d));
                if let Some(landlord) = self.board.landlord() {
                    self.writer.announce(&format!(
                        "{}@{} is the landlord",
                        self.brains[landlord], landlord
                    ));
                    self.writer.splitter();
                    self.dump();
                }
            }
            Err(e) => {
                log::warn!("seat {} demand refused: {}", seat, e);
                self.writer.reject(&e.to_string());
            }
        }
    }
    fn ask_turn(&mut self) {
        let Some(seat) = self.board.actor() else {
            return;
        };
        if !self.gates[seat].ready() {
            return;
        }
        let result = match &self.brains[seat] {
            Brain::Robot(robot) => {
                let proposal = robot.think(&self.board, seat);
                match self.board.apply(seat, proposal.clone()) {
                    Ok(outcome) => Ok(outcome),
                    Err(e) => panic!("robot at seat {} proposed {}: {}", seat, proposal, e),
                }
            }
            Brain::Human => {
                let prompt = format!(
                    "{}@{} {} to {}",
                    self.brains[seat],
                    seat,
                    self.board.hand(seat),
                    self.board.requirement(seat)
                );
                let input = self.reader.turn(&prompt);
                match Rank::parse(&input) {
                    Ok(ranks) => self.board.play(seat, &ranks),
                    Err(e) => {
                        self.board.reject(seat);
                        Err(e)
                    }
                }
            }
        };
        match result {
            Ok(outcome) => self.conclude(seat, outcome),
            Err(e) => {
                log::warn!("seat {} turn refused: {}", seat, e);
                self.writer.reject(&e.to_string());
            }
        }
    }
    fn conclude(&mut self, seat: Position, outcome: Outcome) {
        let notice = match self.board.stack().last() {
            Some(play) if outcome != Outcome::Passed => {
                format!("{}@{} plays {}", self.brains[seat], seat, play)
            }
            _ => format!("{}@{} passes", self.brains[seat], seat),
        };
        self.writer.announce(&notice);
        self.writer.splitter();
        self.dump();
        match self.board.phase() {
            Phase::Won => self.writer.win(),
            Phase::Lost => self.writer.lose(),
            _ => {}
        }
    }
    fn dump(&mut self) {
        let snapshot = Snapshot::from(&self.board);
        self.writer.dump(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameroom::Flag;
    use crate::gameroom::Transcript;
    use crate::players::Script;

    fn headless(lines: &[&str], seed: u64) -> Engine<Script, Transcript> {
        Engine::new(lines.iter().collect(), Transcript::default(), seed)
    }

    #[test]
    fn robots_finish_a_round() {
        let mut engine = headless(&["y"], 7);
        let mut steps = 0;
        while engine.step() {
            steps += 1;
            assert!(steps < 10_000, "round never ended");
            if engine.board().phase() == Phase::Playing {
                assert!(engine.board().census().is_ok());
            }
        }
        let board = engine.board();
        assert!(board.phase().is_terminal());
        assert!(board.winner().is_some_and(|w| board.hand(w).is_empty()));
        let scores = board.seats().iter().map(|s| s.score()).sum::<crate::Points>();
        assert_eq!(scores, crate::SCORE * N as crate::Points);
        assert!(engine.writer().contains("bye"));
    }

    #[test]
    fn many_seeds_settle_cleanly() {
        for seed in 0..32 {
            let mut engine = headless(&["y", "y", "y"], seed);
            engine.run();
            let board = engine.board();
            assert!(board.phase().is_terminal(), "seed {}", seed);
            let hero = board.settlement().map(|s| s.delta(HERO));
            match board.phase() {
                Phase::Won => assert!(hero.is_some_and(|d| d > 0)),
                Phase::Lost => assert!(hero.is_some_and(|d| d < 0)),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn quitting_at_the_start_prompt_halts() {
        let mut engine = headless(&["maybe", "n"], 1);
        assert!(engine.step());
        assert_eq!(engine.board().phase(), Phase::NotStarted);
        assert!(!engine.step());
        assert!(engine.is_halted());
        assert!(!engine.step());
        assert_eq!(engine.writer().lines(), ["bye".to_string()]);
    }

    #[test]
    fn unready_gate_suspends_without_side_effects() {
        let mut engine = headless(&["y"], 3);
        let flag = Flag::default();
        engine.sit(HERO, Brain::default(), flag.clone());
        engine.step();
        assert_eq!(engine.board().phase(), Phase::NotStarted);
        flag.raise();
        engine.step();
        assert_eq!(engine.board().phase(), Phase::Bidding);
        assert_eq!(engine.board().bidder(), Some(HERO));
        let before = engine.writer().lines().len();
        engine.step();
        engine.step();
        assert_eq!(engine.board().bidder(), Some(HERO));
        assert_eq!(engine.writer().lines().len(), before);
        flag.raise();
        engine.step();
        assert_ne!(engine.board().bidder(), Some(HERO));
    }

    #[test]
    fn human_input_is_rejected_and_asked_again() {
        let lines = ["y", "9", "3", "bogus", "", "ZZ"];
        let mut engine = headless(&lines, 5);
        engine.sit(HERO, Brain::Human, Always);
        engine.step();
        engine.step();
        assert!(engine.writer().lines().iter().any(|l| l.starts_with("reject")));
        assert_eq!(engine.board().bidder(), Some(HERO));
        engine.step();
        assert_eq!(engine.board().landlord(), Some(HERO));
        assert_eq!(engine.board().actor(), Some(HERO));
        for _ in 0..3 {
            engine.step();
            assert_eq!(engine.board().actor(), Some(HERO));
            assert_eq!(engine.board().seats()[HERO].outcome(), Outcome::Invalid);
        }
        assert!(engine.board().stack().is_empty());
    }

    #[test]
    fn human_plays_a_scripted_single() {
        let mut engine = headless(&["y", "3"], 11);
        engine.sit(HERO, Brain::Human, Always);
        engine.step();
        engine.step();
        let lowest = engine.board().hand(HERO).cards()[0].rank();
        let mut engine = headless(&["y", "3", lowest.to_string().as_str()], 11);
        engine.sit(HERO, Brain::Human, Always);
        engine.step();
        engine.step();
        engine.step();
        let top = engine.board().stack().top().map(|p| (p.owner(), p.cards()[0].rank()));
        assert_eq!(top, Some((HERO, lowest)));
        assert_eq!(engine.board().actor(), Some(1));
    }
}
