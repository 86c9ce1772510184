use super::outcome::Outcome;
use super::role::Role;
use crate::Points;
use crate::SCORE;
use crate::cards::Hand;

/// Per-seat state: cards held, side, bid and the last turn's outcome.
/// The running score survives between rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    hand: Hand,
    role: Role,
    demand: Option<u8>,
    outcome: Outcome,
    score: Points,
}

impl Default for Seat {
    fn default() -> Self {
        Self::from(SCORE)
    }
}

impl From<Points> for Seat {
    fn from(score: Points) -> Self {
        Self {
            hand: Hand::empty(),
            role: Role::Peasant,
            demand: None,
            outcome: Outcome::None,
            score,
        }
    }
}

impl Seat {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn demand(&self) -> Option<u8> {
        self.demand
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn is_landlord(&self) -> bool {
        self.role == Role::Landlord
    }

    pub fn deal(&mut self, hand: Hand) {
        self.hand = hand;
    }
    pub fn crown(&mut self) {
        self.role = Role::Landlord;
    }
    pub fn bid(&mut self, demand: u8) {
        self.demand = Some(demand);
    }
    pub fn record(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
    pub fn settle(&mut self, delta: Points) {
        self.score += delta;
    }
    /// Back to an empty seat, keeping the score.
    pub fn reset(&mut self) {
        *self = Self::from(self.score);
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {:>4} {:<8} {}",
            self.role,
            self.score,
            self.outcome.to_string(),
            self.hand
        )
    }
}
