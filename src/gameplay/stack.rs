use super::play::Play;
use crate::cards::Card;

/// Append-only history of the round's plays and passes.
///
/// Every non-pass play was either a fresh lead or beat the non-pass play
/// before it. The "top" of the table is the most recent non-pass play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack(Vec<Play>);

impl Stack {
    pub fn push(&mut self, play: Play) {
        self.0.push(play);
    }
    /// The play to beat, skipping over passes.
    pub fn top(&self) -> Option<&Play> {
        self.0.iter().rev().find(|p| !p.is_pass())
    }
    /// Most recent entry, pass or not.
    pub fn last(&self) -> Option<&Play> {
        self.0.last()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Play> {
        self.0.iter()
    }
    /// Every card discarded so far this round.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.0.iter().flat_map(|p| p.cards().iter())
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}
