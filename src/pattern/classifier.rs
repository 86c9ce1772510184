use super::shape::Shape;
use crate::cards::Card;
use crate::cards::Pile;
use crate::cards::Piles;
use crate::cards::Rank;

/// Classifies a grouped play into its [`Shape`].
///
/// Classification looks only at the multiset of pile sizes plus rank
/// contiguity; suits never matter. The function is total: anything that
/// matches no pattern is `Shape::Invalid`.
pub struct Classifier<'p>(&'p Piles);

impl<'p> From<&'p Piles> for Classifier<'p> {
    fn from(piles: &'p Piles) -> Self {
        Self(piles)
    }
}

impl Classifier<'_> {
    pub fn classify(&self) -> Shape {
        match self.0.len() {
            0 => Shape::Invalid,
            1 => self.find_n_oak(),
            _ => None
                .or_else(|| self.find_rocket())
                .or_else(|| self.find_triple_with())
                .or_else(|| self.find_bomb_with())
                .or_else(|| self.find_run())
                .unwrap_or(Shape::Invalid),
        }
    }

    fn piles(&self) -> &[Pile] {
        self.0.as_slice()
    }
    fn counts(&self) -> Vec<usize> {
        self.0.counts()
    }
    fn has_joker(&self) -> bool {
        self.piles().iter().any(|p| p.rank().is_joker())
    }

    fn find_n_oak(&self) -> Shape {
        match self.piles()[0].count() {
            1 => Shape::Single,
            2 => Shape::Pair,
            3 => Shape::Triple,
            4 => Shape::Bomb,
            n => unreachable!("pile of {} cards", n),
        }
    }
    fn find_rocket(&self) -> Option<Shape> {
        match self.piles() {
            [a, b] if a.rank() == Rank::Small && b.rank() == Rank::Big => {
                assert!(
                    a.count() == 1 && b.count() == 1,
                    "joker piles {} {} are impossible",
                    a,
                    b
                );
                Some(Shape::Rocket)
            }
            _ => None,
        }
    }
    fn find_triple_with(&self) -> Option<Shape> {
        if self.has_joker() {
            return None;
        }
        match self.counts().as_slice() {
            [3, 1] => Some(Shape::TripleSingle),
            [3, 2] => Some(Shape::TriplePair),
            _ => None,
        }
    }
    fn find_bomb_with(&self) -> Option<Shape> {
        if self.has_joker() {
            return None;
        }
        match self.counts().as_slice() {
            [4, 1, 1] => Some(Shape::BombSingles),
            [4, 2, 2] => Some(Shape::BombPairs),
            _ => None,
        }
    }
    /// Runs of singles, pairs or triples (with optional kickers).
    /// No pile anywhere may be a "2" or a joker.
    fn find_run(&self) -> Option<Shape> {
        if !self.piles().iter().all(|p| p.rank().is_runnable()) {
            return None;
        }
        let l = self.0.len();
        let n = self.piles()[0].count();
        let s = self.streak();
        let rest = &self.piles()[s..];
        match n {
            1 if s == l && l >= 5 => Some(Shape::Run),
            2 if s == l && l >= 3 => Some(Shape::RunPairs),
            3 if s == l => Some(Shape::RunTriples),
            3 if s >= 2 && s * 2 == l && rest.iter().all(|p| p.count() == 1) => {
                Some(Shape::RunTriplesSingles)
            }
            3 if s >= 2 && s * 2 == l && rest.iter().all(|p| p.count() == 2) => {
                Some(Shape::RunTriplesPairs)
            }
            _ => None,
        }
    }
    /// Length of the leading stretch of same-size piles with consecutive ranks.
    fn streak(&self) -> usize {
        let n = self.piles()[0].count();
        1 + self
            .piles()
            .windows(2)
            .take_while(|w| w[1].count() == n && w[0].rank().succ() == Some(w[1].rank()))
            .count()
    }
}

/// Shorthand for grouping and classifying raw cards.
impl From<&[Card]> for Shape {
    fn from(cards: &[Card]) -> Self {
        Classifier::from(&Piles::from(cards)).classify()
    }
}

impl From<&Piles> for Shape {
    fn from(piles: &Piles) -> Self {
        Classifier::from(piles).classify()
    }
}
