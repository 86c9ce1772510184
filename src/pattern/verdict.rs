use super::shape::Shape;
use crate::Times;
use crate::cards::Card;
use crate::cards::Piles;

/// The outcome of judging a candidate play against the table.
///
/// - `shape`: the candidate's own classification
/// - `outranks`: whether the candidate may be placed on top of the table
/// - `times`: the multiplier the table's stake picks up if it is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict {
    shape: Shape,
    outranks: bool,
    times: Times,
}

impl Verdict {
    /// Judges a candidate against the current top play.
    ///
    /// Invalid never wins and the rocket beats everything but itself. A bomb beats every
    /// other shape and meets another bomb on rank. Otherwise shapes must
    /// match, pile sizes must line up position by position, and the
    /// candidate's anchor rank must be strictly higher.
    pub fn compare(candidate: &Piles, table: &Piles) -> Self {
        let lhs = Shape::from(candidate);
        let rhs = Shape::from(table);
        let outranks = match (lhs, rhs) {
            (Shape::Invalid, _) => false,
            (_, Shape::Invalid) => true,
            (Shape::Rocket, Shape::Rocket) => false,
            (Shape::Rocket, _) => true,
            (_, Shape::Rocket) => false,
            (Shape::Bomb, r) if r != Shape::Bomb => true,
            (l, r) if l != r => false,
            _ => candidate.aligns(table) && candidate.anchor() > table.anchor(),
        };
        Self::from((lhs, outranks))
    }
    /// Judges a candidate that leads a fresh trick: any legal shape goes.
    pub fn lead(candidate: &Piles) -> Self {
        let shape = Shape::from(candidate);
        Self::from((shape, shape != Shape::Invalid))
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn outranks(&self) -> bool {
        self.outranks
    }
    pub fn times(&self) -> Times {
        self.times
    }
}

impl From<(Shape, bool)> for Verdict {
    fn from((shape, outranks): (Shape, bool)) -> Self {
        Self {
            shape,
            outranks,
            times: shape.times(),
        }
    }
}

/// Judges raw cards: `(candidate, table)`.
impl From<(&[Card], &[Card])> for Verdict {
    fn from((candidate, table): (&[Card], &[Card])) -> Self {
        Self::compare(&Piles::from(candidate), &Piles::from(table))
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.outranks {
            true => write!(f, "{} x{}", self.shape, self.times),
            false => write!(f, "{} does not beat the table", self.shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::cards::Rank;

    fn verdict(candidate: &str, table: &str) -> Verdict {
        let candidate = Hand::try_from(candidate).unwrap();
        let table = Hand::try_from(table).unwrap();
        Verdict::from((candidate.cards(), table.cards()))
    }

    #[test]
    fn higher_pair_beats_lower_pair() {
        assert!(!verdict("6 6", "7 7").outranks());
        assert!(verdict("8 8", "7 7").outranks());
        assert_eq!(verdict("8 8", "7 7").shape(), Shape::Pair);
    }

    #[test]
    fn self_comparison_never_outranks() {
        let plays = [
            "3",
            "9 9",
            "Q Q Q 4",
            "3 4 5 6 7",
            "6 6 6 6",
            "3 3 3 4 4 4 8 9",
            ":) :D",
        ];
        for s in plays {
            assert!(!verdict(s, s).outranks(), "{}", s);
        }
    }

    #[test]
    fn antisymmetric_on_anchor() {
        let ranks = Rank::all().filter(|r| !r.is_joker()).collect::<Vec<_>>();
        for a in ranks.iter() {
            for b in ranks.iter() {
                let a = format!("{} {}", a, a);
                let b = format!("{} {}", b, b);
                assert!(!(verdict(&a, &b).outranks() && verdict(&b, &a).outranks()));
            }
        }
    }

    #[test]
    fn rocket_beats_every_bomb() {
        for rank in Rank::all().filter(|r| !r.is_joker()) {
            let bomb = vec![rank.to_string(); 4].join(" ");
            assert!(verdict(":) :D", &bomb).outranks());
            assert!(!verdict(&bomb, ":) :D").outranks());
        }
    }

    #[test]
    fn bomb_beats_every_ordinary_shape() {
        for table in ["2", ":D", "2 2", "A A A K", "10 J Q K A", "K K K A A A 3 4", "2 2 2 2 3 4"] {
            let v = verdict("3 3 3 3", table);
            assert!(v.outranks(), "{}", table);
            assert_eq!(v.times(), 2);
        }
    }

    #[test]
    fn bombs_meet_on_rank() {
        assert!(verdict("9 9 9 9", "8 8 8 8").outranks());
        assert!(!verdict("8 8 8 8", "9 9 9 9").outranks());
    }

    #[test]
    fn different_shapes_do_not_compete() {
        assert!(!verdict("9 9 9", "3 3").outranks());
        assert!(!verdict("4 5 6 7 8 9", "3 4 5 6 7").outranks());
        assert!(!verdict("3 3 3 3 4 5", "2").outranks());
    }

    #[test]
    fn runs_compare_by_lowest_rung() {
        assert!(verdict("4 5 6 7 8", "3 4 5 6 7").outranks());
        assert!(!verdict("3 4 5 6 7", "4 5 6 7 8").outranks());
    }

    #[test]
    fn kickers_do_not_count() {
        assert!(verdict("5 5 5 3", "4 4 4 A").outranks());
        assert!(!verdict("4 4 4 A", "5 5 5 3").outranks());
    }

    #[test]
    fn invalid_never_wins() {
        let v = verdict("3 5", "");
        assert_eq!(v.shape(), Shape::Invalid);
        assert!(!v.outranks());
    }

    #[test]
    fn anything_legal_beats_an_empty_table() {
        assert!(verdict("3", "").outranks());
    }

    #[test]
    fn lead_bypasses_comparison() {
        let piles = Hand::try_from("3 3").unwrap().piles();
        assert!(Verdict::lead(&piles).outranks());
        let piles = Hand::try_from("3 4").unwrap().piles();
        assert!(!Verdict::lead(&piles).outranks());
    }
}
