use crate::Times;

/// The closed taxonomy of legal card combinations.
///
/// Variants are declared in rarity order, so the derived `Ord` and
/// [`tier`](Self::tier) agree: `Invalid` lowest, `Rocket` highest. Rarity is
/// a coarse ordering used by the robot heuristic; whether one play beats
/// another is decided by [`Verdict`](super::Verdict), not by this order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Shape {
    Invalid,
    Single,
    Pair,
    Triple,
    TripleSingle,
    TriplePair,
    Run,
    RunPairs,
    RunTriples,
    RunTriplesSingles,
    RunTriplesPairs,
    BombSingles,
    BombPairs,
    Bomb,
    Rocket,
}

impl Shape {
    /// Shapes in the order a free lead searches them, most restrictive first.
    pub const fn leads() -> [Self; 14] {
        [
            Shape::Rocket,
            Shape::Bomb,
            Shape::BombPairs,
            Shape::BombSingles,
            Shape::RunTriplesPairs,
            Shape::RunTriplesSingles,
            Shape::RunTriples,
            Shape::RunPairs,
            Shape::Run,
            Shape::TriplePair,
            Shape::TripleSingle,
            Shape::Triple,
            Shape::Pair,
            Shape::Single,
        ]
    }
    /// Coarse rarity, 0 for `Invalid` up to 14 for `Rocket`.
    pub fn tier(&self) -> u32 {
        *self as u32
    }
    /// Contribution to the table's stake multiplier when played.
    pub fn times(&self) -> Times {
        match self {
            Shape::Bomb | Shape::Rocket => 2,
            _ => 1,
        }
    }
    /// Bombs and the rocket answer any shape.
    pub fn overrides(&self) -> bool {
        matches!(self, Shape::Bomb | Shape::Rocket)
    }
    /// Cards per pile in the body of the shape.
    pub fn width(&self) -> usize {
        match self {
            Shape::Invalid | Shape::Rocket => 0,
            Shape::Single | Shape::Run => 1,
            Shape::Pair | Shape::RunPairs => 2,
            Shape::Triple
            | Shape::TripleSingle
            | Shape::TriplePair
            | Shape::RunTriples
            | Shape::RunTriplesSingles
            | Shape::RunTriplesPairs => 3,
            Shape::Bomb | Shape::BombSingles | Shape::BombPairs => 4,
        }
    }
    /// Cards per kicker pile, 0 when the shape carries no kickers.
    pub fn kicker(&self) -> usize {
        match self {
            Shape::TripleSingle | Shape::BombSingles | Shape::RunTriplesSingles => 1,
            Shape::TriplePair | Shape::BombPairs | Shape::RunTriplesPairs => 2,
            _ => 0,
        }
    }
    /// Number of kicker piles attached to a body of `rungs` piles.
    pub fn kickers(&self, rungs: usize) -> usize {
        match self {
            Shape::TripleSingle | Shape::TriplePair => 1,
            Shape::BombSingles | Shape::BombPairs => 2,
            Shape::RunTriplesSingles | Shape::RunTriplesPairs => rungs,
            _ => 0,
        }
    }
    /// Fewest consecutive rungs for run shapes, `None` for everything else.
    pub fn minimum_run(&self) -> Option<usize> {
        match self {
            Shape::Run => Some(5),
            Shape::RunPairs => Some(3),
            Shape::RunTriples | Shape::RunTriplesSingles | Shape::RunTriplesPairs => Some(2),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Shape::Invalid => "Invalid",
                Shape::Single => "Single",
                Shape::Pair => "Pair",
                Shape::Triple => "Triple",
                Shape::TripleSingle => "Triple+1",
                Shape::TriplePair => "Triple+2",
                Shape::Bomb => "Bomb",
                Shape::BombSingles => "Bomb+1+1",
                Shape::BombPairs => "Bomb+2+2",
                Shape::Run => "Run",
                Shape::RunPairs => "Run*2",
                Shape::RunTriples => "Run*3",
                Shape::RunTriplesSingles => "Run*3+1",
                Shape::RunTriplesPairs => "Run*3+2",
                Shape::Rocket => "Rocket",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bombs_and_rockets_double() {
        for shape in Shape::leads() {
            let expected = if shape.overrides() { 2 } else { 1 };
            assert_eq!(shape.times(), expected, "{}", shape);
        }
        assert_eq!(Shape::BombSingles.times(), 1);
    }

    #[test]
    fn rarity_is_total() {
        assert!(Shape::Rocket > Shape::Bomb);
        assert!(Shape::Bomb > Shape::RunTriplesPairs);
        assert!(Shape::Single > Shape::Invalid);
        assert_eq!(Shape::Invalid.tier(), 0);
        assert_eq!(Shape::Rocket.tier(), 14);
    }

    #[test]
    fn leads_cover_every_legal_shape() {
        let mut leads = Shape::leads().to_vec();
        leads.sort();
        leads.dedup();
        assert_eq!(leads.len(), 14);
        assert!(!leads.contains(&Shape::Invalid));
    }
}
