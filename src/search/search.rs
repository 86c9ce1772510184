use super::candidate::Candidate;
use super::requirement::Requirement;
use crate::cards::Hand;
use crate::cards::Pile;
use crate::cards::Piles;
use crate::cards::Rank;
use crate::pattern::Shape;
use crate::pattern::Verdict;

/// Exhaustive candidate generation over one hand.
///
/// For each shape in play, walks the hand's piles upward from just above the
/// table's anchor and emits the minimal selection anchored at each qualifying
/// pile. Runs try every feasible length when leading and the table's length
/// when following. Kickers come from the smallest spare piles, never a "2",
/// a joker or a quad.
///
/// Every generated selection is judged by [`Verdict`] before it is kept, so
/// whatever comes out is playable as-is. Output is sorted cheapest first.
pub struct Search<'h> {
    hand: &'h Hand,
    piles: Piles,
    requirement: Requirement,
}

impl<'h> From<(&'h Hand, Requirement)> for Search<'h> {
    fn from((hand, requirement): (&'h Hand, Requirement)) -> Self {
        Self {
            hand,
            piles: hand.sequence(),
            requirement,
        }
    }
}

impl Search<'_> {
    pub fn candidates(&self) -> Vec<Candidate> {
        let mut candidates = self
            .shapes()
            .into_iter()
            .flat_map(|shape| self.generate(shape))
            .filter_map(|ranks| self.hand.pick(&ranks))
            .map(|cards| Candidate::from((cards, self.hand)))
            .filter(|candidate| self.admits(candidate))
            .collect::<Vec<Candidate>>();
        candidates.sort_by_key(|c| c.score());
        log::trace!("{} candidates to {}", candidates.len(), self.requirement);
        candidates
    }
    /// The cheapest admissible candidate, if any.
    pub fn best(&self) -> Option<Candidate> {
        self.candidates().into_iter().next()
    }

    fn shapes(&self) -> Vec<Shape> {
        match self.requirement.shape() {
            None => Shape::leads().to_vec(),
            Some(Shape::Invalid) => vec![],
            Some(Shape::Rocket) => vec![Shape::Rocket],
            Some(Shape::Bomb) => vec![Shape::Bomb, Shape::Rocket],
            Some(shape) => vec![shape, Shape::Bomb, Shape::Rocket],
        }
    }
    fn admits(&self, candidate: &Candidate) -> bool {
        let piles = candidate.piles();
        match &self.requirement {
            Requirement::Lead | Requirement::Shape(Shape::Invalid) => {
                Verdict::lead(&piles).outranks()
            }
            Requirement::Beat(table) => Verdict::compare(&piles, table).outranks(),
            Requirement::Shape(shape) => {
                let verdict = Verdict::lead(&piles);
                verdict.outranks() && (verdict.shape() == *shape || verdict.shape().overrides())
            }
        }
    }

    /// Rank selections for one shape. Each inner vec repeats a rank once per
    /// card wanted.
    fn generate(&self, shape: Shape) -> Vec<Vec<Rank>> {
        match shape {
            Shape::Invalid => vec![],
            Shape::Rocket => self.rocket(),
            s if s.minimum_run().is_some() => self.runs(s),
            s => self.n_oaks(s),
        }
    }
    fn rocket(&self) -> Vec<Vec<Rank>> {
        match self.piles.count(Rank::Small) > 0 && self.piles.count(Rank::Big) > 0 {
            true => vec![vec![Rank::Small, Rank::Big]],
            false => vec![],
        }
    }
    /// Singles, pairs, triples and quads, with kickers where the shape has them.
    fn n_oaks(&self, shape: Shape) -> Vec<Vec<Rank>> {
        let floor = self.floor(shape);
        self.piles
            .iter()
            .filter(|p| p.count() >= shape.width())
            .filter(|p| floor.map_or(true, |f| p.rank() > f))
            .filter_map(|p| self.attach(shape, &[p.rank()]))
            .collect()
    }
    /// Every run anchored at each qualifying pile, longest first when free.
    fn runs(&self, shape: Shape) -> Vec<Vec<Rank>> {
        let floor = self.floor(shape);
        let least = shape.minimum_run().unwrap_or(usize::MAX);
        let mut selections = Vec::new();
        for (i, pile) in self.piles.iter().enumerate() {
            if floor.is_some_and(|f| pile.rank() <= f) {
                continue;
            }
            let rungs = self.ladder(&self.piles.as_slice()[i..], shape.width());
            let lengths = match self.requirement.rungs() {
                Some(exact) => exact..=exact,
                None => least..=rungs.len(),
            };
            for length in lengths.rev().filter(|l| *l <= rungs.len()) {
                if let Some(ranks) = self.attach(shape, &rungs[..length]) {
                    selections.push(ranks);
                }
            }
        }
        selections
    }
    /// Consecutive runnable ranks from the front of `piles`, each held at
    /// least `width` times.
    fn ladder(&self, piles: &[Pile], width: usize) -> Vec<Rank> {
        let mut rungs = Vec::new();
        for pile in piles {
            let contiguous = rungs
                .last()
                .map_or(true, |r: &Rank| r.succ() == Some(pile.rank()));
            if !contiguous || pile.count() < width || !pile.rank().is_runnable() {
                break;
            }
            rungs.push(pile.rank());
        }
        rungs
    }
    /// Expands body ranks to full width and appends the shape's kickers.
    fn attach(&self, shape: Shape, body: &[Rank]) -> Option<Vec<Rank>> {
        let mut ranks = body
            .iter()
            .flat_map(|r| std::iter::repeat_n(*r, shape.width()))
            .collect::<Vec<Rank>>();
        let needed = shape.kickers(body.len());
        if needed > 0 {
            let kickers = self.kickers(body, shape.kicker());
            if kickers.len() < needed {
                return None;
            }
            for rank in kickers.into_iter().take(needed) {
                ranks.extend(std::iter::repeat_n(rank, shape.kicker()));
            }
        }
        Some(ranks)
    }
    /// Spare ranks able to ride along as kickers of the given size, smallest
    /// first, piles of exactly that size before larger ones.
    fn kickers(&self, body: &[Rank], size: usize) -> Vec<Rank> {
        let spare = self
            .piles
            .iter()
            .filter(|p| !body.contains(&p.rank()))
            .filter(|p| p.rank().is_runnable())
            .filter(|p| !p.is_quad())
            .filter(|p| p.count() >= size)
            .collect::<Vec<&Pile>>();
        let exact = spare.iter().filter(|p| p.count() == size);
        let loose = spare.iter().filter(|p| p.count() > size);
        exact.chain(loose).map(|p| p.rank()).collect()
    }
    /// Only the shape being followed is floored; bombs over a non-bomb and
    /// the rocket may be any rank.
    fn floor(&self, shape: Shape) -> Option<Rank> {
        match self.requirement.shape() {
            Some(s) if s == shape => self.requirement.floor(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }
    fn table(s: &str) -> Requirement {
        Requirement::from(hand(s).piles())
    }
    fn plays(hand: &Hand, requirement: Requirement) -> Vec<String> {
        Search::from((hand, requirement))
            .candidates()
            .iter()
            .map(|c| {
                c.cards()
                    .iter()
                    .map(|c| c.rank().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    #[test]
    fn triple_with_single_has_exactly_one_answer() {
        let h = hand("3 3 3 4");
        let found = plays(&h, Requirement::Shape(Shape::TripleSingle));
        assert_eq!(found, vec!["3 3 3 4".to_string()]);
    }

    #[test]
    fn invalid_shape_reads_as_a_free_lead() {
        let h = hand("3 3 7 :) :D");
        let free = plays(&h, Requirement::Lead);
        let invalid = plays(&h, Requirement::Shape(Shape::Invalid));
        assert!(!invalid.is_empty());
        assert_eq!(invalid, free);
    }

    #[test]
    fn follows_above_the_anchor() {
        let h = hand("3 5 7 9 J");
        let found = plays(&h, table("6"));
        assert_eq!(found, vec!["7", "9", "J"]);
    }

    #[test]
    fn pairs_answer_pairs() {
        let h = hand("6 6 8 8 8 9");
        let found = plays(&h, table("7 7"));
        assert_eq!(found, vec!["8 8"]);
    }

    #[test]
    fn bombs_answer_anything() {
        let h = hand("3 5 5 5 5");
        let found = plays(&h, table("2"));
        assert_eq!(found, vec!["5 5 5 5"]);
    }

    #[test]
    fn nothing_beats_the_rocket() {
        let h = hand("2 2 2 2 A A A A");
        assert!(plays(&h, table(":) :D")).is_empty());
    }

    #[test]
    fn rocket_is_offered_on_a_free_lead() {
        let h = hand(":) :D");
        let found = Search::from((&h, Requirement::Lead)).candidates();
        assert!(found.iter().any(|c| c.shape() == Shape::Rocket));
        assert!(found.iter().filter(|c| c.shape() == Shape::Single).count() == 2);
    }

    #[test]
    fn runs_match_length_when_following() {
        let h = hand("4 5 6 7 8 9 10");
        let found = plays(&h, table("3 4 5 6 7"));
        assert_eq!(found, vec!["4 5 6 7 8", "5 6 7 8 9", "6 7 8 9 10"]);
    }

    #[test]
    fn runs_try_every_length_when_leading() {
        let h = hand("3 4 5 6 7 8");
        let runs = Search::from((&h, Requirement::Shape(Shape::Run)))
            .candidates()
            .into_iter()
            .filter(|c| c.shape() == Shape::Run)
            .map(|c| c.cards().len())
            .collect::<Vec<_>>();
        assert_eq!(runs.len(), 3);
        assert!(runs.contains(&6));
        assert_eq!(runs.iter().filter(|n| **n == 5).count(), 2);
    }

    #[test]
    fn runs_never_reach_the_two() {
        let h = hand("10 J Q K A 2");
        let found = plays(&h, table("3 4 5 6 7"));
        assert_eq!(found, vec!["10 J Q K A"]);
    }

    #[test]
    fn kickers_skip_twos_and_jokers() {
        let h = hand("9 9 9 2 :)");
        assert!(plays(&h, Requirement::Shape(Shape::TripleSingle)).is_empty());
        let h = hand("9 9 9 2 :) 4");
        assert_eq!(plays(&h, Requirement::Shape(Shape::TripleSingle)), vec!["9 9 9 4"]);
    }

    #[test]
    fn kickers_prefer_exact_piles() {
        let h = hand("3 3 8 9 9 9 K");
        let found = plays(&h, Requirement::Shape(Shape::TripleSingle));
        assert_eq!(found, vec!["9 9 9 8"]);
    }

    #[test]
    fn triple_runs_with_kickers() {
        let h = hand("3 5 5 5 6 6 6 9");
        let found = plays(&h, Requirement::Shape(Shape::RunTriplesSingles));
        assert_eq!(found, vec!["5 5 5 6 6 6 3 9"]);
    }

    #[test]
    fn cheapest_first() {
        let h = hand("3 4 K");
        let found = Search::from((&h, Requirement::Lead)).candidates();
        let scores = found.iter().map(|c| c.score()).collect::<Vec<_>>();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(found[0].cards()[0].rank(), Rank::Three);
    }

    #[test]
    fn every_candidate_has_the_required_shape() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..64 {
            let mut deck = Deck::new();
            deck.shuffle(&mut rng);
            let (hands, _) = deck.deal();
            for shape in Shape::leads() {
                for c in Search::from((&hands[0], Requirement::Shape(shape))).candidates() {
                    assert!(c.shape() == shape || c.shape().overrides(), "{} for {}", c, shape);
                }
            }
        }
    }

    #[test]
    fn every_candidate_beats_the_table() {
        for _ in 0..64 {
            let deck = Deck::random();
            let (hands, _) = deck.deal();
            let lead = Search::from((&hands[1], Requirement::Lead)).best();
            let Some(lead) = lead else { continue };
            let top = lead.piles();
            for c in Search::from((&hands[0], Requirement::from(top.clone()))).candidates() {
                assert!(Verdict::compare(&c.piles(), &top).outranks());
                assert!(c.cards().iter().all(|card| hands[0].contains(card)));
            }
        }
    }
}
