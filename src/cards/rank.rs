use crate::Weight;

/// A card rank on the landlord strength scale.
///
/// Discriminants are the strength index `1..=15`: the faces `3` through `A`,
/// then `2` above the Ace, then the two jokers. Strength ordering is the
/// derived `Ord`. Only `3..=A` may appear in a run.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Rank {
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
    Two = 13,
    Small = 14,
    Big = 15,
}

impl Rank {
    pub const MIN: Self = Rank::Three;
    pub const MAX: Self = Rank::Big;

    /// Heuristic weights, a Fibonacci run indexed by strength.
    const WEIGHTS: [Weight; 15] = [
        1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987,
    ];

    /// All fifteen ranks in ascending strength.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=15).map(Self::from)
    }
    /// Ordering strength, identical to the rank index.
    pub fn strength(&self) -> u8 {
        *self as u8
    }
    /// Heuristic weight used by appraisal and candidate scoring only.
    pub fn weight(&self) -> Weight {
        Self::WEIGHTS[*self as usize - 1]
    }
    pub fn is_joker(&self) -> bool {
        matches!(self, Rank::Small | Rank::Big)
    }
    pub fn is_two(&self) -> bool {
        matches!(self, Rank::Two)
    }
    /// Jokers and the "2" can never rung a run or ride along as a kicker.
    pub fn is_runnable(&self) -> bool {
        !self.is_joker() && !self.is_two()
    }
    /// The next rank up, if any.
    pub fn succ(&self) -> Option<Self> {
        match self {
            Rank::Big => None,
            rank => Some(Self::from(rank.strength() + 1)),
        }
    }
    /// Parses whitespace-separated rank tokens.
    /// One unrecognized token rejects the whole input.
    pub fn parse(s: &str) -> anyhow::Result<Vec<Self>> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            13 => Rank::Two,
            14 => Rank::Small,
            15 => Rank::Big,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            ":)" => Ok(Rank::Small),
            ":D" => Ok(Rank::Big),
            other => Err(anyhow::anyhow!("unrecognized rank {:?}", other)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Small => ":)",
                Rank::Big => ":D",
            }
        )
    }
}
