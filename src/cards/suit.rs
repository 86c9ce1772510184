/// Card suit. Jokers carry `Joker`; suit never affects legality or strength.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    Joker = 0,
    Heart = 1,
    Diamond = 2,
    Club = 3,
    Spade = 4,
}

impl Suit {
    /// The four playing suits.
    pub const fn all() -> [Self; 4] {
        [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Joker,
            1 => Suit::Heart,
            2 => Suit::Diamond,
            3 => Suit::Club,
            4 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Joker => "",
                Suit::Heart => "♥",
                Suit::Diamond => "♦",
                Suit::Club => "♣",
                Suit::Spade => "♠",
            }
        )
    }
}
