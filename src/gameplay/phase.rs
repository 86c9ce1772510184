/// Where the board is in its lifecycle.
///
/// `Won` and `Lost` are read from [`HERO`](crate::HERO)'s side of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    Bidding,
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not started"),
            Phase::Bidding => write!(f, "bidding"),
            Phase::Playing => write!(f, "playing"),
            Phase::Won => write!(f, "won"),
            Phase::Lost => write!(f, "lost"),
        }
    }
}
