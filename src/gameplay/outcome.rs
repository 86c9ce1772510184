use crate::pattern::Shape;

/// What a seat's last turn came to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    #[default]
    None,
    Passed,
    Invalid,
    Played(Shape),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::None => write!(f, "-"),
            Outcome::Passed => write!(f, "pass"),
            Outcome::Invalid => write!(f, "invalid"),
            Outcome::Played(shape) => write!(f, "{}", shape),
        }
    }
}
