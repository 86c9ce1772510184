/// Which side of the table a seat plays for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Role {
    #[default]
    Peasant,
    Landlord,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Role::Peasant => write!(f, "-"),
            Role::Landlord => write!(f, "*"),
        }
    }
}
