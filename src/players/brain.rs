use super::robot::Robot;

/// Who makes a seat's decisions.
#[derive(Debug, Clone, Copy)]
pub enum Brain {
    /// Answers come from the engine's reader.
    Human,
    Robot(Robot),
}

impl Default for Brain {
    fn default() -> Self {
        Brain::Robot(Robot)
    }
}

impl Brain {
    pub fn is_human(&self) -> bool {
        matches!(self, Brain::Human)
    }
}

impl std::fmt::Display for Brain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Brain::Human => write!(f, "YOU"),
            Brain::Robot(robot) => write!(f, "{}", robot),
        }
    }
}
