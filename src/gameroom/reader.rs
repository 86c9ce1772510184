use crate::MAX_DEMAND;

/// Source of typed input for a human seat.
///
/// Every answer is raw text. Empty or malformed text is never fatal: the
/// engine turns it into a safe default or asks again.
pub trait Reader {
    /// Whether to deal a new round.
    fn start(&mut self) -> String;
    /// A landlord demand.
    fn demand(&mut self) -> String;
    /// Rank tokens to discard, nothing for a pass.
    fn turn(&mut self, prompt: &str) -> String;
}

/// How an answer to the start prompt reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Start,
    Quit,
    Unclear,
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" | "true" => Answer::Start,
            "n" | "no" | "false" => Answer::Quit,
            _ => Answer::Unclear,
        }
    }
}

/// Reads a demand. Blank or non-numeric input demands nothing; a number
/// outside `0..=MAX_DEMAND` is refused so it can be asked again.
pub fn demand(s: &str) -> anyhow::Result<u8> {
    match s.trim().parse::<i32>() {
        Err(_) => Ok(0),
        Ok(n) if (0..=MAX_DEMAND as i32).contains(&n) => Ok(n as u8),
        Ok(n) => Err(anyhow::anyhow!("demand {} is not between 0 and {}", n, MAX_DEMAND)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert_eq!(Answer::from("Y"), Answer::Start);
        assert_eq!(Answer::from(" yes "), Answer::Start);
        assert_eq!(Answer::from("n"), Answer::Quit);
        assert_eq!(Answer::from(""), Answer::Unclear);
        assert_eq!(Answer::from("maybe"), Answer::Unclear);
    }

    #[test]
    fn demands() {
        assert_eq!(demand("").unwrap(), 0);
        assert_eq!(demand("lots").unwrap(), 0);
        assert_eq!(demand(" 2 ").unwrap(), 2);
        assert!(demand("4").is_err());
        assert!(demand("-1").is_err());
    }
}
