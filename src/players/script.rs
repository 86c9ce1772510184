use crate::gameroom::Reader;
use std::collections::VecDeque;

/// Canned answers, consumed in order by whichever prompt comes next.
///
/// Once the lines run out every prompt reads blank, except the start prompt,
/// which reads "n" so a scripted session always ends.
#[derive(Debug, Clone, Default)]
pub struct Script(VecDeque<String>);

impl Script {
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
    fn next(&mut self) -> Option<String> {
        self.0.pop_front()
    }
}

impl<S: ToString> FromIterator<S> for Script {
    fn from_iter<I: IntoIterator<Item = S>>(lines: I) -> Self {
        Self(lines.into_iter().map(|s| s.to_string()).collect())
    }
}

impl Reader for Script {
    fn start(&mut self) -> String {
        self.next().unwrap_or_else(|| "n".to_string())
    }
    fn demand(&mut self) -> String {
        self.next().unwrap_or_default()
    }
    fn turn(&mut self, prompt: &str) -> String {
        let line = self.next().unwrap_or_default();
        log::debug!("{} > {}", prompt, line);
        line
    }
}
