use crate::HERO;
use crate::gameroom::Snapshot;
use crate::gameroom::Writer;
use colored::Colorize;

/// Colored console output.
///
/// Other seats' hands stay hidden until the round is over, unless the
/// console is revealing everything (for watching robots play).
#[derive(Debug, Default)]
pub struct Console {
    reveal: bool,
}

impl From<bool> for Console {
    fn from(reveal: bool) -> Self {
        Self { reveal }
    }
}

impl Writer for Console {
    fn splitter(&mut self) {
        println!("{}", "-".repeat(56).dimmed());
    }
    fn bye(&mut self) {
        println!("{}", "bye".bold());
    }
    fn win(&mut self) {
        println!("{}", "YOU WIN".green().bold());
    }
    fn lose(&mut self) {
        println!("{}", "YOU LOSE".red().bold());
    }
    fn reject(&mut self, reason: &str) {
        println!("{}", reason.yellow());
    }
    fn announce(&mut self, notice: &str) {
        println!("{}", notice.cyan());
    }
    fn dump(&mut self, snapshot: &Snapshot) {
        let mut snapshot = snapshot.clone();
        if !self.reveal && !snapshot.phase.is_terminal() {
            for seat in snapshot.seats.iter_mut().filter(|s| s.position != HERO) {
                seat.hand = vec!["##".to_string(); seat.hand.len()];
            }
        }
        println!("{}", snapshot);
    }
}
