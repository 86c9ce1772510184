use super::snapshot::Snapshot;

/// Sink for everything the table has to say. Fire and forget.
pub trait Writer {
    /// Separates one stretch of play from the next.
    fn splitter(&mut self);
    fn bye(&mut self);
    fn win(&mut self);
    fn lose(&mut self);
    /// A human's input was refused and will be asked for again.
    fn reject(&mut self, reason: &str);
    /// Demands, crowning, plays and passes.
    fn announce(&mut self, notice: &str);
    /// Full table state.
    fn dump(&mut self, snapshot: &Snapshot);
}

/// Keeps every line written, for headless runs and tests.
#[derive(Debug, Default)]
pub struct Transcript(Vec<String>);

impl Transcript {
    pub fn lines(&self) -> &[String] {
        &self.0
    }
    pub fn contains(&self, line: &str) -> bool {
        self.0.iter().any(|l| l == line)
    }
}

impl Writer for Transcript {
    fn splitter(&mut self) {
        self.0.push("--".to_string());
    }
    fn bye(&mut self) {
        self.0.push("bye".to_string());
    }
    fn win(&mut self) {
        self.0.push("win".to_string());
    }
    fn lose(&mut self) {
        self.0.push("lose".to_string());
    }
    fn reject(&mut self, reason: &str) {
        self.0.push(format!("reject {}", reason));
    }
    fn announce(&mut self, notice: &str) {
        self.0.push(notice.to_string());
    }
    fn dump(&mut self, snapshot: &Snapshot) {
        self.0.push(snapshot.to_string());
    }
}

/// Discards everything, for bulk simulation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Writer for Silent {
    fn splitter(&mut self) {}
    fn bye(&mut self) {}
    fn win(&mut self) {}
    fn lose(&mut self) {}
    fn reject(&mut self, _: &str) {}
    fn announce(&mut self, _: &str) {}
    fn dump(&mut self, _: &Snapshot) {}
}
