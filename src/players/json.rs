use crate::gameroom::Snapshot;
use crate::gameroom::Writer;

/// One JSON object per line on stdout, for piping into other tools.
#[derive(Debug, Default)]
pub struct Json;

impl Json {
    fn emit(value: serde_json::Value) {
        println!("{}", value);
    }
}

impl Writer for Json {
    fn splitter(&mut self) {}
    fn bye(&mut self) {
        Self::emit(serde_json::json!({ "event": "bye" }));
    }
    fn win(&mut self) {
        Self::emit(serde_json::json!({ "event": "win" }));
    }
    fn lose(&mut self) {
        Self::emit(serde_json::json!({ "event": "lose" }));
    }
    fn reject(&mut self, reason: &str) {
        Self::emit(serde_json::json!({ "event": "reject", "reason": reason }));
    }
    fn announce(&mut self, notice: &str) {
        Self::emit(serde_json::json!({ "event": "announce", "notice": notice }));
    }
    fn dump(&mut self, snapshot: &Snapshot) {
        Self::emit(serde_json::json!({ "event": "dump", "snapshot": snapshot }));
    }
}
