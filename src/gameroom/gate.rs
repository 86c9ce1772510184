use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Readiness of a seat to act, polled once per engine step.
///
/// An unready gate just means "try again next step". Nothing times out.
pub trait Gate {
    fn ready(&mut self) -> bool;
}

/// Headless play and blocking console input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Gate for Always {
    fn ready(&mut self) -> bool {
        true
    }
}

/// Ready once a fixed pause has passed since the first poll, so a watching
/// human can follow robot play.
#[derive(Debug, Clone)]
pub struct Delay {
    pause: Duration,
    since: Option<Instant>,
}

impl From<Duration> for Delay {
    fn from(pause: Duration) -> Self {
        Self { pause, since: None }
    }
}

impl Gate for Delay {
    fn ready(&mut self) -> bool {
        let since = *self.since.get_or_insert_with(Instant::now);
        match since.elapsed() >= self.pause {
            true => {
                self.since = None;
                true
            }
            false => false,
        }
    }
}

/// Ready when someone outside the engine raises the flag. Each raise lets
/// exactly one step through.
#[derive(Debug, Clone, Default)]
pub struct Flag(Arc<AtomicBool>);

impl Flag {
    /// Handle for whoever raises the flag.
    pub fn handle(&self) -> Arc<AtomicBool> {
        self.0.clone()
    }
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }
}

impl Gate for Flag {
    fn ready(&mut self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}
