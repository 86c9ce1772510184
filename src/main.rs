//! Landlord at the console
//!
//! You hold seat 0 against two robots.
//!
//! Options: --seed, --delay, --json, --watch

use clap::Parser;
use landlord::HERO;
use landlord::N;
use landlord::ROBOT_DELAY;
use landlord::gameroom::Always;
use landlord::gameroom::Delay;
use landlord::gameroom::Engine;
use landlord::gameroom::Writer;
use landlord::players::Brain;
use landlord::players::Console;
use landlord::players::Human;
use landlord::players::Json;
use std::time::Duration;

/// Pause between engine steps while a gate is closed.
const TICK: Duration = Duration::from_millis(10);

#[derive(Parser)]
#[command(author, version, about = "Play landlord against two robots", long_about = None)]
struct Args {
    /// Seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,
    /// Pause before each robot decision, in milliseconds
    #[arg(long, default_value_t = ROBOT_DELAY.as_millis() as u64)]
    delay: u64,
    /// Emit table state as JSON lines
    #[arg(long)]
    json: bool,
    /// Put a robot in your seat and show every hand
    #[arg(long)]
    watch: bool,
}

fn main() {
    landlord::log();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    match args.json {
        true => play(&args, seed, Json),
        false => play(&args, seed, Console::from(args.watch)),
    }
}

fn play<W: Writer>(args: &Args, seed: u64, writer: W) {
    let mut engine = Engine::new(Human, writer, seed);
    let delay = Duration::from_millis(args.delay);
    for seat in 0..N {
        engine.sit(seat, Brain::default(), Delay::from(delay));
    }
    if !args.watch {
        engine.sit(HERO, Brain::Human, Always);
    }
    while engine.step() {
        std::thread::sleep(TICK);
    }
}
