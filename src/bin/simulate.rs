//! Headless simulation
//!
//! Plays independent all-robot rounds in parallel, one seed per round, and
//! reports how the landlord fares.
//!
//! Options: --games, --seed

use clap::Parser;
use landlord::Times;
use landlord::gameplay::Role;
use landlord::gameroom::Engine;
use landlord::gameroom::Silent;
use landlord::players::Script;
use rayon::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Simulate all-robot landlord rounds", long_about = None)]
struct Args {
    /// Rounds to play
    #[arg(long, default_value_t = 10_000)]
    games: u64,
    /// First seed, incremented per round
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// What one finished round came to.
struct Round {
    landlord: bool,
    times: Times,
    plays: usize,
}

fn main() {
    landlord::log();
    let args = Args::parse();
    let start = std::time::Instant::now();
    let rounds = (args.seed..args.seed + args.games)
        .into_par_iter()
        .map(simulate)
        .collect::<Vec<Round>>();
    let n = rounds.len().max(1) as f64;
    let wins = rounds.iter().filter(|r| r.landlord).count() as f64;
    let times = rounds.iter().map(|r| r.times as f64).sum::<f64>();
    let plays = rounds.iter().map(|r| r.plays as f64).sum::<f64>();
    log::info!("simulated {} rounds in {:?}", rounds.len(), start.elapsed());
    println!("rounds          {:>8}", rounds.len());
    println!("landlord wins   {:>8.3}", wins / n);
    println!("mean multiplier {:>8.3}", times / n);
    println!("mean stack size {:>8.1}", plays / n);
}

fn simulate(seed: u64) -> Round {
    let mut engine = Engine::new(["y"].into_iter().collect::<Script>(), Silent, seed);
    engine.run();
    let board = engine.board();
    Round {
        landlord: board
            .winner()
            .is_some_and(|w| board.side(w) == Role::Landlord),
        times: board.times(),
        plays: board.stack().len(),
    }
}
