//! Three-seat landlord climbing game.
//!
//! One 54-card deck is dealt to three seats plus a 3-card reserve. Seats bid
//! to become the landlord (who takes the reserve and plays alone), then take
//! turns discarding card combinations that beat the table until someone
//! empties their hand.
//!
//! ## Modules
//!
//! - [`cards`]: ranks, suits, cards, the deck, hands and rank piles
//! - [`pattern`]: shape classification and play comparison
//! - [`search`]: exhaustive candidate generation for automated seats
//! - [`gameplay`]: the board, which owns bidding, turns and scoring
//! - [`gameroom`]: external collaborators and the cooperative step engine
//! - [`players`]: robot brains and console players
pub mod cards;
pub mod gameplay;
pub mod gameroom;
pub mod pattern;
pub mod players;
pub mod search;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table.
pub type Position = usize;
/// Running score and score deltas.
pub type Points = i32;
/// Stake multiplier accumulated by bombs and rockets.
pub type Times = u32;
/// Heuristic weight of cards and candidates. Lower is cheaper.
pub type Weight = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 3;
/// Cards dealt to each seat before bidding.
pub const HAND: usize = 17;
/// Cards held back for the landlord.
pub const RESERVE: usize = 3;
/// Cards in the deck, two jokers included.
pub const DECK: usize = N * HAND + RESERVE;
/// Highest demand a seat may make. Demanding it ends bidding at once.
pub const MAX_DEMAND: u8 = 3;
/// Base stake settled per round, before the multiplier.
pub const STAKE: Points = 1;
/// Score every seat starts the session with.
pub const SCORE: Points = 100;
/// Seat whose side decides whether a finished round reads as Won or Lost.
pub const HERO: Position = 0;

// ============================================================================
// ROBOT HEURISTICS
// Candidates are scored and the cheapest legal play is chosen.
// ============================================================================
/// Demand by appraisal rank: strongest hand (with the reserve) first.
/// The strongest hand bids low and leaves the landlord seat to the others.
pub const ROBOT_DEMANDS: [u8; N] = [1, 3, 3];
/// Score per rarity tier of the candidate's shape.
pub const TIER_WEIGHT: Weight = 8;
/// Score rebate per "2" consumed, so robots don't sit on them forever.
pub const TWO_REBATE: Weight = 144;
/// Score per card left in hand after the candidate is played.
pub const LEFTOVER_WEIGHT: Weight = 13;
/// Hold back on a teammate's play that has at least this many cards.
pub const HOLDBACK_CARDS: usize = 4;
/// Hold back on a teammate's play while an opponent has at most this many cards.
pub const HOLDBACK_DANGER: usize = 2;
/// Pacing between robot decisions when a human is watching.
pub const ROBOT_DELAY: std::time::Duration = std::time::Duration::from_millis(600);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the table stays readable.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
