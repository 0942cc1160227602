/// Counting the cards that improve a hand.
mod outs;
/// Export `compute_outs` and its result.
pub use self::outs::{MAX_SAMPLE_OUTS, OutsResult, compute_outs};

/// Monte carlo equity against one random opponent.
mod equity;
/// Export the simulation, its builder and its results.
pub use self::equity::{
    DEFAULT_TRIALS, EquityResult, EquitySimulation, EquitySimulationBuilder, Outcome,
    OutcomeCounts, RngEquitySimulationBuilder, WAITING_FOR_FLOP, compute_equity,
};

/// The hand and board a player has picked so far.
mod table;
/// Export `Table`
pub use self::table::{BOARD_SIZE, HAND_SIZE, Street, Table};
