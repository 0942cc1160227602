//! holdem_odds estimates how often a texas hold'em hand wins, ties or
//! loses against one random opponent.
//!
//! The `core` module ranks hands: it finds the best five cards out of
//! up to seven and gives them a score where higher always wins. The
//! `holdem` module builds on that to count outs and to run the monte
//! carlo equity simulation.
//!
//! ```
//! use holdem_odds::core::Hand;
//! use holdem_odds::holdem::compute_equity;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let hand = Hand::new_from_str("AsAh").unwrap();
//! let board = Hand::new_from_str("Ad7c2s").unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let result = compute_equity(&hand, &board, 1_000, &mut rng).unwrap();
//!
//! assert!(result.win_pct > 80.0);
//! assert_eq!("Three of a Kind", result.current_hand_name());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core is about cards and ranking.
pub mod core;
/// Outs, equity simulation and the table state.
pub mod holdem;
