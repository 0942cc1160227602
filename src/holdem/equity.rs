use std::cmp::Ordering;
use std::ops::{Add, AddAssign};
use std::sync::Arc;
use std::sync::atomic::{self, AtomicBool};

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug_span, event};

use crate::core::{Card, Deck, FlatDeck, OddsError, ScoredHand, evaluate};

use super::outs::{OutsResult, compute_outs};

/// How many trials a simulation runs unless told otherwise.
pub const DEFAULT_TRIALS: usize = 10_000;

/// What `current_hand_name` says before there's a flop to rank.
pub const WAITING_FOR_FLOP: &str = "Waiting for flop";

/// The verdict of a single trial from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Running totals of trial outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeCounts {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    /// How many trials have been recorded.
    pub fn total(&self) -> usize {
        self.wins + self.ties + self.losses
    }
}

impl Add for OutcomeCounts {
    type Output = OutcomeCounts;

    fn add(self, rhs: Self) -> Self::Output {
        OutcomeCounts {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

impl AddAssign for OutcomeCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Everything a finished simulation found out.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    /// Percent of trials won, rounded to one decimal.
    pub win_pct: f64,
    /// Percent of trials tied, rounded to one decimal.
    pub tie_pct: f64,
    /// Percent of trials lost, rounded to one decimal.
    pub loss_pct: f64,
    pub trials: usize,
    pub counts: OutcomeCounts,
    /// The best hand made so far. Only set once the flop is out.
    pub current_hand: Option<ScoredHand>,
    /// Outs on the flop or the turn.
    pub outs: Option<OutsResult>,
}

impl EquityResult {
    pub fn current_hand_name(&self) -> &'static str {
        self.current_hand
            .as_ref()
            .map_or(WAITING_FOR_FLOP, ScoredHand::name)
    }
}

fn percent(count: usize, trials: usize) -> f64 {
    (count as f64 * 1000.0 / trials as f64).round() / 10.0
}

fn flag_set(cancel: Option<&Arc<AtomicBool>>) -> bool {
    cancel.is_some_and(|flag| flag.load(atomic::Ordering::Relaxed))
}

fn card_list(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect()
}

/// Play out one random board and opponent.
///
/// The deck is shuffled into a fresh copy, the board is completed from
/// the top of it and the next two cards go to the opponent.
fn play_trial<R: Rng>(
    hand: &[Card; 2],
    board: &[Card],
    deck: &FlatDeck,
    rng: &mut R,
) -> Result<Outcome, OddsError> {
    let shuffled = deck.shuffled(rng);
    let needed = 5 - board.len();

    let mut ours: Vec<Card> = Vec::with_capacity(7);
    ours.extend_from_slice(hand);
    ours.extend_from_slice(board);
    ours.extend_from_slice(&shuffled[..needed]);

    let mut theirs: Vec<Card> = Vec::with_capacity(7);
    theirs.extend_from_slice(&shuffled[needed..needed + 2]);
    theirs.extend_from_slice(&ours[2..]);

    let outcome = match evaluate(&ours)?.score.cmp(&evaluate(&theirs)?.score) {
        Ordering::Greater => Outcome::Win,
        Ordering::Equal => Outcome::Tie,
        Ordering::Less => Outcome::Loss,
    };
    Ok(outcome)
}

/// A ready to run equity simulation for one hand against one random
/// opponent. Create it with `EquitySimulationBuilder`.
#[derive(Debug)]
pub struct EquitySimulation<R: Rng> {
    hand: [Card; 2],
    board: Vec<Card>,
    /// Every card that isn't in the hand or on the board.
    deck: FlatDeck,
    trials: usize,
    rng: R,
    cancel: Option<Arc<AtomicBool>>,
}

impl<R: Rng> EquitySimulation<R> {
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// The cards still available to deal.
    pub fn remaining_deck(&self) -> &FlatDeck {
        &self.deck
    }

    fn is_cancelled(&self) -> bool {
        flag_set(self.cancel.as_ref())
    }

    /// Run a single trial.
    pub fn simulate(&mut self) -> Result<Outcome, OddsError> {
        play_trial(&self.hand, &self.board, &self.deck, &mut self.rng)
    }

    /// Run every trial in order on this thread.
    pub fn run(&mut self) -> Result<EquityResult, OddsError> {
        let span = debug_span!(
            "equity",
            hand = %card_list(&self.hand),
            board = %card_list(&self.board),
            trials = self.trials
        );
        let _enter = span.enter();

        let mut counts = OutcomeCounts::default();
        for _ in 0..self.trials {
            if self.is_cancelled() {
                break;
            }
            counts.record(self.simulate()?);
        }
        self.finish(counts)
    }

    /// Run the trials spread over the rayon thread pool.
    ///
    /// Each chunk of trials gets its own `StdRng` seeded from this
    /// simulation's rng and keeps its own counts; the counts are summed
    /// once every chunk is done.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&mut self) -> Result<EquityResult, OddsError> {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use rayon::prelude::*;

        let span = debug_span!(
            "equity_parallel",
            hand = %card_list(&self.hand),
            board = %card_list(&self.board),
            trials = self.trials
        );
        let _enter = span.enter();

        let num_chunks = rayon::current_num_threads().clamp(1, self.trials);
        let per_chunk = self.trials / num_chunks;
        let extra = self.trials % num_chunks;
        let chunks: Vec<(usize, u64)> = (0..num_chunks)
            .map(|i| (per_chunk + usize::from(i < extra), self.rng.random()))
            .collect();

        let (hand, board, deck) = (&self.hand, &self.board, &self.deck);
        let cancel = self.cancel.as_ref();
        let counts = chunks
            .into_par_iter()
            .map(|(num_trials, seed)| -> Result<OutcomeCounts, OddsError> {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut counts = OutcomeCounts::default();
                for _ in 0..num_trials {
                    if flag_set(cancel) {
                        break;
                    }
                    counts.record(play_trial(hand, board, deck, &mut rng)?);
                }
                Ok(counts)
            })
            .try_reduce(OutcomeCounts::default, |a, b| Ok(a + b))?;

        self.finish(counts)
    }

    /// Turn the counts into percentages and add the current hand and outs.
    fn finish(&self, counts: OutcomeCounts) -> Result<EquityResult, OddsError> {
        let completed = counts.total();
        if completed < self.trials {
            event!(
                tracing::Level::WARN,
                completed,
                trials = self.trials,
                "Equity simulation cancelled"
            );
            return Err(OddsError::Cancelled { completed });
        }

        let mut known: Vec<Card> = Vec::with_capacity(7);
        known.extend_from_slice(&self.hand);
        known.extend_from_slice(&self.board);

        let current_hand = if self.board.len() >= 3 {
            Some(evaluate(&known)?)
        } else {
            None
        };
        let outs = if matches!(self.board.len(), 3 | 4) {
            Some(compute_outs(&known, &self.deck[..])?)
        } else {
            None
        };

        event!(
            tracing::Level::DEBUG,
            wins = counts.wins,
            ties = counts.ties,
            losses = counts.losses,
            "Equity simulation finished"
        );

        Ok(EquityResult {
            win_pct: percent(counts.wins, self.trials),
            tie_pct: percent(counts.ties, self.trials),
            loss_pct: percent(counts.losses, self.trials),
            trials: self.trials,
            counts,
            current_hand,
            outs,
        })
    }
}

/// # EquitySimulationBuilder
///
/// `RngEquitySimulationBuilder` collects the hand, board and tuning for an
/// equity simulation. The hand is required, everything else is optional.
///
/// `EquitySimulationBuilder` is a type alias for
/// `RngEquitySimulationBuilder<ThreadRng>` which is the default builder.
///
/// ## Examples
///
/// ```
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::EquitySimulationBuilder;
///
/// let hand = Hand::new_from_str("KdKc").unwrap();
/// let mut sim = EquitySimulationBuilder::default()
///     .hand(&hand)
///     .trials(500)
///     .build()
///     .unwrap();
/// let result = sim.run().unwrap();
/// assert_eq!(500, result.counts.total());
/// ```
///
/// To get a repeatable run pass in a seeded rng:
///
/// ```
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::EquitySimulationBuilder;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let hand = Hand::new_from_str("KdKc").unwrap();
/// let board = Hand::new_from_str("Ks7h2c").unwrap();
/// let run = |seed| {
///     EquitySimulationBuilder::default()
///         .hand(&hand)
///         .board(&board)
///         .trials(500)
///         .rng(StdRng::seed_from_u64(seed))
///         .build()
///         .unwrap()
///         .run()
///         .unwrap()
/// };
/// assert_eq!(run(420), run(420));
/// ```
pub struct RngEquitySimulationBuilder<R: Rng> {
    hand: Vec<Card>,
    board: Vec<Card>,
    trials: usize,
    rng: R,
    cancel: Option<Arc<AtomicBool>>,
}

/// The rng is ThreadRng.
pub type EquitySimulationBuilder = RngEquitySimulationBuilder<ThreadRng>;

impl Default for RngEquitySimulationBuilder<ThreadRng> {
    fn default() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl<R: Rng> RngEquitySimulationBuilder<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            hand: vec![],
            board: vec![],
            trials: DEFAULT_TRIALS,
            rng,
            cancel: None,
        }
    }

    /// Set the player's two hole cards.
    pub fn hand(mut self, cards: &[Card]) -> Self {
        self.hand = cards.to_vec();
        self
    }

    /// Set the community cards already dealt, zero to five of them.
    pub fn board(mut self, cards: &[Card]) -> Self {
        self.board = cards.to_vec();
        self
    }

    /// How many random boards to play out.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Swap the source of randomness.
    pub fn rng<O: Rng>(self, rng: O) -> RngEquitySimulationBuilder<O> {
        RngEquitySimulationBuilder {
            hand: self.hand,
            board: self.board,
            trials: self.trials,
            rng,
            cancel: self.cancel,
        }
    }

    /// A flag that stops the simulation between trials once it is set.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Check the inputs and create the simulation.
    pub fn build(self) -> Result<EquitySimulation<R>, OddsError> {
        let hand: [Card; 2] = self
            .hand
            .as_slice()
            .try_into()
            .map_err(|_| OddsError::InvalidHoleCards(self.hand.len()))?;
        if self.board.len() > 5 {
            return Err(OddsError::BoardFull);
        }
        if self.trials == 0 {
            return Err(OddsError::NoTrials);
        }

        let mut known = Deck::new();
        for c in hand.iter().chain(self.board.iter()) {
            if !known.insert(*c) {
                return Err(OddsError::DuplicateCard(*c));
            }
        }

        let mut all_known: Vec<Card> = hand.to_vec();
        all_known.extend_from_slice(&self.board);

        Ok(EquitySimulation {
            hand,
            board: self.board,
            deck: FlatDeck::remaining(&all_known),
            trials: self.trials,
            rng: self.rng,
            cancel: self.cancel,
        })
    }
}

/// Estimate the equity of `hand` on `board` against one random hand.
///
/// ```
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::compute_equity;
///
/// let hand = Hand::new_from_str("7c2d").unwrap();
/// let result = compute_equity(&hand, &[], 1_000, rand::rng()).unwrap();
/// assert!(result.win_pct < 50.0);
/// assert!(result.outs.is_none());
/// ```
pub fn compute_equity<R: Rng>(
    hand: &[Card],
    board: &[Card],
    trials: usize,
    rng: R,
) -> Result<EquityResult, OddsError> {
    RngEquitySimulationBuilder::with_rng(rng)
        .hand(hand)
        .board(board)
        .trials(trials)
        .build()?
        .run()
}
