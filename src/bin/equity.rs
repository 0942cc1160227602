use clap::Parser;
use holdem_odds::core::OddsError;
use holdem_odds::holdem::{DEFAULT_TRIALS, EquityResult, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "equity",
    about = "Estimate a hold'em hand's equity against one random opponent",
    long_about = "Run a monte carlo simulation of the rest of the board and a random \
                  opponent hand.\nOn the flop and the turn the outs that improve the \
                  hand are listed too."
)]
struct Args {
    /// Your two hole cards (e.g. "AsKd")
    hand: String,

    /// Board cards dealt so far, up to five (e.g. "Qh7c2s")
    #[arg(short = 'b', long, default_value = "")]
    board: String,

    /// Number of random boards to play out
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed the random number generator for a repeatable run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as json
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<EquityResult, OddsError> {
    let table = Table::try_from((args.hand.as_str(), args.board.as_str()))?;
    if !table.is_ready() {
        return Err(OddsError::InvalidHoleCards(table.hand().len()));
    }
    match args.seed {
        Some(seed) => table.equity(args.trials, StdRng::seed_from_u64(seed)),
        None => table.equity(args.trials, rand::rng()),
    }
}

fn print_summary(args: &Args, result: &EquityResult) {
    println!("Hand:   {}", result.current_hand_name());
    println!("Win:    {:.1}%", result.win_pct);
    println!("Tie:    {:.1}%", result.tie_pct);
    println!("Loss:   {:.1}%", result.loss_pct);
    println!("Trials: {}", args.trials);
    if let Some(outs) = result.outs.as_ref().filter(|o| o.count > 0) {
        let sample: Vec<String> = outs.sample.iter().map(|c| c.to_string()).collect();
        println!(
            "Outs:   {} ({:.1}% to improve) {}",
            outs.count,
            outs.rounded_pct(),
            sample.join(" ")
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match run(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error writing json: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&args, &result);
    }
}
