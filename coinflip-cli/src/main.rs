mod config;
mod logging;
mod output;

use clap::Parser;
use coinflip_core::constants::{
    DEFAULT_FLIPS_PER_RUN, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, DEFAULT_NUM_RUNS,
    STANDARD_COIN_PROBABILITIES,
};
use coinflip_core::{
    collect_runs, summarize, BatchOptions, BatchSummary, CoinModel, RandomSource, RngSource,
    SimulationError,
};
use std::path::PathBuf;
use tracing::info;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "coinflip", version, about = "Explore-then-exploit coin flip experiment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a batch of experiments and print summary statistics
    Simulate(SimulateArgs),
    /// Create a default config file at ~/.config/coinflip/config.toml
    Init {
        /// Where to write the config (default: ~/.config/coinflip/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Parser)]
struct SimulateArgs {
    /// Comma-separated head probabilities, one per coin (e.g. 0.2,0.4,0.5,0.6,0.8)
    #[arg(long, value_delimiter = ',')]
    probabilities: Option<Vec<f64>>,

    /// Flips allowed per run
    #[arg(long, allow_hyphen_values = true)]
    flips: Option<i64>,

    /// Number of runs in the batch
    #[arg(long, allow_hyphen_values = true)]
    runs: Option<i64>,

    /// Count runs with strictly more heads than this
    #[arg(long, allow_hyphen_values = true)]
    high_threshold: Option<i64>,

    /// Count runs with strictly fewer heads than this
    #[arg(long, allow_hyphen_values = true)]
    low_threshold: Option<i64>,

    /// Seed for a reproducible batch
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Log the plan and every run to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/coinflip/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => run_simulate(args),
        Commands::Init { config: path } => {
            let path = path.unwrap_or_else(config::config_path);
            config::create_default_config(&path);
            println!("Created config at {}", path.display());
            println!("Edit it to set your default coins, flips and runs.");
        }
    }
}

fn run_simulate(args: SimulateArgs) {
    logging::init_logging(args.verbose);

    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let probabilities = args.probabilities.clone()
        .or(cfg.coin_probabilities)
        .unwrap_or_else(|| STANDARD_COIN_PROBABILITIES.to_vec());
    let options = BatchOptions {
        run_count: args.runs.or(cfg.num_runs).unwrap_or(DEFAULT_NUM_RUNS),
        flip_budget: args.flips.or(cfg.flips_per_run).unwrap_or(DEFAULT_FLIPS_PER_RUN),
        high_threshold: args.high_threshold.or(cfg.high_threshold).unwrap_or(DEFAULT_HIGH_THRESHOLD),
        low_threshold: args.low_threshold.or(cfg.low_threshold).unwrap_or(DEFAULT_LOW_THRESHOLD),
    };
    let seed = args.seed.or(cfg.seed);

    // Everything is validated before the first flip.
    let model = CoinModel::new(&probabilities).unwrap_or_else(|e| bail(e));
    let plan = options.validate(&model).unwrap_or_else(|e| bail(e));

    let best = model.best_coin();
    info!(
        coins = model.len(),
        best_coin = best.index,
        best_probability = best.head_probability,
        "coin table loaded"
    );
    info!(
        runs = options.run_count,
        flips = plan.flip_budget,
        exploration_per_coin = plan.exploration_flips_per_coin,
        exploitation = plan.exploitation_flips,
        "flip budget split"
    );

    let summary = match seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            simulate(&model, &options, &mut RngSource::seeded(seed))
        }
        None => simulate(&model, &options, &mut RngSource::from_entropy()),
    }
    .unwrap_or_else(|e| bail(e));

    if args.json {
        output::print_json(&summary, &probabilities, seed);
    } else {
        output::print_report(&summary);
    }
}

fn simulate(
    model: &CoinModel,
    options: &BatchOptions,
    rng: &mut impl RandomSource,
) -> Result<BatchSummary, SimulationError> {
    let results = collect_runs(model, options, rng)?;
    for (run, heads) in results.iter().enumerate() {
        info!(run = run + 1, heads, "run finished");
    }
    summarize(&results, options.flip_budget as u64, options.high_threshold, options.low_threshold)
}
