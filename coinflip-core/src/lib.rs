/// coinflip-core: explore-then-exploit coin flip experiment.
///
/// Flip budget → uniform exploration → greedy exploitation → heads per run →
/// batch statistics. No IO, no global RNG — bring your own `RandomSource`.
///
/// # Quick start
///
/// ```rust
/// use coinflip_core::{run_batch, BatchOptions, CoinModel, RngSource};
///
/// let model = CoinModel::standard(); // coins A..E: 0.2, 0.4, 0.5, 0.6, 0.8
/// let mut rng = RngSource::seeded(2024);
///
/// let summary = run_batch(&model, &BatchOptions {
///     run_count: 100,
///     flip_budget: 20,
///     high_threshold: 10,
///     low_threshold: 10,
/// }, &mut rng).unwrap();
///
/// println!("mean {:.2}, max {}, min {}", summary.mean_heads, summary.max_heads, summary.min_heads);
/// assert!(summary.min_heads <= summary.max_heads);
/// ```

pub mod batch;
pub mod coin;
pub mod constants;
pub mod error;
pub mod flip;
pub mod random;
pub mod run;
pub mod selector;
pub mod types;

// Re-export primary public API at crate root.
pub use batch::{collect_runs, run_batch, summarize, BatchOptions};
pub use coin::CoinModel;
pub use error::SimulationError;
pub use flip::flip;
pub use random::{FixedSource, RandomSource, RngSource, SequenceSource};
pub use run::{execute_run, execute_run_traced, RunPlan, RunTrace};
pub use selector::{estimate, select_best_coin};
pub use types::{BatchSummary, Coin, CoinStatistics, RunResult};
