/// Batch execution and summary statistics.
///
/// Runs are executed sequentially and are independent of each other; result
/// order is execution order and carries no meaning beyond reproducibility.
use tracing::debug;

use crate::coin::CoinModel;
use crate::constants::{
    DEFAULT_FLIPS_PER_RUN, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, DEFAULT_NUM_RUNS,
};
use crate::error::{Result, SimulationError};
use crate::random::RandomSource;
use crate::run::{execute_run, RunPlan};
use crate::types::{BatchSummary, RunResult};

/// Options for `run_batch()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchOptions {
    /// Number of independent runs (e.g. 100).
    pub run_count: i64,
    /// Flips allowed per run (e.g. 20).
    pub flip_budget: i64,
    /// Runs with strictly more heads are counted in `count_above`.
    pub high_threshold: i64,
    /// Runs with strictly fewer heads are counted in `count_below`.
    pub low_threshold: i64,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            run_count: DEFAULT_NUM_RUNS,
            flip_budget: DEFAULT_FLIPS_PER_RUN,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl BatchOptions {
    /// Check the options against a coin table. Fails before anything is flipped.
    pub fn validate(&self, model: &CoinModel) -> Result<RunPlan> {
        if self.run_count <= 0 {
            return Err(SimulationError::invalid(
                "run_count",
                format!("must be positive, got {}", self.run_count),
            ));
        }
        RunPlan::new(self.flip_budget, model.len() as i64)
    }
}

/// Upper bound on the results buffer reserved up front. Larger batches grow as they run.
const MAX_PREALLOCATED_RUNS: i64 = 1 << 16;

fn result_capacity(run_count: i64) -> usize {
    run_count.clamp(0, MAX_PREALLOCATED_RUNS) as usize
}

/// Execute every run of the batch and return the heads counts in execution order.
pub fn collect_runs(
    model: &CoinModel,
    options: &BatchOptions,
    rng: &mut impl RandomSource,
) -> Result<Vec<RunResult>> {
    let plan = options.validate(model)?;
    debug!(
        run_count = options.run_count,
        coin_count = model.len(),
        exploration_flips_per_coin = plan.exploration_flips_per_coin,
        exploitation_flips = plan.exploitation_flips,
        "starting batch"
    );

    let mut results = Vec::with_capacity(result_capacity(options.run_count));
    for _ in 0..options.run_count {
        results.push(execute_run(model, options.flip_budget, rng)?);
    }
    Ok(results)
}

/// Execute the batch and summarize it.
pub fn run_batch(
    model: &CoinModel,
    options: &BatchOptions,
    rng: &mut impl RandomSource,
) -> Result<BatchSummary> {
    let results = collect_runs(model, options, rng)?;
    summarize(
        &results,
        options.flip_budget as u64,
        options.high_threshold,
        options.low_threshold,
    )
}

/// Summary statistics over a sequence of run results.
///
/// Min and max are seeded from the first result, so the reported minimum is
/// always a value that actually occurred.
pub fn summarize(
    results: &[RunResult],
    flip_budget: u64,
    high_threshold: i64,
    low_threshold: i64,
) -> Result<BatchSummary> {
    let Some(&first) = results.first() else {
        return Err(SimulationError::invalid("run_count", "no run results to summarize"));
    };

    let mut sum: u64 = 0;
    let mut max_heads = first;
    let mut min_heads = first;
    let mut count_above = 0;
    let mut count_below = 0;

    for &heads in results {
        sum = sum.checked_add(heads).ok_or_else(|| {
            SimulationError::InvariantViolation(format!(
                "heads total overflowed after adding {} to {}",
                heads, sum
            ))
        })?;
        max_heads = max_heads.max(heads);
        min_heads = min_heads.min(heads);
        if (heads as i64) > high_threshold {
            count_above += 1;
        }
        if (heads as i64) < low_threshold {
            count_below += 1;
        }
    }

    let run_count = results.len() as u64;
    Ok(BatchSummary {
        run_count,
        flip_budget,
        mean_heads: sum as f64 / run_count as f64,
        max_heads,
        min_heads,
        high_threshold,
        count_above,
        low_threshold,
        count_below,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSource, RngSource};

    #[test]
    fn test_summarize_basic() {
        let summary = summarize(&[12, 8, 10, 15, 9], 20, 10, 10).unwrap();
        assert_eq!(summary.run_count, 5);
        assert!((summary.mean_heads - 10.8).abs() < 1e-12);
        assert_eq!(summary.max_heads, 15);
        assert_eq!(summary.min_heads, 8);
        assert_eq!(summary.count_above, 2);
        assert_eq!(summary.count_below, 2);
    }

    #[test]
    fn test_summarize_min_not_biased_by_budget() {
        // Every result is above the usual budget of 20; min must still be real.
        let summary = summarize(&[40, 35, 38], 50, 10, 10).unwrap();
        assert_eq!(summary.min_heads, 35);
        assert_eq!(summary.max_heads, 40);
    }

    #[test]
    fn test_summarize_all_zero() {
        let summary = summarize(&[0, 0, 0], 20, 10, 10).unwrap();
        assert_eq!(summary.max_heads, 0);
        assert_eq!(summary.min_heads, 0);
        assert_eq!(summary.mean_heads, 0.0);
        assert_eq!(summary.count_below, 3);
        assert_eq!(summary.count_above, 0);
    }

    #[test]
    fn test_summarize_thresholds_are_strict() {
        let summary = summarize(&[10, 10, 10], 20, 10, 10).unwrap();
        assert_eq!(summary.count_above, 0);
        assert_eq!(summary.count_below, 0);
    }

    #[test]
    fn test_summarize_overflowing_total_is_error() {
        let err = summarize(&[u64::MAX, 1], 20, 10, 10).unwrap_err();
        assert!(matches!(err, SimulationError::InvariantViolation(_)));
    }

    #[test]
    fn test_huge_run_count_validates_with_bounded_capacity() {
        let model = CoinModel::standard();
        let options = BatchOptions { run_count: i64::MAX, ..BatchOptions::default() };
        assert!(options.validate(&model).is_ok());
        assert_eq!(result_capacity(i64::MAX), MAX_PREALLOCATED_RUNS as usize);
        assert_eq!(result_capacity(100), 100);
        // Reserving the bounded capacity must not panic.
        let results: Vec<RunResult> = Vec::with_capacity(result_capacity(options.run_count));
        assert!(results.capacity() >= MAX_PREALLOCATED_RUNS as usize);
    }

    #[test]
    fn test_summarize_empty_is_error() {
        assert!(summarize(&[], 20, 10, 10).is_err());
    }

    #[test]
    fn test_batch_rejects_bad_options_before_running() {
        let model = CoinModel::standard();
        let mut rng = FixedSource(0.0);

        let bad_runs = BatchOptions { run_count: 0, ..BatchOptions::default() };
        assert!(matches!(
            run_batch(&model, &bad_runs, &mut rng),
            Err(SimulationError::ParameterValidation { parameter: "run_count", .. })
        ));

        let bad_budget = BatchOptions { flip_budget: -1, ..BatchOptions::default() };
        assert!(matches!(
            run_batch(&model, &bad_budget, &mut rng),
            Err(SimulationError::ParameterValidation { parameter: "flip_budget", .. })
        ));
    }

    #[test]
    fn test_batch_all_heads() {
        let model = CoinModel::standard();
        let summary = run_batch(&model, &BatchOptions::default(), &mut FixedSource(0.0)).unwrap();
        assert_eq!(summary.run_count, 100);
        assert_eq!(summary.flip_budget, 20);
        assert_eq!(summary.mean_heads, 20.0);
        assert_eq!(summary.max_heads, 20);
        assert_eq!(summary.min_heads, 20);
        assert_eq!(summary.count_above, 100);
        assert_eq!(summary.count_below, 0);
    }

    #[test]
    fn test_batch_all_tails() {
        let model = CoinModel::standard();
        let summary = run_batch(&model, &BatchOptions::default(), &mut FixedSource(0.99)).unwrap();
        assert_eq!(summary.mean_heads, 0.0);
        assert_eq!(summary.max_heads, 0);
        assert_eq!(summary.count_below, 100);
    }

    #[test]
    fn test_batch_summary_matches_results() {
        let model = CoinModel::standard();
        let options = BatchOptions::default();

        let results = collect_runs(&model, &options, &mut RngSource::seeded(5)).unwrap();
        let summary = run_batch(&model, &options, &mut RngSource::seeded(5)).unwrap();

        assert_eq!(results.len(), 100);
        let sum: u64 = results.iter().sum();
        assert!((summary.mean_heads - sum as f64 / 100.0).abs() < 1e-12);
        assert_eq!(summary.max_heads, *results.iter().max().unwrap());
        assert_eq!(summary.min_heads, *results.iter().min().unwrap());
        assert_eq!(summary.count_above, results.iter().filter(|&&h| h > 10).count() as u64);
        assert_eq!(summary.count_below, results.iter().filter(|&&h| h < 10).count() as u64);
        assert!(summary.count_above + summary.count_below <= summary.run_count);
    }

    #[test]
    fn test_batch_mean_beats_random_coin_choice() {
        // Picking a coin uniformly at random averages 0.5 * 20 = 10 heads.
        // Exploring first and then exploiting the empirical best lands near 11.6
        // with the standard table.
        let model = CoinModel::standard();
        let options = BatchOptions { run_count: 2_000, ..BatchOptions::default() };
        for seed in 0..10 {
            let summary = run_batch(&model, &options, &mut RngSource::seeded(seed)).unwrap();
            assert!(
                summary.mean_heads > 10.8 && summary.mean_heads < 12.4,
                "seed {}: mean {} outside expected band",
                seed,
                summary.mean_heads
            );
        }
    }
}
