/// One experiment run: uniform exploration, then greedy exploitation.
///
/// Each run owns its statistics; nothing carries over between runs except the
/// read-only coin table.
use tracing::debug;

use crate::coin::CoinModel;
use crate::constants::EXPLORATION_BUDGET_DIVISOR;
use crate::error::{Result, SimulationError};
use crate::flip::flip;
use crate::random::RandomSource;
use crate::selector::select_best_coin;
use crate::types::{CoinStatistics, RunResult};

/// How a flip budget is split between the two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunPlan {
    pub flip_budget: u64,
    pub coin_count: u64,
    /// Flips given to every coin during exploration.
    pub exploration_flips_per_coin: u64,
    /// Flips left for exploitation.
    pub exploitation_flips: u64,
}

impl RunPlan {
    /// `exploration = (flip_budget / 2) / coin_count`, floored.
    /// `exploitation = flip_budget - coin_count * exploration`.
    pub fn new(flip_budget: i64, coin_count: i64) -> Result<Self> {
        if flip_budget <= 0 {
            return Err(SimulationError::invalid(
                "flip_budget",
                format!("must be positive, got {}", flip_budget),
            ));
        }
        if coin_count <= 0 {
            return Err(SimulationError::invalid(
                "coin_count",
                format!("must be positive, got {}", coin_count),
            ));
        }

        let exploration_flips = (flip_budget / EXPLORATION_BUDGET_DIVISOR) / coin_count;
        let remaining_flips = flip_budget - coin_count * exploration_flips;

        if remaining_flips < 0 {
            return Err(SimulationError::InvariantViolation(format!(
                "exploration used {} flips, more than the budget of {}",
                coin_count * exploration_flips,
                flip_budget,
            )));
        }

        Ok(RunPlan {
            flip_budget: flip_budget as u64,
            coin_count: coin_count as u64,
            exploration_flips_per_coin: exploration_flips as u64,
            exploitation_flips: remaining_flips as u64,
        })
    }

    /// Flips spent across all coins in the exploration phase.
    pub fn exploration_total(&self) -> u64 {
        self.coin_count * self.exploration_flips_per_coin
    }
}

/// Everything a run produced: the heads count plus the final per-coin counters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunTrace {
    pub plan: RunPlan,
    pub heads: RunResult,
    pub statistics: Vec<CoinStatistics>,
}

/// Execute one run and return the number of heads observed.
pub fn execute_run(
    model: &CoinModel,
    flip_budget: i64,
    rng: &mut impl RandomSource,
) -> Result<RunResult> {
    execute_run_traced(model, flip_budget, rng).map(|trace| trace.heads)
}

/// Execute one run and keep the final statistics.
pub fn execute_run_traced(
    model: &CoinModel,
    flip_budget: i64,
    rng: &mut impl RandomSource,
) -> Result<RunTrace> {
    let plan = RunPlan::new(flip_budget, model.len() as i64)?;

    let mut statistics = vec![CoinStatistics::default(); model.len()];
    let mut heads: RunResult = 0;

    // Phase 1: every coin gets the same number of flips, in table order.
    for (coin, coin_stats) in model.coins().iter().zip(statistics.iter_mut()) {
        for _ in 0..plan.exploration_flips_per_coin {
            let is_head = flip(coin.head_probability, rng);
            coin_stats.record(is_head);
            if is_head {
                heads += 1;
            }
        }
    }

    // Phase 2: each pick sees every outcome so far, so this loop is strictly sequential.
    for step in 0..plan.exploitation_flips {
        let chosen = select_best_coin(&statistics);
        let is_head = flip(model.head_probability(chosen), rng);
        statistics[chosen].record(is_head);
        if is_head {
            heads += 1;
        }
        debug!(step, coin = chosen, is_head, "exploitation flip");
    }

    debug!(
        heads,
        flip_budget = plan.flip_budget,
        exploration_flips = plan.exploration_total(),
        exploration_flips_per_coin = plan.exploration_flips_per_coin,
        exploitation_flips = plan.exploitation_flips,
        "run complete"
    );

    Ok(RunTrace { plan, heads, statistics })
}
