/// Total heads observed in one run. Always within `0..=flip_budget`.
pub type RunResult = u64;

/// A coin with a fixed head probability.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coin {
    /// Position in the coin table, 0-based.
    pub index: usize,
    /// Strictly between 0.0 and 1.0. Never read by the allocation strategy.
    pub head_probability: f64,
}

/// Per-run, per-coin flip counters.
///
/// Created fresh for every run and thrown away when the run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoinStatistics {
    pub heads_count: u64,
    pub total_flips: u64,
}

impl CoinStatistics {
    /// Record one flip outcome. Keeps `heads_count <= total_flips`.
    pub fn record(&mut self, is_head: bool) {
        self.total_flips += 1;
        if is_head {
            self.heads_count += 1;
        }
    }

    pub fn is_untried(&self) -> bool {
        self.total_flips == 0
    }
}

/// Aggregate statistics over every run of a batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    pub run_count: u64,
    pub flip_budget: u64,
    /// `sum(results) / run_count`.
    pub mean_heads: f64,
    pub max_heads: RunResult,
    pub min_heads: RunResult,
    pub high_threshold: i64,
    /// Runs with strictly more heads than `high_threshold`.
    pub count_above: u64,
    pub low_threshold: i64,
    /// Runs with strictly fewer heads than `low_threshold`.
    pub count_below: u64,
}
