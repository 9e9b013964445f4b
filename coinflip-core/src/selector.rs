/// Greedy coin selection on empirical head rates.
use crate::constants::UNTRIED_COIN_ESTIMATE;
use crate::types::CoinStatistics;

/// Empirical head rate of a coin, or `UNTRIED_COIN_ESTIMATE` if it has never been flipped.
pub fn estimate(stats: &CoinStatistics) -> f64 {
    if stats.is_untried() {
        UNTRIED_COIN_ESTIMATE
    } else {
        stats.heads_count as f64 / stats.total_flips as f64
    }
}

/// Index of the coin with the highest current estimate.
///
/// Only a strictly greater estimate replaces the running best, so ties go to
/// the earliest index. Returns 0 for an empty slice.
pub fn select_best_coin(stats: &[CoinStatistics]) -> usize {
    let mut best_estimate = f64::NEG_INFINITY;
    let mut best_coin = 0;

    for (i, coin_stats) in stats.iter().enumerate() {
        let estimated = estimate(coin_stats);
        if estimated > best_estimate {
            best_estimate = estimated;
            best_coin = i;
        }
    }

    best_coin
}
