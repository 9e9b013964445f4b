/// Head probabilities of the standard coin table, coins A through E.
///
/// The best coin is deliberately last: ties in the estimation step resolve to
/// the earliest index, so exploitation has to earn its way to coin E.
pub const STANDARD_COIN_PROBABILITIES: [f64; 5] = [0.20, 0.40, 0.50, 0.60, 0.80];

/// Estimate assigned to a coin that has not been flipped yet in the current run.
/// A fair coin is the neutral prior.
pub const UNTRIED_COIN_ESTIMATE: f64 = 0.5;

/// Flips allowed in a single run.
pub const DEFAULT_FLIPS_PER_RUN: i64 = 20;

/// Runs executed per batch.
pub const DEFAULT_NUM_RUNS: i64 = 100;

/// Runs with more heads than this are counted as "above".
pub const DEFAULT_HIGH_THRESHOLD: i64 = 10;

/// Runs with fewer heads than this are counted as "below".
pub const DEFAULT_LOW_THRESHOLD: i64 = 10;

/// Divisor applied to the flip budget to get the exploration share.
/// The exploration share is then split evenly across coins (integer division).
pub const EXPLORATION_BUDGET_DIVISOR: i64 = 2;
