use crate::random::RandomSource;

/// Flip a coin with the given head probability. Returns `true` for heads.
///
/// Consumes exactly one draw: heads iff `u < head_probability`.
pub fn flip(head_probability: f64, rng: &mut impl RandomSource) -> bool {
    rng.next_uniform() < head_probability
}
