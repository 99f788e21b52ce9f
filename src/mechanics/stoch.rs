/// Stochastic mechanics: target sampling with WyRand.
/// Callers own the RNG and seed it explicitly, so runs stay reproducible.
use bevy_prng::WyRand;
use rand_core::RngCore;

/// Uniform(0,1) from the top 53 bits of one draw.
#[inline]
pub fn unit01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform integer in `[lo, hi]` (inclusive). Any `i64` bounds are accepted.
#[inline]
pub fn uniform_int(rng: &mut WyRand, lo: i64, hi: i64) -> i64 {
    debug_assert!(lo <= hi);
    let Some(span) = hi.abs_diff(lo).checked_add(1) else {
        // [i64::MIN, i64::MAX]: every bit pattern is a valid draw
        return rng.next_u64() as i64;
    };
    let pick = (unit01(rng) * span as f64) as u64;
    lo.wrapping_add_unsigned(pick.min(span - 1))
}
