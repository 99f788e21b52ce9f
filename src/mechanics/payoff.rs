//! payoff: guess count -> cost, and the mean over a cost table.
//! cost = STAKE - guesses, so anything slower than STAKE guesses is negative.

pub const STAKE: i64 = 6;

#[inline]
pub fn cost(guesses: u32) -> i64 {
    STAKE - i64::from(guesses)
}

/// Arithmetic mean; `None` when there is nothing to average.
#[inline]
pub fn mean<I: IntoIterator<Item = i64>>(costs: I) -> Option<f64> {
    let (sum, n) = costs
        .into_iter()
        .fold((0i64, 0usize), |(s, n), c| (s + c, n + 1));
    if n == 0 { None } else { Some(sum as f64 / n as f64) }
}
