/*!
`bsearch_payout` — expected payout of a binary-search guessing game.

What it does
- Simulates a player who finds a hidden integer by repeatedly guessing the
  (rounded) midpoint of the remaining interval.
- Counts guesses per target, turns each count into a cost (`6 - guesses`),
  and averages the costs over the whole target domain into a payout.

How to use (call surface only)
- One target: `systems::guess::simulate(target, range, &cfg, &mut probe)`.
- Whole domain: `systems::payout::evaluate(domain, &cfg, &mut probe)` or the
  plain `systems::payout::compute_payout()`.
- Trace lines go through a `systems::sdk::Probe`; pass `Silent` to skip them.

What it does NOT do
- No general search library, no game loop, no statistics beyond the mean.
*/

pub mod error;
pub mod mechanics;
pub mod systems;

pub use error::{Error, Result};

/// Result of a capped refinement run.
#[derive(Clone, Debug)]
pub struct Refined<S> {
    pub state: S,
    pub iters: usize,
    pub converged: bool,
}

/// Deterministic refinement: s_{t+1} = update(s_t) until `converged(s_t, t)`.
///
/// `t` is 1-indexed and counts the check that succeeds. After `max_iters`
/// failed checks the last state is returned with `converged = false`.
pub fn refine_det<S, Conv, Upd>(
    mut state: S,
    mut converged: Conv,
    mut update: Upd,
    max_iters: usize,
) -> Refined<S>
where
    Conv: FnMut(&S, usize) -> bool,
    Upd: FnMut(&S) -> S,
{
    for iter in 1..=max_iters {
        if converged(&state, iter) {
            return Refined { state, iters: iter, converged: true };
        }
        state = update(&state);
    }
    Refined { state, iters: max_iters, converged: false }
}
