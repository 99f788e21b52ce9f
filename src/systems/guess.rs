//! Guess simulator: how many midpoint guesses a binary search needs to hit
//! one integer target.
//!
//! The range is narrowed to the *unrounded* position on every miss; only the
//! comparison against the target uses the rounded value.

use std::fmt;

use crate::error::{Error, Result};
use crate::mechanics::rounding::{TieBreak, round_to_int};
use crate::refine_det;
use crate::systems::sdk::{Guess, Probe, Silent};

pub type Target = i64;

/// Guard against a stalled search; real runs over [1, 100] need at most 8.
pub const MAX_GUESSES: usize = 1_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRange {
    pub min: f64,
    pub max: f64,
}

impl SearchRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(Self { min, max })
        } else {
            Err(Error::InvalidRange { min, max })
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.min + (self.max - self.min) / 2.0
    }

    pub fn contains(&self, target: Target) -> bool {
        let t = target as f64;
        self.min <= t && t <= self.max
    }
}

/// Number of guesses a run took, terminating guess included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuessCount(pub u32);

impl GuessCount {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GuessCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the first guess lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Opening {
    /// `min + (max - min) / 2`.
    #[default]
    Midpoint,
    /// `(max - min) / 2`, ignoring `min`; 49.5 for [1, 100]. Ranges where
    /// this lands outside `[min, max]` are rejected by `simulate`.
    HalfWidth,
}

impl Opening {
    pub fn position(self, range: &SearchRange) -> f64 {
        match self {
            Opening::Midpoint => range.midpoint(),
            Opening::HalfWidth => range.width() / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessConfig {
    pub tie_break: TieBreak,
    pub opening: Opening,
    pub max_guesses: usize,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::HalfEven,
            opening: Opening::Midpoint,
            max_guesses: MAX_GUESSES,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Narrowing {
    range: SearchRange,
    position: f64,
}

fn narrow(s: &Narrowing, target: Target, tie_break: TieBreak) -> Narrowing {
    let mut range = s.range;
    if round_to_int(s.position, tie_break) > target {
        range.max = s.position;
    } else {
        range.min = s.position;
    }
    Narrowing { range, position: range.midpoint() }
}

/// Run one search for `target` inside `range` and count the guesses.
///
/// Every guess is reported to `probe` before the range moves. A search that
/// does not land within `cfg.max_guesses` fails with `Error::NoConvergence`.
pub fn simulate<P: Probe + ?Sized>(
    target: Target,
    range: SearchRange,
    cfg: &GuessConfig,
    probe: &mut P,
) -> Result<GuessCount> {
    // fields are public, so re-check what `new` would have rejected
    let range = SearchRange::new(range.min, range.max)?;
    if !range.contains(target) {
        return Err(Error::TargetOutOfRange { target, min: range.min, max: range.max });
    }

    let position = cfg.opening.position(&range);
    if !(range.min..=range.max).contains(&position) {
        return Err(Error::OpeningOutOfRange { position, min: range.min, max: range.max });
    }

    let tie_break = cfg.tie_break;
    let start = Narrowing { range, position };

    let run = refine_det(
        start,
        |s: &Narrowing, iter| {
            probe.on_guess(&Guess {
                index: iter as u32,
                position: s.position,
                goal: target,
                range: s.range,
            });
            round_to_int(s.position, tie_break) == target
        },
        |s: &Narrowing| narrow(s, target, tie_break),
        cfg.max_guesses,
    );

    if !run.converged {
        log::warn!(
            "goal={target} still unresolved after {} guesses (position={:.4}, width={:e})",
            run.iters,
            run.state.position,
            run.state.range.width()
        );
        return Err(Error::NoConvergence { target, max_guesses: cfg.max_guesses });
    }

    let guesses = GuessCount(run.iters as u32);
    probe.on_found(target, guesses);
    Ok(guesses)
}

/// `simulate` with the default config and no trace.
pub fn guesses_for(target: Target, min: f64, max: f64) -> Result<GuessCount> {
    simulate(target, SearchRange::new(min, max)?, &GuessConfig::default(), &mut Silent)
}
