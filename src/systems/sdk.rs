// src/systems/sdk.rs

//! # Probe SDK
//!
//! Side channel for watching a simulation without touching its math.
//! The guess simulator reports every guess it makes to a [`Probe`]; what
//! happens with that report (print, log, record, nothing) is the probe's
//! business.
//!
//! ## What this SDK gives you
//! - [`Guess`]: one iteration of a search. Its `Display` is the trace line
//!   `(<i>) position=<2dp>, goal=<int>, min=<2dp>, max=<2dp>`.
//! - [`Probe`]: hook protocol with no-op defaults, so a probe only overrides
//!   what it cares about.
//! - Ready-made probes: [`Silent`], [`Stdout`], [`LogTrace`], [`Recorder`].
//!
//! ## Determinism & purity
//! - Probes observe; they never steer. The simulator's result is the same
//!   whichever probe is attached.

use std::fmt;

use crate::systems::guess::{GuessCount, SearchRange, Target};

/// One guess of one search run, taken before the range is narrowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guess {
    pub index: u32,
    pub position: f64,
    pub goal: Target,
    pub range: SearchRange,
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) position={:.2}, goal={}, min={:.2}, max={:.2}",
            self.index, self.position, self.goal, self.range.min, self.range.max
        )
    }
}

/// Observer hooked into a search run.
pub trait Probe {
    /// (Optional) called once per guess, terminating guess included.
    fn on_guess(&mut self, _guess: &Guess) {}
    /// (Optional) called once when the rounded guess hits the target.
    fn on_found(&mut self, _target: Target, _guesses: GuessCount) {}
}

impl<P: Probe + ?Sized> Probe for &mut P {
    fn on_guess(&mut self, guess: &Guess) {
        (**self).on_guess(guess)
    }
    fn on_found(&mut self, target: Target, guesses: GuessCount) {
        (**self).on_found(target, guesses)
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Probe for Silent {}

/// Prints each trace line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl Probe for Stdout {
    fn on_guess(&mut self, guess: &Guess) {
        println!("{guess}");
    }
}

/// Routes trace lines through the `log` facade at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl Probe for LogTrace {
    fn on_guess(&mut self, guess: &Guess) {
        log::trace!("{guess}");
    }
    fn on_found(&mut self, target: Target, guesses: GuessCount) {
        log::trace!("goal={target} found after {guesses} guesses");
    }
}

/// Keeps every guess and every result, in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub guesses: Vec<Guess>,
    pub found: Vec<(Target, GuessCount)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guesses that belong to `target`, in the order they were made.
    pub fn run_of(&self, target: Target) -> Vec<Guess> {
        self.guesses.iter().copied().filter(|g| g.goal == target).collect()
    }
}

impl Probe for Recorder {
    fn on_guess(&mut self, guess: &Guess) {
        self.guesses.push(*guess);
    }
    fn on_found(&mut self, target: Target, guesses: GuessCount) {
        self.found.push((target, guesses));
    }
}
