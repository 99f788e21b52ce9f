//! Rounding of a real-valued guess position to the integer actually guessed.
//!
//! Only exact `.5` positions are affected by the tie-break; with the default
//! [1, 100] domain the opening midpoint 50.5 is such a tie.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Banker's rounding: 50.5 -> 50, 51.5 -> 52.
    #[default]
    HalfEven,
    /// Schoolbook rounding: 50.5 -> 51, -0.5 -> -1.
    HalfAwayFromZero,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::HalfEven => "half-even",
            TieBreak::HalfAwayFromZero => "half-away",
        })
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "half-even" => Ok(TieBreak::HalfEven),
            "half-away" => Ok(TieBreak::HalfAwayFromZero),
            other => Err(format!("unknown tie-break '{other}'")),
        }
    }
}

/// Round `x` to the nearest integer, resolving ties with `tie_break`.
#[inline]
pub fn round_to_int(x: f64, tie_break: TieBreak) -> i64 {
    let r = match tie_break {
        TieBreak::HalfEven => x.round_ties_even(),
        TieBreak::HalfAwayFromZero => x.round(),
    };
    r as i64
}
