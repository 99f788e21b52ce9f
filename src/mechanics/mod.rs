pub mod payoff;
pub mod rounding;
#[cfg(feature = "mech-stoch")]
pub mod stoch;

pub use payoff::*;
pub use rounding::*;
#[cfg(feature = "mech-stoch")]
pub use stoch::*;
