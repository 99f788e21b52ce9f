pub mod sdk;
pub mod guess;
pub mod payout;
