// demos/trace_one.rs
// Run with:
//   cargo run --example trace_one

use bsearch_payout::mechanics::TieBreak;
use bsearch_payout::systems::guess::{GuessConfig, SearchRange, simulate};
use bsearch_payout::systems::sdk::Recorder;

fn main() {
    let range = SearchRange::new(1.0, 100.0).expect("static range");

    // 50.5 is a tie: the two rounding rules take very different paths to 50.
    for tie_break in [TieBreak::HalfEven, TieBreak::HalfAwayFromZero] {
        let cfg = GuessConfig { tie_break, ..GuessConfig::default() };
        let mut rec = Recorder::new();
        let n = simulate(50, range, &cfg, &mut rec).expect("50 is inside [1, 100]");

        println!("== {tie_break}: {n} guesses ==");
        for g in &rec.guesses {
            println!("{g}");
        }
    }
}
