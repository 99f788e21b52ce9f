// src/main.rs
// Run with no arguments to print the full trace and the payout over [1, 100].

use anyhow::Result;
use clap::Parser;

use bsearch_payout::mechanics::TieBreak;
use bsearch_payout::systems::guess::{GuessConfig, MAX_GUESSES, Opening};
use bsearch_payout::systems::payout::{Domain, Report, evaluate};
use bsearch_payout::systems::sdk::{LogTrace, Stdout};

mod cli {
    use super::*;

    #[derive(Debug, Clone, Copy, clap::ValueEnum)]
    pub enum TieBreakArg {
        HalfEven,
        HalfAway,
    }

    impl From<TieBreakArg> for TieBreak {
        fn from(a: TieBreakArg) -> Self {
            match a {
                TieBreakArg::HalfEven => TieBreak::HalfEven,
                TieBreakArg::HalfAway => TieBreak::HalfAwayFromZero,
            }
        }
    }

    #[derive(Debug, Clone, Copy, clap::ValueEnum)]
    pub enum OpeningArg {
        Midpoint,
        HalfWidth,
    }

    impl From<OpeningArg> for Opening {
        fn from(a: OpeningArg) -> Self {
            match a {
                OpeningArg::Midpoint => Opening::Midpoint,
                OpeningArg::HalfWidth => Opening::HalfWidth,
            }
        }
    }

    #[derive(Parser, Debug)]
    #[command(name = "bsearch_payout", version, about = "Expected payout of a binary-search guessing game")]
    pub struct Args {
        /// How exact .5 positions are rounded
        #[arg(long, value_enum, default_value = "half-even")]
        pub tie_break: TieBreakArg,

        /// Where the first guess lands
        #[arg(long, value_enum, default_value = "midpoint")]
        pub opening: OpeningArg,

        /// Smallest target
        #[arg(long, default_value_t = 1)]
        pub lo: i64,

        /// Largest target
        #[arg(long, default_value_t = 100)]
        pub hi: i64,

        /// Give up on a target after this many guesses
        #[arg(long, default_value_t = MAX_GUESSES)]
        pub max_guesses: usize,

        /// Send the per-guess trace to the logger (RUST_LOG=trace) instead of stdout
        #[arg(long)]
        pub quiet: bool,

        /// Print the guess-count histogram after the payout
        #[arg(long)]
        pub summary: bool,

        /// Also print a Monte Carlo estimate over this many sampled targets
        #[arg(long)]
        pub samples: Option<usize>,

        /// Seed for --samples
        #[arg(long, default_value_t = 0)]
        pub seed: u64,
    }
}

fn print_summary(report: &Report) {
    println!("Guesses histogram:");
    for (n, targets) in report.histogram() {
        println!("  {:>3} guesses: {targets}", n.get());
    }
    if let Some((n, goals)) = report.worst() {
        println!("Worst case: {n} guesses for {goals:?}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    let cfg = GuessConfig {
        tie_break: args.tie_break.into(),
        opening: args.opening.into(),
        max_guesses: args.max_guesses,
    };
    let domain = Domain::new(args.lo, args.hi)?;
    log::debug!("config: {cfg:?}, domain: {domain:?}");

    let report = if args.quiet {
        evaluate(domain, &cfg, &mut LogTrace)?
    } else {
        evaluate(domain, &cfg, &mut Stdout)?
    };

    println!("Payout: {}$", report.payout);

    if args.summary {
        print_summary(&report);
    }

    if let Some(samples) = args.samples {
        #[cfg(feature = "mech-stoch")]
        {
            let est = bsearch_payout::systems::payout::estimate_payout(
                domain, &cfg, samples, args.seed,
            )?;
            println!("Estimated payout ({samples} samples, seed {}): {est}$", args.seed);
        }
        #[cfg(not(feature = "mech-stoch"))]
        anyhow::bail!("--samples {samples} needs the `mech-stoch` feature");
    }

    Ok(())
}
