//! Payout aggregator: run the guess simulator for every target in a domain,
//! map each guess count to a cost and average the costs.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::mechanics::payoff;
use crate::systems::guess::{GuessConfig, GuessCount, SearchRange, Target, simulate};
use crate::systems::sdk::{Probe, Silent};

pub type CostTable = BTreeMap<Target, i64>;

/// Inclusive integer target interval; the search range spans the same bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    pub lo: Target,
    pub hi: Target,
}

impl Default for Domain {
    fn default() -> Self {
        Self { lo: 1, hi: 100 }
    }
}

impl Domain {
    pub fn new(lo: Target, hi: Target) -> Result<Self> {
        // lo == hi leaves nothing to bisect
        if lo < hi {
            Ok(Self { lo, hi })
        } else {
            Err(Error::InvalidRange { min: lo as f64, max: hi as f64 })
        }
    }

    pub fn range(&self) -> Result<SearchRange> {
        SearchRange::new(self.lo as f64, self.hi as f64)
    }

    pub fn targets(&self) -> impl Iterator<Item = Target> {
        self.lo..=self.hi
    }
}

/// Guess count for every target of `domain`, searched over the domain's own bounds.
pub fn guess_counts<P: Probe + ?Sized>(
    domain: Domain,
    cfg: &GuessConfig,
    probe: &mut P,
) -> Result<BTreeMap<Target, GuessCount>> {
    let range = domain.range()?;
    let mut counts = BTreeMap::new();
    for goal in domain.targets() {
        let n = simulate(goal, range, cfg, probe)?;
        log::debug!("goal={goal}: {n} guesses, cost {}", payoff::cost(n.get()));
        counts.insert(goal, n);
    }
    Ok(counts)
}

pub fn cost_table(counts: &BTreeMap<Target, GuessCount>) -> CostTable {
    counts
        .iter()
        .map(|(&goal, n)| (goal, payoff::cost(n.get())))
        .collect()
}

/// Mean cost over the table.
pub fn payout(costs: &CostTable) -> Result<f64> {
    payoff::mean(costs.values().copied()).ok_or(Error::EmptyTable)
}

/// Everything one evaluation produced.
#[derive(Clone, Debug)]
pub struct Report {
    pub counts: BTreeMap<Target, GuessCount>,
    pub costs: CostTable,
    pub payout: f64,
}

impl Report {
    /// guess count -> number of targets needing exactly that many guesses.
    pub fn histogram(&self) -> BTreeMap<GuessCount, usize> {
        let mut h = BTreeMap::new();
        for n in self.counts.values() {
            *h.entry(*n).or_insert(0) += 1;
        }
        h
    }

    /// Highest guess count and the targets that need it.
    pub fn worst(&self) -> Option<(GuessCount, Vec<Target>)> {
        let max = self.counts.values().copied().max()?;
        let goals = self
            .counts
            .iter()
            .filter(|(_, n)| **n == max)
            .map(|(&g, _)| g)
            .collect();
        Some((max, goals))
    }
}

pub fn evaluate<P: Probe + ?Sized>(
    domain: Domain,
    cfg: &GuessConfig,
    probe: &mut P,
) -> Result<Report> {
    let counts = guess_counts(domain, cfg, probe)?;
    let costs = cost_table(&counts);
    let payout = payout(&costs)?;
    log::info!("payout over [{}, {}]: {payout}", domain.lo, domain.hi);
    Ok(Report { counts, costs, payout })
}

/// Payout over [1, 100] with the default config and no trace.
pub fn compute_payout() -> Result<f64> {
    evaluate(Domain::default(), &GuessConfig::default(), &mut Silent).map(|r| r.payout)
}

/// Monte Carlo payout: mean cost over `samples` uniformly drawn targets.
///
/// Same `seed`, same estimate. Converges on `evaluate(..).payout`.
#[cfg(feature = "mech-stoch")]
pub fn estimate_payout(
    domain: Domain,
    cfg: &GuessConfig,
    samples: usize,
    seed: u64,
) -> Result<f64> {
    use bevy_prng::WyRand;
    use rand_core::SeedableRng;

    use crate::mechanics::stoch;

    if samples == 0 {
        return Err(Error::NoSamples);
    }
    let range = domain.range()?;
    let mut rng = WyRand::from_seed(seed.to_le_bytes());
    // runs are deterministic, so each target is simulated at most once
    let mut seen: BTreeMap<Target, i64> = BTreeMap::new();
    let mut total = 0i64;
    for _ in 0..samples {
        let goal = stoch::uniform_int(&mut rng, domain.lo, domain.hi);
        let c = match seen.get(&goal) {
            Some(&c) => c,
            None => {
                let c = payoff::cost(simulate(goal, range, cfg, &mut Silent)?.get());
                seen.insert(goal, c);
                c
            }
        };
        total += c;
    }
    Ok(total as f64 / samples as f64)
}
