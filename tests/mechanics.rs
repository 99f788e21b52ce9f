// tests/mechanics.rs
use bsearch_payout::mechanics::{TieBreak, round_to_int};

#[test]
fn tie_break_only_matters_on_exact_halves() {
    use TieBreak::*;
    assert_eq!(round_to_int(50.5, HalfEven), 50);
    assert_eq!(round_to_int(50.5, HalfAwayFromZero), 51);
    assert_eq!(round_to_int(51.5, HalfEven), 52);
    assert_eq!(round_to_int(51.5, HalfAwayFromZero), 52);
    assert_eq!(round_to_int(-0.5, HalfAwayFromZero), -1);
    assert_eq!(round_to_int(-0.5, HalfEven), 0);
    for x in [1.25, 1.75, 38.125, 49.7265625] {
        assert_eq!(round_to_int(x, HalfEven), round_to_int(x, HalfAwayFromZero));
    }
}

#[test]
fn tie_break_names_round_trip_through_str() {
    for tb in [TieBreak::HalfEven, TieBreak::HalfAwayFromZero] {
        assert_eq!(tb.to_string().parse::<TieBreak>(), Ok(tb));
    }
    assert!("nearest".parse::<TieBreak>().is_err());
    assert_eq!(TieBreak::default(), TieBreak::HalfEven);
}

#[cfg(feature = "mech-stoch")]
#[test]
fn uniform_int_stays_inside_and_hits_both_ends() {
    use bevy_prng::WyRand;
    use bsearch_payout::mechanics::uniform_int;
    use rand_core::SeedableRng;

    let mut rng = WyRand::from_seed(123u64.to_le_bytes());
    let mut seen = [false; 10];
    for _ in 0..2_000 {
        let v = uniform_int(&mut rng, 1, 10);
        assert!((1..=10).contains(&v));
        seen[(v - 1) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[cfg(feature = "mech-stoch")]
#[test]
fn uniform_int_handles_extreme_bounds() {
    use bevy_prng::WyRand;
    use bsearch_payout::mechanics::uniform_int;
    use rand_core::SeedableRng;

    let mut rng = WyRand::from_seed(9u64.to_le_bytes());
    for _ in 0..100 {
        // full i64 span: hi - lo + 1 does not fit in u64
        uniform_int(&mut rng, i64::MIN, i64::MAX);
        let v = uniform_int(&mut rng, i64::MIN, 0);
        assert!(v <= 0);
        let w = uniform_int(&mut rng, i64::MAX - 1, i64::MAX);
        assert!(w >= i64::MAX - 1);
    }
}
