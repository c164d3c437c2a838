//! Random source used for chance rolls.
//!
//! Every roll is an independent Bernoulli trial. [`RngSource`] adapts any
//! [`rand::Rng`] by drawing an integer below the probability's exact
//! denominator and comparing it with the numerator, so no configured chance
//! is rounded. A chance of 0 never succeeds and a chance of 1 always does.

use rand::Rng;

use crate::profile::Probability;

/// Independent Bernoulli trials.
pub trait RandomSource {
    /// Succeed with probability `p`.
    fn bernoulli(&mut self, p: Probability) -> bool;
}

/// [`RandomSource`] backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn bernoulli(&mut self, p: Probability) -> bool {
        let (numerator, denominator) = p.fraction();
        let roll: u128 = self.rng.random_range(0..denominator);
        roll < numerator
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn extremes_are_certain() {
        let mut source = RngSource::new(SmallRng::seed_from_u64(7));
        for _ in 0..1000 {
            assert!(source.bernoulli(Probability::ALWAYS));
            assert!(!source.bernoulli(Probability::NEVER));
        }
    }

    #[test]
    fn half_chance_lands_near_half() {
        let mut source = RngSource::new(SmallRng::seed_from_u64(42));
        let half = Probability::new("p", dec!(0.5)).unwrap();
        let hits = (0..10_000).filter(|_| source.bernoulli(half)).count();
        assert!((4_500..=5_500).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn tiny_chances_are_not_rounded_away() {
        let mut source = RngSource::new(SmallRng::seed_from_u64(5));
        let rare = Probability::new("p", dec!(0.00004)).unwrap();
        let hits = (0..500_000).filter(|_| source.bernoulli(rare)).count();
        // Expected 20.
        assert!((1..=60).contains(&hits), "hits = {hits}");

        let near_certain = Probability::new("p", dec!(0.99996)).unwrap();
        let misses = (0..500_000)
            .filter(|_| !source.bernoulli(near_certain))
            .count();
        assert!((1..=60).contains(&misses), "misses = {misses}");
    }

    #[test]
    fn same_seed_same_rolls() {
        let p = Probability::new("p", dec!(0.3)).unwrap();
        let mut a = RngSource::new(SmallRng::seed_from_u64(99));
        let mut b = RngSource::new(SmallRng::seed_from_u64(99));
        let rolls_a: Vec<bool> = (0..64).map(|_| a.bernoulli(p)).collect();
        let rolls_b: Vec<bool> = (0..64).map(|_| b.bernoulli(p)).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
