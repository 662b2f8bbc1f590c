//! Randomness service for biased trials.
//!
//! The neighbor sampler consumes random bits through an explicitly
//! passed-in [`CoinFlipper`] rather than ambient process-wide state, so
//! callers can seed the generator and replay every decision in tests.

use rand::Rng;

use crate::error::{Error, Result};

/// A biased coin backed by a caller-supplied random number generator.
pub struct CoinFlipper<R> {
    rng: R,
}

impl<R: Rng> CoinFlipper<R> {
    /// Wraps the given generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a uniform value from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.random()
    }

    /// Runs one biased trial, succeeding with probability
    /// `success_probability`.
    ///
    /// Fails with [`Error::InvalidProbability`] when the probability lies
    /// outside `[0, 1]`.
    pub fn trial_succeeds(&mut self, success_probability: f64) -> Result<bool> {
        if !(0.0..=1.0).contains(&success_probability) {
            return Err(Error::InvalidProbability(success_probability));
        }
        Ok(self.rng.random_bool(success_probability))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn seeded_coin(seed: u64) -> CoinFlipper<ChaCha8Rng> {
        CoinFlipper::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_invalid_probability() {
        let mut coin = seeded_coin(1);
        assert_eq!(
            coin.trial_succeeds(1.5),
            Err(Error::InvalidProbability(1.5))
        );
        assert_eq!(
            coin.trial_succeeds(-0.1),
            Err(Error::InvalidProbability(-0.1))
        );
        assert!(coin.trial_succeeds(f64::NAN).is_err());
    }

    #[test]
    fn test_degenerate_probabilities() {
        let mut coin = seeded_coin(2);
        for _ in 0..100 {
            assert_eq!(coin.trial_succeeds(0.0), Ok(false));
            assert_eq!(coin.trial_succeeds(1.0), Ok(true));
        }
    }

    #[test]
    fn test_polarity_matches_probability() {
        // Success frequency tracks p, not 1 - p. Deterministic under seed.
        let mut coin = seeded_coin(42);
        let trials = 10_000;
        let mut successes = 0;
        for _ in 0..trials {
            if coin.trial_succeeds(0.3).unwrap() {
                successes += 1;
            }
        }
        assert!(
            (2_700..=3_300).contains(&successes),
            "expected ~3000 successes out of {trials}, got {successes}"
        );
    }

    #[test]
    fn test_unit_range() {
        let mut coin = seeded_coin(7);
        for _ in 0..1_000 {
            let x = coin.unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_seeded_replay() {
        let mut first = seeded_coin(99);
        let mut second = seeded_coin(99);
        for _ in 0..100 {
            assert_eq!(
                first.trial_succeeds(0.5).unwrap(),
                second.trial_succeeds(0.5).unwrap()
            );
        }
    }
}
