use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by one game session, so a run can be reproduced from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// `true` with the given probability, clamped to `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.rng.random::<f64>() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random_range(1..=225u32), b.random_range(1..=225u32));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SessionRng::new(42);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_from_random_keeps_seed() {
        let rng = SessionRng::from_random();
        let mut replay = SessionRng::new(rng.seed());
        let mut original = rng;
        assert_eq!(original.random_range(0..1000u32), replay.random_range(0..1000u32));
    }
}
