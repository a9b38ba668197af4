//! Utility functions for seeded random number generation.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fast RNG suitable for no_std environments.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use gate_perceptron::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Draws a value uniformly from `[-scale, scale)`.
#[inline]
pub fn symmetric_uniform<R: Rng>(rng: &mut R, scale: f32) -> f32 {
    (rng.random::<f32>() * 2.0 - 1.0) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = rng_from_seed(42);
        let mut rng2 = rng_from_seed(42);

        for _ in 0..100 {
            assert_eq!(rng1.random::<u64>(), rng2.random::<u64>());
        }
    }

    #[test]
    fn symmetric_uniform_in_range() {
        let mut rng = rng_from_seed(7);
        for _ in 0..1000 {
            let v = symmetric_uniform(&mut rng, 1e-2);
            assert!((-1e-2..1e-2).contains(&v));
        }
    }

    #[test]
    fn zero_scale_yields_zero() {
        let mut rng = rng_from_seed(3);
        assert_eq!(symmetric_uniform(&mut rng, 0.0).abs(), 0.0);
    }
}
