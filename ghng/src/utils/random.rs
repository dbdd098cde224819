#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Specifies underlying random generator type.
pub type RandomGen = SmallRng;

/// Provides the way to use randomized values in generic way.
///
/// All methods take `&mut self`: a single generator is threaded through the whole training
/// call chain, so a fixed seed reproduces the same sequence of draws.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&mut self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    /// Produces random index in [0, len) range.
    fn uniform_index(&mut self, len: usize) -> usize {
        assert!(len > 0);
        self.uniform_int(0, len as i32 - 1) as usize
    }

    /// Returns RNG.
    fn get_rng(&mut self) -> &mut RandomGen;
}

/// A default random implementation.
pub struct DefaultRandom {
    rng: RandomGen,
}

impl DefaultRandom {
    /// Creates a new instance `DefaultRandom` with seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: RandomGen::seed_from_u64(seed) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RandomGen::from_entropy() }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&mut self) -> &mut RandomGen {
        &mut self.rng
    }
}
