//! Deterministic random number generation for dealing.
//!
//! The rules themselves are fully deterministic; randomness only enters when
//! a pooled deck is shuffled and dealt. Same seed, same deal, on every
//! platform and toolchain.
//!
//! ```
//! use skystones::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to spread context hashes across the seed space.
const CONTEXT_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// Keeps the deal stream separate from any other use of the same seed.
    /// The context name is hashed with FNV-1a, so the derived seed is fixed
    /// for a given seed and name.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let hash = context.bytes().fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });
        Self::new(self.seed.wrapping_add(hash.wrapping_mul(CONTEXT_MIX)))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
