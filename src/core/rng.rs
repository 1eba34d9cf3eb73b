//! Deterministic random number generation for game setup.
//!
//! The rule engine consumes an already-ordered draw pile and never draws
//! random numbers itself. Setup uses `GameRng` to shuffle the bag, so the
//! same seed always produces the same game. Context seeds are derived with a
//! fixed hash rather than std's `DefaultHasher`, so they are stable across
//! toolchains; the shuffle itself is pinned by the `rand` 0.8 major version.
//!
//! ```
//! use rust_tne::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! let mut x = vec![1, 2, 3, 4, 5, 6];
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG.
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

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// so adding a new random step to setup does not reshuffle the bag.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        // FNV-1a over the context, spread with the golden-ratio increment.
        // Both are fixed, so derived seeds never change between builds.
        let hash = context.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        });
        Self::new(self.seed.wrapping_add(hash.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
