//! Seedable randomness for cave construction and turn resolution.

use cave_hunt_core::RandomSource;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// [`RandomSource`] backed by a seedable ChaCha stream.
///
/// The CLI keeps gameplay draws on their own stream so that replaying a
/// seed reproduces a hunt regardless of how many draws cave construction
/// consumed.
pub(crate) struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    /// Creates a source over the provided generator.
    pub(crate) fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl RandomSource for ChaChaSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}
