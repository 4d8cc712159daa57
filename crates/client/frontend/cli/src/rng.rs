//! Process-wide random source.
use game_core::{PcgRng, RngOracle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Entropy-seeded generator for normal play.
pub struct EntropyRng(StdRng);

impl EntropyRng {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngOracle for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.0.r#gen()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..=max)
    }
}

/// Seeded runs replay the same rolls; unseeded runs draw from entropy.
pub fn build_rng(seed: Option<u64>) -> Box<dyn RngOracle> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded rng");
            Box::new(PcgRng::new(seed))
        }
        None => Box::new(EntropyRng::new()),
    }
}
