//! Random source used for damage rolls and enemy stat generation.
//!
//! The generator is threaded explicitly through constructors and attack
//! resolution; nothing in game-core reaches for a global RNG. Tests substitute
//! scripted sources, the client plugs in an entropy-seeded generator.

/// Random source for game mechanics.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    ///
    /// A collapsed or inverted range returns `min` without drawing.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. The same seed always yields
/// the same sequence, which makes a seeded session replayable.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}
