//! Noise generator used for denormal protection and output dither.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

#[allow(unused_imports)]
use num_traits::float::Float;

/// Default seed for a left channel generator.
pub const DEFAULT_SEED: u32 = 2463534242;

/// Derives the right channel seed from the left one, so the two channels
/// never share a sequence.
#[inline]
pub fn companion_seed(seed: u32) -> u32 {
    seed ^ 0x9e3779b9
}

/// Per-channel 32-bit xorshift state.
///
/// The generator doubles as the denormal noise floor and as the source of
/// the exponent-tracking output dither. The state must never be zero
/// (xorshift has a fixed point there), so seeds are raised to the same
/// floor the original plugins use.
#[derive(Debug, Clone)]
pub struct NoiseState {
    word: u32,
}

impl Default for NoiseState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoiseState {
    pub fn new(seed: u32) -> Self {
        Self {
            word: seed.max(16386),
        }
    }

    pub fn reseed(&mut self, seed: u32) {
        self.word = seed.max(16386);
    }

    /// Replaces denormal-range samples with a tiny noise floor value.
    #[inline]
    pub fn guard(&self, sample: f64) -> f64 {
        if sample.abs() < 1.18e-23 {
            self.word as f64 * 1.18e-17
        } else {
            sample
        }
    }

    /// Current word as a fraction in `0.0..=1.0`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.word as f64 / u32::MAX as f64
    }

    /// Advances the xorshift generator by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.word ^= self.word << 13;
        self.word ^= self.word >> 17;
        self.word ^= self.word << 5;
    }

    /// Adds dither scaled to the binary exponent of the sample itself, so
    /// the noise tracks the signal magnitude.
    ///
    /// Advances the generator. The 64-bit output path calls [`advance`]
    /// instead, skipping the additive term while keeping both precisions on
    /// the same random sequence.
    ///
    /// [`advance`]: NoiseState::advance
    #[inline]
    pub fn dither(&mut self, sample: f64) -> f64 {
        let (_, expon) = libm::frexpf(sample as f32);
        self.advance();
        sample + ((self.word as f64 - 2147483647.0) * 5.5e-36 * libm::exp2((expon + 62) as f64))
    }
}
