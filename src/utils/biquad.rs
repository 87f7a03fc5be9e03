//! Fixed lowpass biquads used between gain stages.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

#[allow(unused_imports)]
use num_traits::float::Float;

/// Transposed direct form II lowpass biquad with per-channel state.
#[derive(Debug, Clone, Default)]
pub struct StereoBiquad {
    a0: f64,
    a1: f64,
    a2: f64,
    b1: f64,
    b2: f64,
    state: [[f64; 2]; 2],
}

impl StereoBiquad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retunes to a lowpass at `cutoff` (as a fraction of the sample rate)
    /// with the given resonance. State is kept across retuning.
    pub fn tune_lowpass(&mut self, cutoff: f64, resonance: f64) {
        let k = (core::f64::consts::PI * cutoff).tan();
        let norm = 1.0 / (1.0 + k / resonance + k * k);
        self.a0 = k * k * norm;
        self.a1 = 2.0 * self.a0;
        self.a2 = self.a0;
        self.b1 = 2.0 * (k * k - 1.0) * norm;
        self.b2 = (1.0 - k / resonance + k * k) * norm;
    }

    #[inline]
    pub fn run(&mut self, channel: usize, sample: f64) -> f64 {
        let s = &mut self.state[channel];
        let out = (sample * self.a0) + s[0];
        s[0] = (sample * self.a1) - (out * self.b1) + s[1];
        s[1] = (sample * self.a2) - (out * self.b2);
        out
    }

    pub fn reset(&mut self) {
        self.state = [[0.0; 2]; 2];
    }
}
