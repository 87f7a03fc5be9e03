//! One-pole filter state, the workhorse of the voicing chains.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

/// Single smoothing pole usable as lowpass or highpass.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePole {
    state: f64,
}

impl OnePole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the state toward the sample by `amount` and returns it.
    #[inline]
    pub fn lowpass(&mut self, sample: f64, amount: f64) -> f64 {
        self.state = (self.state * (1.0 - amount)) + (sample * amount);
        self.state
    }

    /// Subtracts the lowpassed state from the sample.
    #[inline]
    pub fn highpass(&mut self, sample: f64, amount: f64) -> f64 {
        sample - self.lowpass(sample, amount)
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}
