//! Sag envelope follower for the cabinet convolution.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

/// Short moving average over recent sample magnitudes.
///
/// Emulates power supply sag: the follower level rises with signal energy
/// and drains by a fixed amount per sample. The window walks a descending
/// slot index with the original's dual-write layout, so entries `span`
/// slots back drop out of the sum as new ones come in. `span` is the
/// integer lookback (4 to 9) derived from the size parameter.
#[derive(Debug, Clone)]
pub struct SagFollower {
    window: [f64; 21],
    slot: usize,
    level: f64,
}

impl Default for SagFollower {
    fn default() -> Self {
        Self {
            window: [0.0; 21],
            slot: 0,
            level: 0.0,
        }
    }
}

impl SagFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes one magnitude and returns the windowed average.
    #[inline]
    pub fn push_abs(&mut self, magnitude: f64, span: usize) -> f64 {
        let slot = self.slot;
        self.window[slot + 10] = magnitude;
        self.window[slot] = magnitude;
        self.level += self.window[slot] / span as f64;
        self.level -= self.window[slot + span] / span as f64;
        self.level -= 0.0001;
        if self.level < 0.0 {
            self.level = 0.0;
        }
        if self.level > 13.0 {
            self.level = 13.0;
        }
        self.slot = if slot == 0 { 10 } else { slot - 1 };
        self.level / span as f64
    }

    pub fn reset(&mut self) {
        self.window = [0.0; 21];
        self.slot = 0;
        self.level = 0.0;
    }
}
