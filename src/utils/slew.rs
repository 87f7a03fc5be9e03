//! Asymmetric slew rate clamping.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

/// Per-sample delta limiter with independent rise and fall rates.
///
/// Rise limits how far the signal may move above the previous output, fall
/// how far below. Both rates are positive values; they are derived from the
/// room parameter at control rate.
#[derive(Debug, Clone, Default)]
pub struct SlewClamp {
    last: f64,
}

impl SlewClamp {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clamp(&mut self, sample: f64, rise: f64, fall: f64) -> f64 {
        let delta = sample - self.last;
        let mut clamped = sample;
        if delta > rise {
            clamped = self.last + rise;
        }
        if -delta > fall {
            clamped = self.last - fall;
        }
        self.last = clamped;
        clamped
    }

    pub fn reset(&mut self) {
        self.last = 0.0;
    }
}
