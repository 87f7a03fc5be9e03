//! Ring-buffer convolution against sag-modulated tap tables.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

#[allow(unused_imports)]
use num_traits::float::Float;

/// Convolution history of depth `N` with a monotone ring index.
///
/// Only the `N - 1` most recent delayed samples participate in a tap sum.
/// Tables longer than that stay valid: the original plugins shifted a
/// fixed number of history slots, so taps past the shifted range always
/// multiplied zero. Capping the walk at the history depth reproduces that.
#[derive(Debug, Clone)]
pub struct Convolver<const N: usize> {
    history: [f64; N],
    head: usize,
}

impl<const N: usize> Default for Convolver<N> {
    fn default() -> Self {
        Self {
            history: [0.0; N],
            head: 0,
        }
    }
}

impl<const N: usize> Convolver<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the newest sample, overwriting the oldest.
    #[inline]
    pub fn push(&mut self, sample: f64) {
        self.head = if self.head == 0 { N - 1 } else { self.head - 1 };
        self.history[self.head] = sample;
    }

    /// Sample pushed `delay` pushes ago; 0 is the newest.
    #[inline]
    pub fn delayed(&self, delay: usize) -> f64 {
        self.history[(self.head + delay) % N]
    }

    /// Tap sum with a shared sag envelope:
    /// `sum += delayed(k + 1) * (base + sag * envelope)` over all taps.
    #[inline]
    pub fn convolve(&self, taps: &[(f64, f64)], envelope: f64) -> f64 {
        let mut sum = 0.0;
        for (k, &(base, sag)) in taps.iter().enumerate().take(N - 1) {
            sum += self.delayed(k + 1) * (base + (sag * envelope));
        }
        sum
    }

    /// Tap sum where every tap is modulated by its own delayed magnitude:
    /// `sum += delayed(k + 1) * (base + sag * |delayed(k + 1)|)`.
    #[inline]
    pub fn convolve_self(&self, taps: &[(f64, f64)]) -> f64 {
        let mut sum = 0.0;
        for (k, &(base, sag)) in taps.iter().enumerate().take(N - 1) {
            let tap = self.delayed(k + 1);
            sum += tap * (base + (sag * tap.abs()));
        }
        sum
    }

    pub fn reset(&mut self) {
        self.history = [0.0; N];
        self.head = 0;
    }
}
