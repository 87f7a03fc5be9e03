//! Undersampling machinery for effects tuned to 44.1 kHz.
//!
//! At host rates above the reference rate the expensive part of a pipeline
//! only runs every `span` samples ("chorus samples"). These helpers cover
//! the tap interpolation into the decimated domain, the antialiasing
//! correction, and the expansion of decimated outputs back to full rate.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

use crate::REFERENCE_SAMPLE_RATE;

/// Number of raw samples per chorus sample at the given host rate.
///
/// 1 at 44.1/48k, 2 at 88.2/96k, 4 at 176.4/192k. Out-of-range rates
/// saturate instead of erroring.
#[inline]
pub fn cycle_len(sample_rate: f64) -> usize {
    let overallscale = sample_rate / REFERENCE_SAMPLE_RATE;
    (overallscale as usize).clamp(1, 4)
}

/// Half-sample interpolator over the last four raw samples.
#[derive(Debug, Clone, Default)]
pub struct HalfwayTap {
    last1: f64,
    last2: f64,
    last3: f64,
}

impl HalfwayTap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn interpolate(&mut self, sample: f64) -> f64 {
        let halfway = (sample + self.last1 + ((-self.last2 + self.last3) * 0.05)) / 2.0;
        self.last3 = self.last2;
        self.last2 = self.last1;
        self.last1 = sample;
        halfway
    }

    pub fn reset(&mut self) {
        self.last1 = 0.0;
        self.last2 = 0.0;
        self.last3 = 0.0;
    }
}

/// Leaky integrator pair that reconstructs a band-limited difference.
///
/// The raw and halfway differences of one channel share a single pair; the
/// global flip flag swaps which integrator accumulates and which drains.
#[derive(Debug, Clone, Default)]
pub struct AliasFold {
    even: f64,
    odd: f64,
}

impl AliasFold {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fold(&mut self, diff: f64, flip: bool) -> f64 {
        if flip {
            self.even *= 0.94;
            self.odd *= 0.94;
            self.even += diff;
            self.odd -= diff;
            self.even * 0.94
        } else {
            self.odd *= 0.94;
            self.even *= 0.94;
            self.odd += diff;
            self.even -= diff;
            self.odd * 0.94
        }
    }

    pub fn reset(&mut self) {
        self.even = 0.0;
        self.odd = 0.0;
    }
}

/// Expansion table from decimated outputs back to raw rate.
///
/// On each chorus sample the new output is spread across the span by
/// linear interpolation against the previous chorus output; the samples in
/// between tap the table at the running cycle position.
#[derive(Debug, Clone, Default)]
pub struct RefSpread {
    refs: [f64; 5],
}

impl RefSpread {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn store(&mut self, sample: f64, span: usize) {
        match span {
            4 => {
                self.refs[0] = self.refs[4];
                self.refs[2] = (self.refs[0] + sample) / 2.0;
                self.refs[1] = (self.refs[0] + self.refs[2]) / 2.0;
                self.refs[3] = (self.refs[2] + sample) / 2.0;
                self.refs[4] = sample;
            }
            3 => {
                self.refs[0] = self.refs[3];
                self.refs[2] = (self.refs[0] + self.refs[0] + sample) / 3.0;
                self.refs[1] = (self.refs[0] + sample + sample) / 3.0;
                self.refs[3] = sample;
            }
            2 => {
                self.refs[0] = self.refs[2];
                self.refs[1] = (self.refs[0] + sample) / 2.0;
                self.refs[2] = sample;
            }
            _ => {
                self.refs[0] = sample;
            }
        }
    }

    #[inline]
    pub fn tap(&self, cycle: usize) -> f64 {
        self.refs[cycle]
    }

    pub fn reset(&mut self) {
        self.refs = [0.0; 5];
    }
}

/// Cascade of up to three alternating one-pole averagers.
///
/// Smooths the stairstep left by the expansion; spans below 2 bypass it.
#[derive(Debug, Clone, Default)]
pub struct StepSmoother {
    poles: [f64; 3],
}

impl StepSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn smooth(&mut self, mut sample: f64, span: usize) -> f64 {
        if span >= 4 {
            let held = sample;
            sample = (sample + self.poles[2]) * 0.5;
            self.poles[2] = held;
        }
        if span >= 3 {
            let held = sample;
            sample = (sample + self.poles[1]) * 0.5;
            self.poles[1] = held;
        }
        if span >= 2 {
            let held = sample;
            sample = (sample + self.poles[0]) * 0.5;
            self.poles[0] = held;
        }
        sample
    }

    pub fn reset(&mut self) {
        self.poles = [0.0; 3];
    }
}
