//! Building blocks shared by the effect pipelines.
//!
//! This module contains ports of the small processing idioms that recur
//! across the Airwindows effects: slew clamping, sag following, bump
//! resonators, undersampling helpers and the dither generator.

pub mod biquad;
pub mod convolver;
pub mod dither;
pub mod one_pole;
pub mod resonator;
pub mod sag;
pub mod slew;
pub mod undersample;

#[allow(unused_imports)]
use num_traits::float::Float;

/// Clips a sample symmetrically into `-limit..=limit`.
#[inline]
pub fn hard_clip(x: f64, limit: f64) -> f64 {
    x.clamp(-limit, limit)
}

/// Cubic saturation stage: pulls the sample toward zero by the square of
/// its own scaled magnitude.
#[inline]
pub fn cubic_drive(x: f64, amount: f64) -> f64 {
    x - (x * (x.abs() * amount) * (x.abs() * amount))
}

/// Sine-bounded output saturation.
///
/// The magnitude is capped just below pi/2 before the sine so the shaper
/// never folds back.
#[inline]
pub fn sin_clip(x: f64) -> f64 {
    let mut bridge = x.abs();
    if bridge > 1.57079633 {
        bridge = 1.57079633;
    }
    bridge = bridge.sin();
    if x > 0.0 {
        bridge
    } else {
        -bridge
    }
}
