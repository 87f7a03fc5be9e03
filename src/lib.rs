#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod effect;
pub mod preset;
pub mod resources;
pub mod utils;

/// Sample rate all time constants of the ported effects are tuned for.
///
/// Effects running at higher host rates derive an undersampling span from
/// the ratio of the host rate to this reference so that their time-domain
/// behavior stays consistent.
pub const REFERENCE_SAMPLE_RATE: f64 = 44100.0;
