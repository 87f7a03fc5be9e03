//! Effect trait, parameter surface and registry.
//!
//! All effects process stereo blocks one sample at a time with per-channel
//! DSP state and a handful of counters shared between channels. Parameters
//! are read once at block start, so control changes land on block
//! boundaries. Block processing never allocates, locks or fails; fallible
//! calls exist only on the control surface.

pub mod cabinet;
pub mod fire_amp;
pub mod glitch_shifter;
pub mod params;
pub mod sub_bass;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use dyn_clone::DynClone;
use num_traits::{Float, FromPrimitive, ToPrimitive};
use thiserror::Error;

pub use params::{ParamBank, Params};

/// Sample formats accepted by the block interface.
///
/// All internal math runs in `f64` regardless of the block format. Only
/// the 32-bit output path adds the exponent-tracking dither; the 64-bit
/// path advances the noise generator without the additive term, keeping
/// both precisions on the same random sequence.
pub trait Sample: Float + FromPrimitive + ToPrimitive + Default {
    const DITHERED: bool;
}

impl Sample for f32 {
    const DITHERED: bool = true;
}

impl Sample for f64 {
    const DITHERED: bool = false;
}

/// Errors reported by the control surface.
///
/// Block processing recovers from runaway and range conditions in place
/// and never returns these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("parameter index {index} out of range for {count} parameters")]
    InvalidParameterIndex { index: usize, count: usize },
    #[error("malformed preset data")]
    MalformedPreset,
    #[error("unsupported preset version {0}")]
    UnsupportedPresetVersion(u16),
    #[error("preset belongs to a different effect")]
    WrongEffect,
}

/// Stereo audio effect with a normalized parameter surface.
///
/// Parameters are plain `f32` values in `0.0..=1.0`; each effect maps them
/// to its internal ranges at block start. Setting parameters goes through
/// the atomic bank, so a controller thread may hold [`Effect::params_handle`]
/// and write while the audio thread owns the effect itself.
pub trait Effect: DynClone + Send {
    /// Effect name as listed in the registry.
    fn name(&self) -> &'static str;

    /// Parameter bank backing this instance.
    fn params(&self) -> &ParamBank;

    /// Shared handle to the bank for a controller thread.
    fn params_handle(&self) -> Arc<ParamBank>;

    fn parameter_count(&self) -> usize {
        self.params().len()
    }

    fn parameter_name(&self, index: usize) -> Result<&'static str, EffectError>;

    /// Unit suffix shown next to the value; empty when unitless.
    fn parameter_label(&self, index: usize) -> Result<&'static str, EffectError>;

    /// Text form of the current value of a parameter.
    fn parameter_display(&self, index: usize) -> Result<String, EffectError>;

    /// Parses text into a normalized value using the percent convention.
    /// Unparseable text maps to zero rather than an error.
    fn parse_parameter(&self, index: usize, text: &str) -> Result<f32, EffectError> {
        check_index(index, self.parameter_count())?;
        let value = text.trim().parse::<f64>().unwrap_or(0.0) / 100.0;
        Ok(value.clamp(0.0, 1.0) as f32)
    }

    /// Stores a parameter value, clamped into `0.0..=1.0`.
    fn set_parameter(&self, index: usize, value: f32) -> Result<(), EffectError> {
        check_index(index, self.parameter_count())?;
        self.params().set(index, value);
        Ok(())
    }

    fn get_parameter(&self, index: usize) -> Result<f32, EffectError> {
        check_index(index, self.parameter_count())?;
        Ok(self.params().get(index))
    }

    /// Sets the host sample rate, effective from the next block.
    fn set_sample_rate(&mut self, sample_rate: f64);

    fn sample_rate(&self) -> f64;

    /// Returns all DSP state to the post-construction condition. Parameter
    /// values and noise seeds are kept.
    fn reset(&mut self);

    /// Reseeds the per-channel noise generators for reproducible renders.
    fn seed_noise(&mut self, seed: u32);

    /// Processes one stereo block of 32-bit samples.
    ///
    /// Input and output slices may differ in length; the shortest of the
    /// four bounds the frame count.
    fn process(&mut self, inputs: &[&[f32]; 2], outputs: &mut [&mut [f32]; 2]);

    /// Processes one stereo block of 64-bit samples.
    fn process_double(&mut self, inputs: &[&[f64]; 2], outputs: &mut [&mut [f64]; 2]);
}

dyn_clone::clone_trait_object!(Effect);

fn check_index(index: usize, count: usize) -> Result<(), EffectError> {
    if index < count {
        Ok(())
    } else {
        Err(EffectError::InvalidParameterIndex { index, count })
    }
}

/// Effect flavors available from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Cabinet,
    SubBass,
    FireAmp,
    GlitchShifter,
}

/// Registry row tying the metadata of the original effect bank to a
/// factory function.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub kind: EffectKind,
    pub name: &'static str,
    /// Menu group of the original bank.
    pub group: &'static str,
    /// Sort key within the group; lower comes first.
    pub display_order: i32,
    pub create: fn() -> Box<dyn Effect>,
}

static REGISTRY: [Registration; 4] = [
    Registration {
        kind: EffectKind::FireAmp,
        name: "Fire Amp",
        group: "Saturation And More",
        display_order: 312,
        create: || Box::new(fire_amp::FireAmp::new()),
    },
    Registration {
        kind: EffectKind::Cabinet,
        name: "Cabs",
        group: "Filter",
        display_order: 410,
        create: || Box::new(cabinet::Cabinet::new()),
    },
    Registration {
        kind: EffectKind::SubBass,
        name: "Dub Sub",
        group: "Filter",
        display_order: 422,
        create: || Box::new(sub_bass::SubBass::new()),
    },
    Registration {
        kind: EffectKind::GlitchShifter,
        name: "Glitch Shifter",
        group: "Pitch",
        display_order: 500,
        create: || Box::new(glitch_shifter::GlitchShifter::new()),
    },
];

/// All effects in this crate with their original bank grouping.
pub fn registry() -> &'static [Registration] {
    &REGISTRY
}

/// Builds a fresh instance of the given flavor with default parameters.
pub fn create_effect(kind: EffectKind) -> Box<dyn Effect> {
    match kind {
        EffectKind::Cabinet => Box::new(cabinet::Cabinet::new()),
        EffectKind::SubBass => Box::new(sub_bass::SubBass::new()),
        EffectKind::FireAmp => Box::new(fire_amp::FireAmp::new()),
        EffectKind::GlitchShifter => Box::new(glitch_shifter::GlitchShifter::new()),
    }
}
