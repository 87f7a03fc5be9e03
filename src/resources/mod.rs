//! Coefficient tables for the convolution stages.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

pub mod cabinet_tables;

/// Cabinet models in selector order of the type parameter.
pub const CABINET_MODELS: [&[(f64, f64)]; 6] = [
    cabinet_tables::HIGH_POWER_STACK.as_slice(),
    cabinet_tables::VINTAGE_STACK.as_slice(),
    cabinet_tables::BOUTIQUE_STACK.as_slice(),
    cabinet_tables::LARGE_COMBO.as_slice(),
    cabinet_tables::SMALL_COMBO.as_slice(),
    cabinet_tables::BASS_AMP.as_slice(),
];

/// Display names matching [`CABINET_MODELS`].
pub const CABINET_MODEL_NAMES: [&str; 6] =
    ["Stack", "Vintage", "Boutique", "Large", "Small", "Bass Amp"];
