//! Cabs: speaker cabinet simulation.
//!
//! Six cabinet voicings as short convolutions whose tap weights ride on a
//! sag envelope, bracketed by slew clamping for room character and a pair
//! of head bump resonators for body. The whole wet path runs undersampled
//! at high host rates; raw and half-sample tracks are folded back onto the
//! dry signal as band-limited differences.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{EffectError, ParamBank, Params, Sample};
use crate::resources;
use crate::utils::convolver::Convolver;
use crate::utils::dither::{companion_seed, NoiseState, DEFAULT_SEED};
use crate::utils::resonator::BumpPair;
use crate::utils::sag::SagFollower;
use crate::utils::slew::SlewClamp;
use crate::utils::undersample::{cycle_len, AliasFold, HalfwayTap, RefSpread};

const PARAM_NAMES: [&str; 6] = ["Type", "Tone", "Room", "Size", "Off-Axis", "Output"];
const DEFAULTS: [f32; 6] = [0.0, 0.66, 0.33, 0.66, 0.33, 0.5];

/// State one channel carries between samples.
#[derive(Debug, Clone, Default)]
struct Channel {
    noise: NoiseState,
    halfway: HalfwayTap,
    pre_raw: SlewClamp,
    pre_half: SlewClamp,
    post_raw: SlewClamp,
    post_half: SlewClamp,
    post_post: SlewClamp,
    sag: SagFollower,
    history: Convolver<83>,
    head_bump: BumpPair,
    half_bump: BumpPair,
    alias: AliasFold,
    prev_diff: f64,
    spread: RefSpread,
}

impl Channel {
    fn new(seed: u32) -> Self {
        Self {
            noise: NoiseState::new(seed),
            ..Self::default()
        }
    }

    fn reset(&mut self) {
        self.halfway.reset();
        self.pre_raw.reset();
        self.pre_half.reset();
        self.post_raw.reset();
        self.post_half.reset();
        self.post_post.reset();
        self.sag.reset();
        self.history.reset();
        self.head_bump.reset();
        self.half_bump.reset();
        self.alias.reset();
        self.prev_diff = 0.0;
        self.spread.reset();
    }
}

/// Speaker cabinet effect with six voicings.
#[derive(Debug, Clone)]
pub struct Cabinet {
    params: Params,
    sample_rate: f64,
    channels: [Channel; 2],
    cycle: usize,
    flip: bool,
}

impl Cabinet {
    pub fn new() -> Self {
        Self {
            params: Params::new(&DEFAULTS),
            sample_rate: crate::REFERENCE_SAMPLE_RATE,
            channels: [
                Channel::new(DEFAULT_SEED),
                Channel::new(companion_seed(DEFAULT_SEED)),
            ],
            cycle: 0,
            flip: false,
        }
    }

    fn render<T: Sample>(&mut self, inputs: &[&[T]; 2], outputs: &mut [&mut [T]; 2]) {
        let p: [f64; 6] = self.params.snapshot();
        let span = cycle_len(self.sample_rate);
        if self.cycle > span - 1 {
            self.cycle = span - 1;
        }

        let speaker = ((p[0] * 5.999).floor() as usize) + 1;
        let taps = resources::CABINET_MODELS[speaker - 1];
        let color_intensity = p[1].powi(4);
        let correct_boost = 1.0 + (color_intensity * 4.0);
        let correct_dry = 1.0 - color_intensity;
        // room loud is slew
        let threshold = (1.0 - p[2]).powi(5) + 0.021;
        let rarefaction = threshold.cbrt();
        let post_threshold = rarefaction.sqrt();
        let post_rarefaction = post_threshold.cbrt();
        let post_trim = post_rarefaction.sqrt();
        let head_bump_freq = 0.0298 + ((1.0 - p[3]) / 8.0);
        let lows_pad = 0.12 + (head_bump_freq * 12.0);
        let dc_block = head_bump_freq.powi(2) / 8.0;
        let heavy = p[4].powi(3);
        let output = p[5].powi(2);
        let dynamic_conv = 5.0 * p[1].powi(2) * p[2].powi(2);
        let offset = 4 + ((p[3] * 5.0) as usize);

        let frames = inputs[0]
            .len()
            .min(inputs[1].len())
            .min(outputs[0].len())
            .min(outputs[1].len());

        for i in 0..frames {
            let mut samples = [
                self.channels[0]
                    .noise
                    .guard(inputs[0][i].to_f64().unwrap_or_default()),
                self.channels[1]
                    .noise
                    .guard(inputs[1][i].to_f64().unwrap_or_default()),
            ];

            self.cycle += 1;
            if self.cycle == span {
                // chorus sample: everything in here runs undersampled
                let flip = self.flip;
                for (sample, state) in samples.iter_mut().zip(self.channels.iter_mut()) {
                    let dry = *sample;
                    let mut raw = *sample;
                    let mut halfway = state.halfway.interpolate(raw);
                    let half_dry = halfway;

                    raw = state.pre_raw.clamp(raw, threshold, rarefaction);
                    halfway = state.pre_half.clamp(halfway, threshold, rarefaction);
                    // retain only the difference with the raw track
                    halfway -= raw;

                    let envelope = state.sag.push_abs(raw.abs(), offset) * dynamic_conv;
                    state.history.push(raw);
                    let voiced = state.history.convolve(taps, envelope);
                    raw = ((raw * correct_dry) + (voiced * color_intensity)) / correct_boost;
                    halfway += raw;

                    raw = state.post_raw.clamp(raw, threshold, rarefaction);
                    halfway = state.post_half.clamp(halfway, threshold, rarefaction);

                    let mut bump = state.head_bump.drive(raw, head_bump_freq, dc_block, flip);
                    if bump.abs() > 100.0 {
                        state.head_bump.reset();
                        state.half_bump.reset();
                        bump = 0.0;
                    }
                    bump /= lows_pad;
                    raw = (raw * (1.0 - heavy)) + (bump * heavy);

                    let mut bump = state.half_bump.drive(halfway, head_bump_freq, dc_block, flip);
                    if bump.abs() > 100.0 {
                        state.head_bump.reset();
                        state.half_bump.reset();
                        bump = 0.0;
                    }
                    bump /= lows_pad;
                    halfway = (halfway * (1.0 - heavy)) + (bump * heavy);

                    // one fold state serves both tracks of the channel
                    let half_diff = state.alias.fold(halfway - half_dry, flip);
                    let diff = state.alias.fold(raw - dry, flip);

                    let mut out = dry + (diff + half_diff + state.prev_diff);
                    state.prev_diff = diff / 2.0;

                    out = state.post_post.clamp(out, post_threshold, post_rarefaction);
                    out /= post_trim;
                    out *= output;

                    state.spread.store(out, span);
                    *sample = state.spread.tap(0);
                }
                self.flip = !self.flip;
                self.cycle = 0;
            } else {
                // walking through the reference table between chorus samples
                samples[0] = self.channels[0].spread.tap(self.cycle);
                samples[1] = self.channels[1].spread.tap(self.cycle);
            }

            for (ch, state) in self.channels.iter_mut().enumerate() {
                let shaped = if T::DITHERED {
                    state.noise.dither(samples[ch])
                } else {
                    state.noise.advance();
                    samples[ch]
                };
                outputs[ch][i] = T::from_f64(shaped).unwrap_or_default();
            }
        }
    }
}

impl Default for Cabinet {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Effect for Cabinet {
    fn name(&self) -> &'static str {
        "Cabs"
    }

    fn params(&self) -> &ParamBank {
        self.params.bank()
    }

    fn params_handle(&self) -> Arc<ParamBank> {
        self.params.handle()
    }

    fn parameter_name(&self, index: usize) -> Result<&'static str, EffectError> {
        PARAM_NAMES
            .get(index)
            .copied()
            .ok_or(EffectError::InvalidParameterIndex {
                index,
                count: PARAM_NAMES.len(),
            })
    }

    fn parameter_label(&self, index: usize) -> Result<&'static str, EffectError> {
        self.parameter_name(index)?;
        Ok("")
    }

    fn parameter_display(&self, index: usize) -> Result<String, EffectError> {
        let value = self.get_parameter(index)? as f64;
        match index {
            0 => {
                let model = (value * 5.999) as usize;
                Ok(String::from(resources::CABINET_MODEL_NAMES[model]))
            }
            _ => Ok(format!("{:.3}", value)),
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn reset(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.reset();
        }
        self.cycle = 0;
        self.flip = false;
    }

    fn seed_noise(&mut self, seed: u32) {
        self.channels[0].noise.reseed(seed);
        self.channels[1].noise.reseed(companion_seed(seed));
    }

    fn process(&mut self, inputs: &[&[f32]; 2], outputs: &mut [&mut [f32]; 2]) {
        self.render(inputs, outputs);
    }

    fn process_double(&mut self, inputs: &[&[f64]; 2], outputs: &mut [&mut [f64]; 2]) {
        self.render(inputs, outputs);
    }
}
