//! Dub Sub: bass amplifier with a synthesized sub octave.
//!
//! The input splits at a movable crossover. Highs run through a cascaded
//! cubic grind, lows feed a bank of noise cross-blended bump resonators,
//! and a polarity flipflop clocked by the low band's zero crossings folds
//! a copy of the bump an octave down. Both banks mix back in at their own
//! bipolar gains, so they can reinforce or fight the grind.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{EffectError, ParamBank, Params, Sample};
use crate::utils::dither::{companion_seed, NoiseState, DEFAULT_SEED};
use crate::utils::one_pole::OnePole;
use crate::utils::resonator::BumpTrio;
use crate::utils::{cubic_drive, hard_clip};

const PARAM_NAMES: [&str; 10] = [
    "Treble Grind",
    "Grind Output",
    "Crossover",
    "Bass Drive",
    "Bass Voicing",
    "Bass Output",
    "Sub Drive",
    "Sub Voicing",
    "Sub Output",
    "Mix",
];
const DEFAULTS: [f32; 10] = [0.75, 0.5, 0.5, 0.5, 0.5, 0.5, 0.25, 0.25, 0.75, 0.5];

/// Drive applied per pass of the grind loop; the remainder gets one pass.
const GRIND_STEP: f64 = 0.60;

/// State one channel carries between samples.
#[derive(Debug, Clone)]
struct Channel {
    noise: NoiseState,
    /// Input activity gate; decays toward zero over silence.
    osc_gate: f64,
    /// Crossover poles, the flip flag picks one triple per sample.
    split: [[OnePole; 3]; 2],
    /// Rumble cleanup ahead of the head bump.
    bass_pre: [OnePole; 22],
    bass_post: [OnePole; 2],
    sub_pre: OnePole,
    sub_post: OnePole,
    head_bump: BumpTrio,
    sub_bump: BumpTrio,
    was_negative: bool,
    sub_octave: bool,
    last_head_bump: f64,
    last_sub_bump: f64,
}

impl Channel {
    fn new(seed: u32) -> Self {
        Self {
            noise: NoiseState::new(seed),
            osc_gate: 1.0,
            split: [[OnePole::new(); 3]; 2],
            bass_pre: [OnePole::new(); 22],
            bass_post: [OnePole::new(); 2],
            sub_pre: OnePole::new(),
            sub_post: OnePole::new(),
            head_bump: BumpTrio::new(),
            sub_bump: BumpTrio::new(),
            was_negative: false,
            sub_octave: false,
            last_head_bump: 0.0,
            last_sub_bump: 0.0,
        }
    }

    fn reset(&mut self) {
        self.osc_gate = 1.0;
        self.split = [[OnePole::new(); 3]; 2];
        self.bass_pre = [OnePole::new(); 22];
        self.bass_post = [OnePole::new(); 2];
        self.sub_pre.reset();
        self.sub_post.reset();
        self.head_bump.reset();
        self.sub_bump.reset();
        self.was_negative = false;
        self.sub_octave = false;
        self.last_head_bump = 0.0;
        self.last_sub_bump = 0.0;
    }
}

/// Bass enhancer with crossover grind and a sub-octave voice.
#[derive(Debug, Clone)]
pub struct SubBass {
    params: Params,
    sample_rate: f64,
    channels: [Channel; 2],
    flip: bool,
    /// Bump slot rotation, 1 to 3; zero only before the first sample, when
    /// neither bank is driven yet.
    bflip: usize,
}

impl SubBass {
    pub fn new() -> Self {
        Self {
            params: Params::new(&DEFAULTS),
            sample_rate: crate::REFERENCE_SAMPLE_RATE,
            channels: [
                Channel::new(DEFAULT_SEED),
                Channel::new(companion_seed(DEFAULT_SEED)),
            ],
            flip: false,
            bflip: 0,
        }
    }

    fn render<T: Sample>(&mut self, inputs: &[&[T]; 2], outputs: &mut [&mut [T]; 2]) {
        let p: [f64; 10] = self.params.snapshot();
        let overallscale = self.sample_rate / crate::REFERENCE_SAMPLE_RATE;

        let drive_one = (p[0] * 3.0).powi(2);
        let drive_output = (p[1] * 2.0) - 1.0;
        let iir_amount = ((p[2] * 0.33) + 0.1) / overallscale;
        let bass_gain = p[3] * 0.1;
        let head_bump_freq = ((p[4] * 0.1) + 0.0001) / overallscale;
        let iir_bass = head_bump_freq / 44.1;
        let bass_out_gain = (p[5] * 2.0) - 1.0;
        let sub_gain = p[6] * 0.1;
        let sub_bump_freq = ((p[7] * 0.1) + 0.0001) / overallscale;
        let iir_sub = sub_bump_freq / 44.1;
        let sub_out_gain = (p[8] * 2.0) - 1.0;
        let fuzz = 0.111;
        let wet = p[9];

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

            let bank = if self.flip { 0 } else { 1 };
            let slot = self.bflip;
            for (sample, state) in samples.iter_mut().zip(self.channels.iter_mut()) {
                let dry = *sample;

                state.osc_gate += (*sample * 10.0).abs();
                state.osc_gate -= 0.001;
                state.osc_gate = state.osc_gate.clamp(0.0, 1.0);
                // only opens up over silence, choking off bump oscillation
                let settle = (1.0 - state.osc_gate) * 0.00001;

                let mut high = *sample;
                for pole in state.split[bank].iter_mut() {
                    high = pole.highpass(high, iir_amount);
                }
                let mut low = *sample - high;

                high = hard_clip(high, 1.0);
                let mut grind = drive_one;
                while grind > GRIND_STEP {
                    grind -= GRIND_STEP;
                    high = cubic_drive(high, GRIND_STEP) * (1.0 + GRIND_STEP);
                }
                high = cubic_drive(high, grind) * (1.0 + grind);

                // the raw low band clocks the sub-octave polarity
                if low > 0.0 {
                    if state.was_negative {
                        state.sub_octave = !state.sub_octave;
                    }
                    state.was_negative = false;
                } else {
                    state.was_negative = true;
                }

                let randy = state.noise.fraction() * fuzz;

                for pole in state.bass_pre.iter_mut() {
                    low = pole.highpass(low, iir_bass);
                }

                let mut head =
                    state
                        .head_bump
                        .drive(slot, low, bass_gain, head_bump_freq, randy / 2.0, settle);
                for pole in state.bass_post.iter_mut() {
                    head = pole.highpass(head, iir_bass);
                }

                let mut sub = state.sub_pre.highpass(head, iir_sub);
                sub = sub.abs();
                if !state.sub_octave {
                    sub = -sub;
                }
                sub = state
                    .sub_bump
                    .drive(slot, sub, sub_gain, sub_bump_freq, randy / 2.0, settle);
                sub = state.sub_post.highpass(sub, iir_sub);

                let mut out = high * drive_output;
                out += (head + state.last_head_bump) * bass_out_gain;
                out += (sub + state.last_sub_bump) * sub_out_gain;
                state.last_head_bump = head;
                state.last_sub_bump = sub;

                if wet != 1.0 {
                    out = (out * wet) + (dry * (1.0 - wet));
                }
                *sample = out;
            }
            self.flip = !self.flip;
            self.bflip += 1;
            if self.bflip > 3 {
                self.bflip = 1;
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

impl Default for SubBass {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Effect for SubBass {
    fn name(&self) -> &'static str {
        "Dub Sub"
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
        Ok("%")
    }

    fn parameter_display(&self, index: usize) -> Result<String, EffectError> {
        let value = self.get_parameter(index)? as f64;
        match index {
            // the output trims swing negative for phase games
            1 | 5 | 8 => Ok(format!("{:.1}", ((value * 2.0) - 1.0) * 100.0)),
            _ => Ok(format!("{:.1}", value * 100.0)),
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
        self.flip = false;
        self.bflip = 0;
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
