//! Fire Amp: high-gain amp head into a 4x12 cabinet.
//!
//! Twelve cascaded gain stages in pairs, each pair behind a fixed lowpass
//! biquad that strips ultrasonics before the next clipping round. The gain
//! and the bass content of each stage shrink as the chain progresses. After
//! the chain: tone lowpass, an early-reflection speaker box, a sine clipper,
//! sub reinforcement, and an undersampled cabinet convolution.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{EffectError, ParamBank, Params, Sample};
use crate::resources::cabinet_tables::AMP_CABINET;
use crate::utils::biquad::StereoBiquad;
use crate::utils::convolver::Convolver;
use crate::utils::dither::{companion_seed, NoiseState, DEFAULT_SEED};
use crate::utils::one_pole::OnePole;
use crate::utils::undersample::{cycle_len, RefSpread, StepSmoother};
use crate::utils::{cubic_drive, hard_clip, sin_clip};

const PARAM_NAMES: [&str; 4] = ["Gain", "Tone", "Output", "Mix"];
const DEFAULTS: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Drive amount shared by all twelve stages.
const STAGE_DRIVE: f64 = 0.654;

/// Resonances of the six ultrasonic-scrub biquads, steep to gentle.
const SCRUB_RESONANCES: [f64; 6] = [
    4.46570214, 1.51387132, 0.93979296, 0.70710678, 0.52972649, 0.50316379,
];

/// State one channel carries between samples.
#[derive(Debug, Clone)]
struct Channel {
    noise: NoiseState,
    stage_iir: [f64; 12],
    stage_smooth: [f64; 12],
    tone: OnePole,
    spk_a: OnePole,
    spk_b: OnePole,
    sub: OnePole,
    /// Early-reflection buffers, one per flip phase.
    reflections: [[f64; 257]; 2],
    store: f64,
    cab_history: Convolver<85>,
    smooth_cab_a: f64,
    smooth_cab_b: f64,
    last_cab: f64,
    spread: RefSpread,
    smoother: StepSmoother,
}

impl Default for Channel {
    fn default() -> Self {
        Self {
            noise: NoiseState::default(),
            stage_iir: [0.0; 12],
            stage_smooth: [0.0; 12],
            tone: OnePole::new(),
            spk_a: OnePole::new(),
            spk_b: OnePole::new(),
            sub: OnePole::new(),
            reflections: [[0.0; 257]; 2],
            store: 0.0,
            cab_history: Convolver::new(),
            smooth_cab_a: 0.0,
            smooth_cab_b: 0.0,
            last_cab: 0.0,
            spread: RefSpread::new(),
            smoother: StepSmoother::new(),
        }
    }
}

impl Channel {
    fn new(seed: u32) -> Self {
        Self {
            noise: NoiseState::new(seed),
            ..Self::default()
        }
    }

    /// One gain stage: level trim, shrinking bass trap, cubic overdrive
    /// and a two-sample averaging sum. `level` and `basscut` walk toward
    /// their rest values as the chain progresses.
    #[inline]
    fn gain_stage(
        &mut self,
        stage: usize,
        sample: f64,
        level: &mut f64,
        basscut: &mut f64,
        eq: f64,
        bassfactor: f64,
    ) -> f64 {
        let mut s = sample * *level;
        *level = ((*level * 7.0) + 1.0) / 8.0;
        self.stage_iir[stage] = (self.stage_iir[stage] * (1.0 - eq)) + (s * eq);
        *basscut *= bassfactor;
        s -= self.stage_iir[stage] * *basscut;
        s = cubic_drive(s, STAGE_DRIVE);
        let sum = self.stage_smooth[stage] + s;
        self.stage_smooth[stage] = s;
        sum
    }

    fn reset(&mut self) {
        self.stage_iir = [0.0; 12];
        self.stage_smooth = [0.0; 12];
        self.tone.reset();
        self.spk_a.reset();
        self.spk_b.reset();
        self.sub.reset();
        self.reflections = [[0.0; 257]; 2];
        self.store = 0.0;
        self.cab_history.reset();
        self.smooth_cab_a = 0.0;
        self.smooth_cab_b = 0.0;
        self.last_cab = 0.0;
        self.spread.reset();
        self.smoother.reset();
    }
}

/// Staged amp simulation with speaker box and cabinet convolution.
#[derive(Debug, Clone)]
pub struct FireAmp {
    params: Params,
    sample_rate: f64,
    channels: [Channel; 2],
    scrub: [StereoBiquad; 6],
    count: i32,
    flip: bool,
    cycle: usize,
}

impl FireAmp {
    pub fn new() -> Self {
        Self {
            params: Params::new(&DEFAULTS),
            sample_rate: crate::REFERENCE_SAMPLE_RATE,
            channels: [
                Channel::new(DEFAULT_SEED),
                Channel::new(companion_seed(DEFAULT_SEED)),
            ],
            scrub: [
                StereoBiquad::new(),
                StereoBiquad::new(),
                StereoBiquad::new(),
                StereoBiquad::new(),
                StereoBiquad::new(),
                StereoBiquad::new(),
            ],
            count: 0,
            flip: false,
            cycle: 0,
        }
    }

    fn render<T: Sample>(&mut self, inputs: &[&[T]; 2], outputs: &mut [&mut [T]; 2]) {
        let p: [f64; 4] = self.params.snapshot();
        let bass_fill = p[0];
        let output_level = p[2];
        let wet = p[3];

        let span = cycle_len(self.sample_rate);
        if self.cycle > span - 1 {
            self.cycle = span - 1;
        }

        let start_level = bass_fill;
        let basstrim = bass_fill / 16.0;
        let tone_eq = (p[1] / self.sample_rate) * 22050.0;
        let eq = (basstrim / self.sample_rate) * 22050.0;
        let bleed = output_level / 16.0;
        let bassfactor = 1.0 - (basstrim * basstrim);
        let beq = (bleed / self.sample_rate) * 22050.0;

        let mut diagonal = (0.000861678 * self.sample_rate) as usize;
        if diagonal > 127 {
            diagonal = 127;
        }
        let side = (diagonal as f64 / core::f64::consts::SQRT_2) as usize;
        let down = (side + diagonal) / 2;

        let cutoff = ((15000.0 + (p[1] * 10000.0)) / self.sample_rate).clamp(0.001, 0.49);
        for (biquad, resonance) in self.scrub.iter_mut().zip(SCRUB_RESONANCES) {
            biquad.tune_lowpass(cutoff, resonance);
        }

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
            let dry = samples;

            let mut levels = [start_level; 2];
            let mut basscuts = [0.98; 2];
            for group in 0..6 {
                for (ch, sample) in samples.iter_mut().enumerate() {
                    *sample = self.scrub[group].run(ch, *sample);
                }
                if group == 0 {
                    // the chain starts from a hard-clipped signal
                    for sample in samples.iter_mut() {
                        *sample = hard_clip(*sample, 1.0);
                    }
                }
                for (ch, sample) in samples.iter_mut().enumerate() {
                    let state = &mut self.channels[ch];
                    for stage in [group * 2, group * 2 + 1] {
                        *sample = state.gain_stage(
                            stage,
                            *sample,
                            &mut levels[ch],
                            &mut basscuts[ch],
                            eq,
                            bassfactor,
                        );
                    }
                }
            }

            if self.count < 0 || self.count > 128 {
                self.count = 128;
            }
            let base = self.count as usize;
            let bank = if self.flip { 0 } else { 1 };

            for (ch, sample) in samples.iter_mut().enumerate() {
                let state = &mut self.channels[ch];
                *sample = state.tone.lowpass(*sample, tone_eq);

                let spk = state.spk_a.lowpass(*sample, beq);
                let buf = &mut state.reflections[bank];
                buf[base + 128] = spk;
                buf[base] = spk;
                let reflected = buf[base + down] + buf[base + side] + buf[base + diagonal];
                *sample += state.spk_b.lowpass(reflected, beq) * bleed;

                *sample = sin_clip(*sample * output_level);

                let sub = state.sub.lowpass(*sample, beq);
                *sample += sub * bass_fill * output_level;

                let randy = state.noise.fraction() * 0.053;
                *sample = ((*sample * (1.0 - randy)) + (state.store * randy)) * output_level;
                state.store = *sample;
            }
            self.count -= 1;
            self.flip = !self.flip;

            if wet != 1.0 {
                for (sample, dry) in samples.iter_mut().zip(dry) {
                    *sample = (*sample * wet) + (dry * (1.0 - wet));
                }
            }

            self.cycle += 1;
            if self.cycle == span {
                // cabinet convolution runs at the decimated rate
                for (ch, sample) in samples.iter_mut().enumerate() {
                    let state = &mut self.channels[ch];
                    let temp = (*sample + state.smooth_cab_a) / 3.0;
                    state.smooth_cab_a = *sample;
                    let mut s = temp;

                    state.cab_history.push(s);
                    s += state.cab_history.convolve_self(&AMP_CABINET);

                    let temp = (s + state.smooth_cab_b) / 3.0;
                    state.smooth_cab_b = s;
                    s = temp / 4.0;

                    let randy = state.noise.fraction() * 0.057;
                    let blended = ((((s * (1.0 - randy)) + (state.last_cab * randy)) * wet)
                        + (dry[ch] * (1.0 - wet)))
                        * output_level;
                    state.last_cab = s;
                    *sample = blended;
                    state.spread.store(*sample, span);
                }
                self.cycle = 0;
                samples[0] = self.channels[0].spread.tap(0);
                samples[1] = self.channels[1].spread.tap(0);
            } else {
                samples[0] = self.channels[0].spread.tap(self.cycle);
                samples[1] = self.channels[1].spread.tap(self.cycle);
            }

            for (ch, state) in self.channels.iter_mut().enumerate() {
                samples[ch] = state.smoother.smooth(samples[ch], span);
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

impl Default for FireAmp {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Effect for FireAmp {
    fn name(&self) -> &'static str {
        "Fire Amp"
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
        Ok(format!("{:.1}", value * 100.0))
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
        for biquad in self.scrub.iter_mut() {
            biquad.reset();
        }
        self.count = 0;
        self.flip = false;
        self.cycle = 0;
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
