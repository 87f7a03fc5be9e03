//! Glitch Shifter: granular pitch shifter spliced at zero crossings.
//!
//! Incoming audio lands in an integer delay ring at 24-bit scale while a
//! fractional tap walks the ring at the pitch ratio. Whenever the tap
//! runs off either end of its window, the shifter jumps it to the recorded
//! zero crossing whose recent waveform best matches the tap's own history,
//! so grains butt together mid-cycle instead of clicking. With feedback the
//! ring re-ingests its own output and the splices smear into deliberate
//! glitch textures.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{EffectError, ParamBank, Params, Sample};
use crate::utils::dither::{companion_seed, NoiseState, DEFAULT_SEED};
use crate::utils::hard_clip;

const PARAM_NAMES: [&str; 5] = ["Pitch", "Trim", "Tighten", "Feedback", "Mix"];
const DEFAULTS: [f32; 5] = [0.5, 0.5, 0.5, 0.0, 0.5];

/// Ring length: the widest window twice over, plus room for the two
/// samples of read lookahead.
const RING_LEN: usize = 131074;

/// Zero cross records kept per channel.
const RECORDS: usize = 257;

/// Full scale of the integer ring, 24-bit linear space.
const RING_SCALE: f64 = 8388352.0;

/// Wraps a tap index into `0..=width`.
///
/// The top slot stays distinct from slot zero; writes mirror the live
/// window upward so reads just past `width` still land on current data.
#[inline]
fn wrap_tap(mut index: i32, width: i32) -> usize {
    while index < 0 {
        index += width;
    }
    while index > width {
        index -= width;
    }
    index as usize
}

/// State one channel carries between samples.
#[derive(Debug, Clone)]
struct Channel {
    noise: NoiseState,
    ring: Vec<i32>,
    /// Ring position of each recorded zero cross.
    offset: [i32; RECORDS],
    /// First sample past the cross and the two before it.
    pastzero: [i32; RECORDS],
    previous: [i32; RECORDS],
    third: [i32; RECORDS],
    /// Most recent record slot; wraps to keep taking new crosses.
    crosses: i32,
    /// Usable records, saturating at the full register.
    realzeroes: i32,
    last_temp: i64,
    third_temp: i64,
    fourth_temp: i64,
    since_cross: i32,
    air_prev: f64,
    air_even: f64,
    air_odd: f64,
    position: f64,
    splicing: bool,
}

impl Channel {
    fn new(seed: u32) -> Self {
        Self {
            noise: NoiseState::new(seed),
            ring: vec![0; RING_LEN],
            offset: [0; RECORDS],
            pastzero: [0; RECORDS],
            previous: [0; RECORDS],
            third: [0; RECORDS],
            crosses: 0,
            realzeroes: 0,
            last_temp: 0,
            third_temp: 0,
            fourth_temp: 0,
            since_cross: 0,
            air_prev: 0.0,
            air_even: 0.0,
            air_odd: 0.0,
            position: 0.0,
            splicing: false,
        }
    }

    fn reset(&mut self) {
        self.ring.fill(0);
        self.offset = [0; RECORDS];
        self.pastzero = [0; RECORDS];
        self.previous = [0; RECORDS];
        self.third = [0; RECORDS];
        self.crosses = 0;
        self.realzeroes = 0;
        self.last_temp = 0;
        self.third_temp = 0;
        self.fourth_temp = 0;
        self.since_cross = 0;
        self.air_prev = 0.0;
        self.air_even = 0.0;
        self.air_odd = 0.0;
        self.position = 0.0;
        self.splicing = false;
    }

    /// Jumps the tap to the recorded cross whose surrounding samples best
    /// continue the tap's own trajectory, scanning newest first with a
    /// bias toward recent records.
    fn splice_to_match(&mut self, bias: f64) {
        let mut diff = 99999999.0;
        let mut best = 0usize;
        for scan in (0..self.realzeroes).rev() {
            let mut scanone = scan + self.crosses;
            if scanone > 256 {
                scanone -= 256;
            }
            let slot = scanone as usize;
            // the tap history enters twice: the newest point has not
            // shifted down yet when a splice lands
            let howdiff = ((self.last_temp - self.pastzero[slot] as i64)
                + (self.last_temp - self.previous[slot] as i64)
                + (self.third_temp - self.third[slot] as i64)
                + self.fourth_temp) as f64
                - (scan as f64 * bias);
            if howdiff < diff {
                diff = howdiff;
                best = slot;
            }
        }
        self.position = (self.offset[best] - self.since_cross) as f64;
        self.crosses = 0;
        self.realzeroes = 0;
        self.splicing = true;
    }
}

/// Pitch shifter gated by zero-cross splicing, with feedback into its own
/// delay ring.
#[derive(Debug, Clone)]
pub struct GlitchShifter {
    params: Params,
    sample_rate: f64,
    channels: [Channel; 2],
    flip: bool,
    gcount: i32,
    last_width: i32,
}

impl GlitchShifter {
    pub fn new() -> Self {
        Self {
            params: Params::new(&DEFAULTS),
            sample_rate: crate::REFERENCE_SAMPLE_RATE,
            channels: [
                Channel::new(DEFAULT_SEED),
                Channel::new(companion_seed(DEFAULT_SEED)),
            ],
            flip: false,
            gcount: 0,
            last_width: 16386,
        }
    }

    fn render<T: Sample>(&mut self, inputs: &[&[T]; 2], outputs: &mut [&mut [T]; 2]) {
        let p: [f64; 5] = self.params.snapshot();

        let note = ((p[0] * 24.999) as i32) - 12;
        let trim = (p[1] * 2.0) - 1.0;
        let mut speed = (note as f64 / 12.0) + trim;
        if speed < 0.0 {
            // cap how far down the tap can run; it must never stall at 0 hz
            speed *= 0.5;
        }
        let width = (65536.0 - ((1.0 - (1.0 - p[2]).powi(2)) * 65530.0)) as i32;
        let bias = p[2].powi(3);
        let feedback = p[3] / 1.5;
        let wet = p[4];

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

            if self.last_width != width {
                // resizing the window orphans every recorded cross
                for state in self.channels.iter_mut() {
                    state.crosses = 0;
                    state.realzeroes = 0;
                }
                self.last_width = width;
            }
            self.gcount += 1;
            if self.gcount < 0 || self.gcount > width {
                self.gcount = 0;
            }

            let flip = self.flip;
            let gcount = self.gcount;
            for (sample, state) in samples.iter_mut().zip(self.channels.iter_mut()) {
                let dry = *sample;

                // air band, compensating the interpolation's treble loss
                let mut air_factor = state.air_prev - *sample;
                if flip {
                    state.air_even += air_factor;
                    state.air_odd -= air_factor;
                    air_factor = state.air_even;
                } else {
                    state.air_odd += air_factor;
                    state.air_even -= air_factor;
                    air_factor = state.air_odd;
                }
                state.air_odd = (state.air_odd - ((state.air_odd - state.air_even) / 256.0)) / 1.0001;
                state.air_even = (state.air_even - ((state.air_even - state.air_odd) / 256.0)) / 1.0001;
                state.air_prev = *sample;
                *sample += air_factor;

                // feed the ring, most recent sample first
                let count = wrap_tap(gcount, width);
                let countone = wrap_tap(gcount - 1, width);
                let counttwo = wrap_tap(gcount - 2, width);

                let value =
                    ((*sample * RING_SCALE) + (state.last_temp as f64 * feedback)) as i32;
                state.ring[count + width as usize] = value;
                state.ring[count] = value;

                let newest = state.ring[count];
                let prior = state.ring[countone];
                if (prior > 0 && newest < 0) || (prior < 0 && newest > 0) {
                    // source crossed zero; log it for the splice search
                    state.crosses += 1;
                    state.realzeroes += 1;
                    if state.crosses > 256 {
                        state.crosses = 0;
                    }
                    if state.realzeroes > 256 {
                        state.realzeroes = 256;
                    }
                    let slot = state.crosses as usize;
                    state.offset[slot] = count as i32;
                    state.pastzero[slot] = newest;
                    state.previous[slot] = prior;
                    state.third[slot] = state.ring[counttwo];
                }

                state.position -= speed;
                if state.position > width as f64 {
                    // tap caught up to the buffer end
                    if state.realzeroes > 0 {
                        state.splice_to_match(bias);
                    } else {
                        state.position -= width as f64;
                        state.crosses = 0;
                        state.realzeroes = 0;
                        state.splicing = true;
                    }
                }
                if state.position < 0.0 {
                    // tap caught up to the dry write head
                    if state.realzeroes > 0 {
                        state.splice_to_match(bias);
                    } else {
                        state.position += width as f64;
                        state.crosses = 0;
                        state.realzeroes = 0;
                        state.splicing = true;
                    }
                }

                // the buffer runs forward, so the tap reads backward from
                // the write head and interpolates upward
                let tap = wrap_tap(gcount - state.position.floor() as i32, width);
                let frac = state.position - state.position.floor();
                let p0 = state.ring[tap] as i64;
                let p1 = state.ring[tap + 1] as i64;
                let p2 = state.ring[tap + 2] as i64;
                let mut temp = (p0 as f64 * (1.0 - frac)) as i64;
                temp += p1;
                temp += (p2 as f64 * frac) as i64;
                // slope correction in integer math, then back to ring scale
                temp -= ((p0 - p1) - (p1 - p2)) / 50;
                temp /= 2;
                if temp.abs() as f64 > RING_SCALE {
                    // bad buffer mojo; stay on the current trajectory
                    temp = state.last_temp + (state.last_temp - state.third_temp);
                }

                state.since_cross += 1;
                if state.since_cross < 0 || state.since_cross > width {
                    state.since_cross = 0;
                }
                if state.splicing {
                    // halve into the grain we just jumped to
                    temp = (temp + (state.last_temp + (state.last_temp - state.third_temp))) / 2;
                    state.splicing = false;
                }
                if (state.last_temp > 0 && temp < 0) || (state.last_temp < 0 && temp > 0) {
                    state.since_cross = 0;
                }

                state.fourth_temp = state.third_temp;
                state.third_temp = state.last_temp;
                state.last_temp = temp;

                let out = (dry * (1.0 - wet)) + ((temp as f64 / RING_SCALE) * wet);
                // splices can throw insane outputs
                *sample = hard_clip(out, 4.0);
            }
            self.flip = !self.flip;

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

impl Default for GlitchShifter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Effect for GlitchShifter {
    fn name(&self) -> &'static str {
        "Glitch Shifter"
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
        match index {
            0 => Ok("semitones"),
            _ => Ok("%"),
        }
    }

    fn parameter_display(&self, index: usize) -> Result<String, EffectError> {
        let value = self.get_parameter(index)? as f64;
        match index {
            0 => Ok(format!("{}", ((value * 24.999) as i32) - 12)),
            1 => Ok(format!("{:.1}", ((value * 2.0) - 1.0) * 100.0)),
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
        self.gcount = 0;
        self.last_width = 16386;
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
