//! Test signals and block rendering helpers

use airwin_fx_dsp::effect::Effect;

pub const SAMPLE_RATE: f64 = 44100.0;
pub const BLOCK_SIZE: usize = 64;

/// Returns a sine burst followed by silence up to `total` samples.
pub fn sine_burst(frequency: f64, amplitude: f64, burst: usize, total: usize) -> Vec<f32> {
    let mut samples = vec![0.0; total];

    for (n, sample) in samples.iter_mut().enumerate().take(burst) {
        let phase = core::f64::consts::TAU * frequency * n as f64 / SAMPLE_RATE;
        *sample = (phase.sin() * amplitude) as f32;
    }

    samples
}

/// Runs a stereo pair through an effect in blocks of the given size.
pub fn render_blocks(
    effect: &mut dyn Effect,
    left: &[f32],
    right: &[f32],
    block_size: usize,
) -> (Vec<f32>, Vec<f32>) {
    let frames = left.len().min(right.len());
    let mut out_left = vec![0.0; frames];
    let mut out_right = vec![0.0; frames];

    for start in (0..frames).step_by(block_size) {
        let end = (start + block_size).min(frames);
        let inputs = [&left[start..end], &right[start..end]];
        let mut outputs = [&mut out_left[start..end], &mut out_right[start..end]];
        effect.process(&inputs, &mut outputs);
    }

    (out_left, out_right)
}

/// Runs a stereo pair through an effect in [`BLOCK_SIZE`] blocks.
pub fn render(effect: &mut dyn Effect, left: &[f32], right: &[f32]) -> (Vec<f32>, Vec<f32>) {
    render_blocks(effect, left, right, BLOCK_SIZE)
}

/// Runs a stereo pair through the 64-bit path in [`BLOCK_SIZE`] blocks.
pub fn render_double(effect: &mut dyn Effect, left: &[f64], right: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let frames = left.len().min(right.len());
    let mut out_left = vec![0.0; frames];
    let mut out_right = vec![0.0; frames];

    for start in (0..frames).step_by(BLOCK_SIZE) {
        let end = (start + BLOCK_SIZE).min(frames);
        let inputs = [&left[start..end], &right[start..end]];
        let mut outputs = [&mut out_left[start..end], &mut out_right[start..end]];
        effect.process_double(&inputs, &mut outputs);
    }

    (out_left, out_right)
}

/// Root mean square of a run of samples.
pub fn rms(samples: &[f32]) -> f64 {
    let sum: f64 = samples.iter().map(|s| (*s as f64) * (*s as f64)).sum();
    (sum / samples.len() as f64).sqrt()
}
