//! Renders a demo program through every effect in the registry and writes
//! the results as stereo WAV files into the `out` directory.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use airwin_fx_dsp::effect::registry;
use airwin_fx_dsp::REFERENCE_SAMPLE_RATE;

const BLOCK_SIZE: usize = 64;
const BURST: usize = 66150;
const DURATION: usize = 88200;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let left = program(110.0);
    let right = program(165.0);

    for entry in registry() {
        let mut fx = (entry.create)();

        let mut out_left = vec![0.0f32; DURATION];
        let mut out_right = vec![0.0f32; DURATION];
        for start in (0..DURATION).step_by(BLOCK_SIZE) {
            let end = (start + BLOCK_SIZE).min(DURATION);
            let inputs = [&left[start..end], &right[start..end]];
            let mut outputs = [&mut out_left[start..end], &mut out_right[start..end]];
            fx.process(&inputs, &mut outputs);
        }

        log::info!(
            "{} ({}): peak {:.3}, rms {:.3}",
            entry.name,
            entry.group,
            peak(&out_left).max(peak(&out_right)),
            rms(&out_left).max(rms(&out_right)),
        );

        let filename = entry.name.to_lowercase().replace(' ', "_");
        write_wav(&format!("render/{filename}.wav"), &out_left, &out_right);
    }
}

/// Sine burst with a silent tail so decays stay audible.
fn program(frequency: f64) -> Vec<f32> {
    let mut samples = vec![0.0; DURATION];

    for (n, sample) in samples.iter_mut().enumerate().take(BURST) {
        let phase = std::f64::consts::TAU * frequency * n as f64 / REFERENCE_SAMPLE_RATE;
        *sample = (phase.sin() * 0.5) as f32;
    }

    samples
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0, |peak, s| peak.max(s.abs()))
}

fn rms(samples: &[f32]) -> f64 {
    let sum: f64 = samples.iter().map(|s| (*s as f64) * (*s as f64)).sum();
    (sum / samples.len() as f64).sqrt()
}

fn write_wav(filename: &str, left: &[f32], right: &[f32]) {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());
    std::fs::create_dir_all(path.parent().unwrap()).ok();

    let spec = WavSpec {
        channels: 2,
        sample_rate: REFERENCE_SAMPLE_RATE as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();

    for (l, r) in left.iter().zip(right.iter()) {
        writer.write_sample(*l).unwrap();
        writer.write_sample(*r).unwrap();
    }

    writer.finalize().unwrap();
}
