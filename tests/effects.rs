//! Render tests for the effects

mod signal;
mod wav_writer;

use airwin_fx_dsp::effect::cabinet::Cabinet;
use airwin_fx_dsp::effect::fire_amp::FireAmp;
use airwin_fx_dsp::effect::glitch_shifter::GlitchShifter;
use airwin_fx_dsp::effect::sub_bass::SubBass;
use airwin_fx_dsp::effect::Effect;

const DURATION: usize = 44100;
const BURST: usize = 33075;

/// Bounds and energy checks shared by all render tests.
fn check(name: &str, samples: &[f32]) {
    for sample in samples {
        assert!(sample.is_finite(), "{name} produced a non-finite sample");
        assert!(sample.abs() < 8.0, "{name} ran away: {sample}");
    }
    assert!(
        signal::rms(samples) > 1.0e-4,
        "{name} produced no audible output"
    );
}

#[test]
fn cabs() {
    let mut fx = Cabinet::new();
    let left = signal::sine_burst(220.0, 0.5, BURST, DURATION);
    let right = signal::sine_burst(330.0, 0.5, BURST, DURATION);

    // vintage voicing with some room
    fx.set_parameter(0, 0.2).unwrap();
    fx.set_parameter(2, 0.5).unwrap();

    let (out_left, out_right) = signal::render(&mut fx, &left, &right);
    check("cabs", &out_left);
    check("cabs", &out_right);

    wav_writer::write("effects/cabs.wav", &out_left, &out_right).ok();
}

#[test]
fn dub_sub() {
    let mut fx = SubBass::new();
    let left = signal::sine_burst(82.4, 0.5, BURST, DURATION);
    let right = signal::sine_burst(82.4, 0.5, BURST, DURATION);

    // open up the grind and bass levels next to the default sub
    fx.set_parameter(1, 0.75).unwrap();
    fx.set_parameter(5, 0.75).unwrap();

    let (out_left, out_right) = signal::render(&mut fx, &left, &right);
    check("dub_sub", &out_left);
    check("dub_sub", &out_right);

    wav_writer::write("effects/dub_sub.wav", &out_left, &out_right).ok();
}

#[test]
fn fire_amp() {
    let mut fx = FireAmp::new();
    let left = signal::sine_burst(165.0, 0.5, BURST, DURATION);
    let right = signal::sine_burst(110.0, 0.5, BURST, DURATION);

    fx.set_parameter(0, 0.7).unwrap();

    let (out_left, out_right) = signal::render(&mut fx, &left, &right);
    check("fire_amp", &out_left);
    check("fire_amp", &out_right);

    wav_writer::write("effects/fire_amp.wav", &out_left, &out_right).ok();
}

#[test]
fn glitch_shifter() {
    let mut fx = GlitchShifter::new();
    let left = signal::sine_burst(220.0, 0.5, BURST, DURATION);
    let right = signal::sine_burst(220.0, 0.5, BURST, DURATION);

    // up a fourth, half wet
    fx.set_parameter(0, 0.71).unwrap();

    let (out_left, out_right) = signal::render(&mut fx, &left, &right);
    check("glitch_shifter", &out_left);
    check("glitch_shifter", &out_right);

    wav_writer::write("effects/glitch_shifter.wav", &out_left, &out_right).ok();
}
