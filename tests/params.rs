//! Tests for the parameter surface, the registry and the preset codec

use airwin_fx_dsp::effect::cabinet::Cabinet;
use airwin_fx_dsp::effect::fire_amp::FireAmp;
use airwin_fx_dsp::effect::glitch_shifter::GlitchShifter;
use airwin_fx_dsp::effect::sub_bass::SubBass;
use airwin_fx_dsp::effect::{create_effect, registry, Effect, EffectError, EffectKind};
use airwin_fx_dsp::preset;

/// Builds preset bytes by hand, the way a host would store them.
fn preset_bytes(effect_name: &str, params: &[(&str, f32)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&preset::MAGIC);
    bytes.extend_from_slice(&preset::VERSION.to_le_bytes());
    bytes.push(effect_name.len() as u8);
    bytes.extend_from_slice(effect_name.as_bytes());
    bytes.extend_from_slice(&(params.len() as u16).to_le_bytes());
    for (name, value) in params {
        bytes.push(name.len() as u8);
        bytes.extend_from_slice(name.as_bytes());
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

#[test]
fn registry_lists_every_effect() {
    let reg = registry();
    assert_eq!(reg.len(), 4);

    let names: Vec<&str> = reg.iter().map(|entry| entry.name).collect();
    assert!(names.contains(&"Cabs"));
    assert!(names.contains(&"Dub Sub"));
    assert!(names.contains(&"Fire Amp"));
    assert!(names.contains(&"Glitch Shifter"));

    for entry in reg {
        let effect = (entry.create)();
        assert_eq!(effect.name(), entry.name);
        assert!(effect.parameter_count() > 0);
        assert!(!entry.group.is_empty());
        assert!(entry.display_order > 0);
    }
}

#[test]
fn create_by_kind() {
    assert_eq!(create_effect(EffectKind::Cabinet).name(), "Cabs");
    assert_eq!(create_effect(EffectKind::SubBass).name(), "Dub Sub");
    assert_eq!(create_effect(EffectKind::FireAmp).name(), "Fire Amp");
    assert_eq!(
        create_effect(EffectKind::GlitchShifter).name(),
        "Glitch Shifter"
    );
}

#[test]
fn defaults_match_the_panels() {
    let cabs = Cabinet::new();
    for (index, expected) in [0.0, 0.66, 0.33, 0.66, 0.33, 0.5].iter().enumerate() {
        assert_eq!(cabs.get_parameter(index).unwrap(), *expected);
    }

    // the amp ships fully wet
    let amp = FireAmp::new();
    assert_eq!(amp.get_parameter(3).unwrap(), 1.0);

    // the shifter ships without feedback
    let shifter = GlitchShifter::new();
    assert_eq!(shifter.get_parameter(3).unwrap(), 0.0);

    let sub = SubBass::new();
    assert_eq!(sub.get_parameter(0).unwrap(), 0.75);
    assert_eq!(sub.get_parameter(8).unwrap(), 0.75);
}

#[test]
fn out_of_range_values_clamp() {
    let fx = FireAmp::new();

    fx.set_parameter(0, 1.5).unwrap();
    assert_eq!(fx.get_parameter(0).unwrap(), 1.0);

    fx.set_parameter(0, -0.25).unwrap();
    assert_eq!(fx.get_parameter(0).unwrap(), 0.0);

    // clamping in-range values changes nothing
    fx.set_parameter(0, 0.625).unwrap();
    fx.set_parameter(0, fx.get_parameter(0).unwrap()).unwrap();
    assert_eq!(fx.get_parameter(0).unwrap(), 0.625);
}

#[test]
fn invalid_indices_error() {
    let fx = Cabinet::new();
    assert_eq!(
        fx.get_parameter(6),
        Err(EffectError::InvalidParameterIndex { index: 6, count: 6 })
    );
    assert!(fx.set_parameter(6, 0.5).is_err());
    assert!(fx.parameter_name(99).is_err());
    assert!(fx.parameter_label(6).is_err());
    assert!(fx.parameter_display(6).is_err());
    assert!(fx.parse_parameter(6, "50").is_err());
}

#[test]
fn names_and_labels() {
    let sub = SubBass::new();
    assert_eq!(sub.parameter_count(), 10);
    assert_eq!(sub.parameter_name(0).unwrap(), "Treble Grind");
    assert_eq!(sub.parameter_name(9).unwrap(), "Mix");
    assert_eq!(sub.parameter_label(0).unwrap(), "%");

    let shifter = GlitchShifter::new();
    assert_eq!(shifter.parameter_name(0).unwrap(), "Pitch");
    assert_eq!(shifter.parameter_label(0).unwrap(), "semitones");
    assert_eq!(shifter.parameter_label(4).unwrap(), "%");

    // cabinet values are unitless
    let cabs = Cabinet::new();
    assert_eq!(cabs.parameter_label(0).unwrap(), "");
}

#[test]
fn displays_follow_the_panels() {
    let cabs = Cabinet::new();
    assert_eq!(cabs.parameter_display(0).unwrap(), "Stack");
    cabs.set_parameter(0, 1.0).unwrap();
    assert_eq!(cabs.parameter_display(0).unwrap(), "Bass Amp");

    let shifter = GlitchShifter::new();
    assert_eq!(shifter.parameter_display(0).unwrap(), "0");
    shifter.set_parameter(0, 1.0).unwrap();
    assert_eq!(shifter.parameter_display(0).unwrap(), "12");
    shifter.set_parameter(0, 0.0).unwrap();
    assert_eq!(shifter.parameter_display(0).unwrap(), "-12");

    // output trims read as a bipolar percentage
    let sub = SubBass::new();
    assert_eq!(sub.parameter_display(1).unwrap(), "0.0");
    assert_eq!(sub.parameter_display(9).unwrap(), "50.0");

    let amp = FireAmp::new();
    assert_eq!(amp.parameter_display(3).unwrap(), "100.0");
}

#[test]
fn parse_uses_the_percent_convention() {
    let fx = FireAmp::new();
    assert_eq!(fx.parse_parameter(0, "50").unwrap(), 0.5);
    assert_eq!(fx.parse_parameter(0, " 25.0 ").unwrap(), 0.25);
    assert_eq!(fx.parse_parameter(0, "150").unwrap(), 1.0);
    assert_eq!(fx.parse_parameter(0, "-40").unwrap(), 0.0);
    assert_eq!(fx.parse_parameter(0, "not a number").unwrap(), 0.0);
}

#[test]
fn controller_handle_writes_show_up() {
    let fx = GlitchShifter::new();
    let handle = fx.params_handle();
    handle.set(3, 0.4);
    assert_eq!(fx.get_parameter(3).unwrap(), 0.4);
}

#[test]
fn clones_detach_from_the_original() {
    let fx: Box<dyn Effect> = Box::new(FireAmp::new());
    fx.set_parameter(1, 0.8).unwrap();

    let copy = fx.clone();
    fx.set_parameter(1, 0.2).unwrap();

    assert_eq!(copy.get_parameter(1).unwrap(), 0.8);
    assert_eq!(fx.get_parameter(1).unwrap(), 0.2);
}

#[test]
fn preset_round_trip() {
    let fx = FireAmp::new();
    fx.set_parameter(0, 0.31).unwrap();
    fx.set_parameter(1, 0.62).unwrap();
    fx.set_parameter(2, 0.44).unwrap();
    fx.set_parameter(3, 0.9).unwrap();

    let bytes = preset::save(&fx).unwrap();

    let restored = FireAmp::new();
    preset::load(&restored, &bytes).unwrap();
    for index in 0..4 {
        assert_eq!(
            restored.get_parameter(index).unwrap(),
            fx.get_parameter(index).unwrap()
        );
    }
}

#[test]
fn presets_survive_the_registry() {
    for entry in registry() {
        let fx = (entry.create)();
        for index in 0..fx.parameter_count() {
            fx.set_parameter(index, 0.05 + (index as f32 * 0.09)).unwrap();
        }

        let bytes = preset::save(fx.as_ref()).unwrap();
        let restored = (entry.create)();
        preset::load(restored.as_ref(), &bytes).unwrap();

        for index in 0..fx.parameter_count() {
            assert_eq!(
                restored.get_parameter(index).unwrap(),
                fx.get_parameter(index).unwrap(),
                "{} parameter {} did not survive",
                entry.name,
                index
            );
        }
    }
}

#[test]
fn preset_rejects_bad_input() {
    let fx = Cabinet::new();
    let good = preset::save(&fx).unwrap();

    let mut bad = good.clone();
    bad[0] = b'X';
    assert_eq!(preset::load(&fx, &bad), Err(EffectError::MalformedPreset));

    let mut bad = good.clone();
    bad[4] = 9;
    assert_eq!(
        preset::load(&fx, &bad),
        Err(EffectError::UnsupportedPresetVersion(9))
    );

    let amp = FireAmp::new();
    assert_eq!(preset::load(&amp, &good), Err(EffectError::WrongEffect));

    assert_eq!(
        preset::load(&fx, &good[..good.len() - 1]),
        Err(EffectError::MalformedPreset)
    );

    let mut bad = good.clone();
    bad.push(0);
    assert_eq!(preset::load(&fx, &bad), Err(EffectError::MalformedPreset));

    assert_eq!(preset::load(&fx, &[]), Err(EffectError::MalformedPreset));
}

#[test]
fn preset_rejects_non_finite_values() {
    let fx = FireAmp::new();
    let bytes = preset_bytes("Fire Amp", &[("Tone", f32::NAN)]);
    assert_eq!(preset::load(&fx, &bytes), Err(EffectError::MalformedPreset));

    let bytes = preset_bytes("Fire Amp", &[("Tone", f32::INFINITY)]);
    assert_eq!(preset::load(&fx, &bytes), Err(EffectError::MalformedPreset));
}

#[test]
fn failed_loads_keep_current_values() {
    let fx = FireAmp::new();
    fx.set_parameter(1, 0.3).unwrap();

    // valid header, corrupt body
    let mut bytes = preset_bytes("Fire Amp", &[("Tone", 0.9)]);
    bytes.truncate(bytes.len() - 1);
    assert!(preset::load(&fx, &bytes).is_err());
    assert_eq!(fx.get_parameter(1).unwrap(), 0.3);
}

#[test]
fn partial_presets_apply_by_name() {
    let fx = FireAmp::new();

    let bytes = preset_bytes("Fire Amp", &[("Tone", 0.25)]);
    preset::load(&fx, &bytes).unwrap();
    assert_eq!(fx.get_parameter(1).unwrap(), 0.25);
    // everything unnamed keeps its value
    assert_eq!(fx.get_parameter(0).unwrap(), 0.5);
    assert_eq!(fx.get_parameter(3).unwrap(), 1.0);

    // names from another revision are skipped
    let bytes = preset_bytes("Fire Amp", &[("Bogus", 0.9)]);
    preset::load(&fx, &bytes).unwrap();
    assert_eq!(fx.get_parameter(1).unwrap(), 0.25);

    // stored values clamp like any other write
    let bytes = preset_bytes("Fire Amp", &[("Gain", 1.5)]);
    preset::load(&fx, &bytes).unwrap();
    assert_eq!(fx.get_parameter(0).unwrap(), 1.0);
}
