//! Preset persistence for effect parameter banks.
//!
//! Presets are stored name-keyed rather than positional, so a saved file
//! survives parameters being added or reordered in later revisions. The
//! layout is little-endian throughout:
//!
//! ```text
//! "AWFX"                      magic
//! u16                         format version
//! u8 len + bytes              effect name, UTF-8
//! u16                         parameter count
//! count * {
//!     u8 len + bytes          parameter name, UTF-8
//!     f32                     normalized value
//! }
//! ```
//!
//! Loading validates the whole image before touching the effect: a preset
//! either applies completely or not at all. Unknown parameter names are
//! skipped and parameters missing from the preset keep their current
//! values, which is what lets the format survive revisions.

use alloc::vec::Vec;

use crate::effect::{Effect, EffectError};

/// File magic opening every preset image.
pub const MAGIC: [u8; 4] = *b"AWFX";

/// Current format version.
pub const VERSION: u16 = 1;

/// Serializes the effect's current parameter values.
pub fn save(effect: &dyn Effect) -> Result<Vec<u8>, EffectError> {
    let count = effect.parameter_count();
    let mut bytes = Vec::with_capacity(16 + count * 20);
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    push_str(&mut bytes, effect.name());
    bytes.extend_from_slice(&(count as u16).to_le_bytes());
    for index in 0..count {
        push_str(&mut bytes, effect.parameter_name(index)?);
        bytes.extend_from_slice(&effect.get_parameter(index)?.to_le_bytes());
    }
    Ok(bytes)
}

/// Applies a preset image to the effect.
///
/// Fails closed: nothing is written to the parameter bank unless the whole
/// image parses, carries the current version and names this effect.
pub fn load(effect: &dyn Effect, bytes: &[u8]) -> Result<(), EffectError> {
    let mut reader = Reader { bytes };
    if reader.take(4)? != MAGIC {
        return Err(EffectError::MalformedPreset);
    }
    let version = reader.u16()?;
    if version != VERSION {
        return Err(EffectError::UnsupportedPresetVersion(version));
    }
    if reader.str()? != effect.name() {
        return Err(EffectError::WrongEffect);
    }
    let count = reader.u16()? as usize;
    let mut values: Vec<(&str, f32)> = Vec::with_capacity(count);
    for _ in 0..count {
        let name = reader.str()?;
        let value = reader.f32()?;
        if !value.is_finite() {
            return Err(EffectError::MalformedPreset);
        }
        values.push((name, value));
    }
    if !reader.bytes.is_empty() {
        return Err(EffectError::MalformedPreset);
    }

    for index in 0..effect.parameter_count() {
        let param = effect.parameter_name(index)?;
        if let Some((_, value)) = values.iter().find(|(name, _)| *name == param) {
            effect.set_parameter(index, *value)?;
        }
    }
    Ok(())
}

fn push_str(bytes: &mut Vec<u8>, text: &str) {
    bytes.push(text.len() as u8);
    bytes.extend_from_slice(text.as_bytes());
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], EffectError> {
        if self.bytes.len() < len {
            return Err(EffectError::MalformedPreset);
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    fn u16(&mut self) -> Result<u16, EffectError> {
        let raw = self.take(2)?;
        Ok(u16::from_le_bytes([raw[0], raw[1]]))
    }

    fn f32(&mut self) -> Result<f32, EffectError> {
        let raw = self.take(4)?;
        Ok(f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    fn str(&mut self) -> Result<&'a str, EffectError> {
        let len = self.take(1)?[0] as usize;
        core::str::from_utf8(self.take(len)?).map_err(|_| EffectError::MalformedPreset)
    }
}
