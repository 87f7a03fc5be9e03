//! Parameter storage shared between a controller thread and the audio thread.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, Ordering};

/// Lock-free bank of normalized parameter values.
///
/// Each slot holds an `f32` bit pattern in an `AtomicU32`, so a controller
/// thread can write knob values while the audio thread reads them without
/// locks or torn values. The audio thread snapshots the whole bank once at
/// block start; writes take effect at the next block.
#[derive(Debug)]
pub struct ParamBank {
    values: Box<[AtomicU32]>,
}

impl ParamBank {
    pub fn new(defaults: &[f32]) -> Self {
        let values: Vec<AtomicU32> = defaults
            .iter()
            .map(|value| AtomicU32::new(value.to_bits()))
            .collect();
        Self {
            values: values.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stores a value clamped into `0.0..=1.0`.
    pub fn set(&self, index: usize, value: f32) {
        self.values[index].store(value.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self, index: usize) -> f32 {
        f32::from_bits(self.values[index].load(Ordering::Relaxed))
    }

    /// Reads every value, widened for control-rate math.
    pub fn snapshot<const N: usize>(&self) -> [f64; N] {
        let mut out = [0.0; N];
        for (slot, value) in out.iter_mut().zip(self.values.iter()) {
            *slot = f32::from_bits(value.load(Ordering::Relaxed)) as f64;
        }
        out
    }
}

/// Handle an effect keeps to its parameter bank.
///
/// Cloning forks the bank with its current values, so a cloned effect is
/// fully independent and detached from handles given out by the original.
#[derive(Debug)]
pub struct Params {
    bank: Arc<ParamBank>,
}

impl Params {
    pub fn new(defaults: &[f32]) -> Self {
        Self {
            bank: Arc::new(ParamBank::new(defaults)),
        }
    }

    /// Shared handle for a controller thread.
    pub fn handle(&self) -> Arc<ParamBank> {
        Arc::clone(&self.bank)
    }

    pub fn bank(&self) -> &ParamBank {
        &self.bank
    }

    /// See [`ParamBank::snapshot`].
    pub fn snapshot<const N: usize>(&self) -> [f64; N] {
        self.bank.snapshot()
    }
}

impl Clone for Params {
    fn clone(&self) -> Self {
        let values: Vec<f32> = (0..self.bank.len()).map(|i| self.bank.get(i)).collect();
        Self {
            bank: Arc::new(ParamBank::new(&values)),
        }
    }
}
