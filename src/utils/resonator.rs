//! Head bump resonators: one-pole integrators with cubic self-limiting.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

/// Two alternating bump poles driven on alternating samples.
///
/// The caller selects the pole with its global flip flag so consecutive
/// chorus samples excite different states. The cubic term limits the
/// resonance; the dc block term pushes the state back toward zero.
#[derive(Debug, Clone, Default)]
pub struct BumpPair {
    a: f64,
    b: f64,
}

impl BumpPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one pole and returns its new state.
    ///
    /// Does not guard against runaway; the caller checks the returned
    /// magnitude and resets all cooperating pairs if it exceeds its bound.
    #[inline]
    pub fn drive(&mut self, sample: f64, freq: f64, dc_block: f64, primary: bool) -> f64 {
        let state = if primary { &mut self.a } else { &mut self.b };
        *state += sample * freq;
        *state -= *state * *state * *state * freq;
        if *state > 0.0 {
            *state -= dc_block;
        }
        if *state < 0.0 {
            *state += dc_block;
        }
        *state
    }

    pub fn reset(&mut self) {
        self.a = 0.0;
        self.b = 0.0;
    }
}

/// Three bump poles excited round-robin and cross-blended with noise.
///
/// Each sample drives one pole and leaks a random fraction of the other
/// two into it, decorrelating the resonance. The settle term chokes the
/// state toward zero when the input gate detects silence.
#[derive(Debug, Clone, Default)]
pub struct BumpTrio {
    states: [f64; 3],
}

impl BumpTrio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives pole `slot` (1 to 3); slot 0 is skipped and returns zero.
    ///
    /// `randy` is the halved noise fraction; the driven pole keeps
    /// `1.0 - 2.0 * randy` of itself plus `randy` of each neighbor. The
    /// blend always sums the poles in storage order.
    #[inline]
    pub fn drive(
        &mut self,
        slot: usize,
        sample: f64,
        gain: f64,
        freq: f64,
        randy: f64,
        settle: f64,
    ) -> f64 {
        if slot < 1 || slot > 3 {
            return 0.0;
        }
        let i = slot - 1;
        {
            let state = &mut self.states[i];
            *state += sample * gain;
            *state -= *state * *state * *state * freq;
        }
        let invrandy = 1.0 - (randy * 2.0);
        let mut blended = 0.0;
        for (k, value) in self.states.iter().enumerate() {
            blended += if k == i { invrandy * value } else { randy * value };
        }
        let state = &mut self.states[i];
        *state = blended;
        if *state > 0.0 {
            *state -= settle;
        }
        if *state < 0.0 {
            *state += settle;
        }
        *state
    }

    pub fn reset(&mut self) {
        self.states = [0.0; 3];
    }
}
