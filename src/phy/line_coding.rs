// Baseband line codes: bit sequence -> sampled waveform
//
// Every scheme maps one bit onto one slot of `samples_per_bit` samples.
// A slot is either held at a single level or split at floor(spb / 2)
// into two levels. All waveforms of a request share one time base.

use std::iter::repeat_n;
use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::debug;

use crate::utils::consts::DEFAULT_SAMPLES_PER_BIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scheme {
    NrzUnipolar,
    NrzBipolar,
    RzUnipolar,
    RzBipolar,
    Ami,
    Manchester,
    Mark,
    Space,
    Clock,
}

impl Scheme {
    /// Plotting order
    pub const ALL: [Scheme; 9] = [
        Scheme::NrzUnipolar,
        Scheme::NrzBipolar,
        Scheme::RzUnipolar,
        Scheme::RzBipolar,
        Scheme::Ami,
        Scheme::Manchester,
        Scheme::Mark,
        Scheme::Space,
        Scheme::Clock,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Scheme::NrzUnipolar => "NRZ - Unipolar",
            Scheme::NrzBipolar => "NRZ - Bipolar",
            Scheme::RzUnipolar => "RZ - Unipolar",
            Scheme::RzBipolar => "RZ - Bipolar",
            Scheme::Ami => "AMI",
            Scheme::Manchester => "Manchester",
            Scheme::Mark => "MARK",
            Scheme::Space => "SPACE",
            Scheme::Clock => "Clock",
        }
    }

    /// Map a bit sequence onto one symbol per bit slot.
    /// The AMI polarity is the fold accumulator; other schemes ignore it.
    pub fn symbols(self, bits: &[u8]) -> Vec<Symbol> {
        bits.iter()
            .scan(-1.0f32, |polarity, &bit| {
                let one = bit != 0;
                if self == Scheme::Ami && one {
                    *polarity = -*polarity;
                }
                Some(self.symbol(one, *polarity))
            })
            .collect()
    }

    fn symbol(self, one: bool, polarity: f32) -> Symbol {
        use Symbol::{Hold, Split};
        match (self, one) {
            (Scheme::NrzUnipolar, false) => Hold(0.0),
            (Scheme::NrzUnipolar, true) => Hold(1.0),
            (Scheme::NrzBipolar, false) => Hold(-1.0),
            (Scheme::NrzBipolar, true) => Hold(1.0),
            (Scheme::RzUnipolar, false) => Hold(0.0),
            (Scheme::RzUnipolar, true) => Split(1.0, 0.0),
            (Scheme::RzBipolar, false) => Hold(0.0),
            (Scheme::RzBipolar, true) => Split(1.0, 0.0),
            (Scheme::Ami, false) => Hold(0.0),
            (Scheme::Ami, true) => Hold(polarity),
            // 0 -> high then low, 1 -> low then high
            (Scheme::Manchester, false) => Split(1.0, -1.0),
            (Scheme::Manchester, true) => Split(-1.0, 1.0),
            (Scheme::Mark, false) => Hold(0.0),
            (Scheme::Mark, true) => Hold(1.0),
            (Scheme::Space, false) => Hold(1.0),
            (Scheme::Space, true) => Hold(0.0),
            (Scheme::Clock, _) => Split(1.0, 0.0),
        }
    }
}

/// Display name and scheme, in plotting order
pub const SCHEMES: [(&str, Scheme); 9] = {
    let mut registry = [("", Scheme::NrzUnipolar); 9];
    let mut i = 0;
    while i < Scheme::ALL.len() {
        registry[i] = (Scheme::ALL[i].name(), Scheme::ALL[i]);
        i += 1;
    }
    registry
};

/// Signal shape of one bit slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// Constant level for the whole slot
    Hold(f32),
    /// First floor(spb / 2) samples at `.0`, the rest at `.1`
    Split(f32, f32),
}

/// Sampled signal: `time[k] = k / samples_per_bit` in bit periods
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveform {
    pub time: Vec<f64>,
    pub level: Vec<f32>,
    #[serde(skip)]
    samples_per_bit: usize,
}

impl Waveform {
    pub fn len(&self) -> usize {
        self.level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_empty()
    }

    pub fn samples_per_bit(&self) -> usize {
        self.samples_per_bit
    }

    pub fn num_bits(&self) -> usize {
        self.level.len() / self.samples_per_bit
    }

    /// Samples of bit slot `index`, `None` past the last slot
    pub fn block(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.samples_per_bit)?;
        self.level
            .get(start..start.checked_add(self.samples_per_bit)?)
    }
}

/// Generates every line code at a fixed time resolution
#[derive(Debug, Clone, Copy)]
pub struct LineCoder {
    samples_per_bit: usize,
}

impl Default for LineCoder {
    fn default() -> Self {
        Self {
            samples_per_bit: DEFAULT_SAMPLES_PER_BIT,
        }
    }
}

impl LineCoder {
    pub fn new(samples_per_bit: NonZeroUsize) -> Self {
        Self {
            samples_per_bit: samples_per_bit.get(),
        }
    }

    pub fn samples_per_bit(&self) -> usize {
        self.samples_per_bit
    }

    pub fn samples_for_bits(&self, num_bits: usize) -> usize {
        num_bits * self.samples_per_bit
    }

    /// `num_bits * spb` evenly spaced points over [0, num_bits)
    pub fn time_axis(&self, num_bits: usize) -> Vec<f64> {
        let spb = self.samples_per_bit as f64;
        (0..self.samples_for_bits(num_bits))
            .map(|k| k as f64 / spb)
            .collect()
    }

    /// Expand symbols into samples on the shared time axis
    pub fn render(&self, symbols: &[Symbol]) -> Waveform {
        let spb = self.samples_per_bit;
        let first_half = spb / 2;

        let mut level = Vec::with_capacity(self.samples_for_bits(symbols.len()));
        for symbol in symbols {
            match *symbol {
                Symbol::Hold(value) => level.extend(repeat_n(value, spb)),
                Symbol::Split(first, second) => {
                    level.extend(repeat_n(first, first_half));
                    level.extend(repeat_n(second, spb - first_half));
                }
            }
        }

        Waveform {
            time: self.time_axis(symbols.len()),
            level,
            samples_per_bit: spb,
        }
    }

    pub fn nrz_unipolar(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::NrzUnipolar.symbols(bits))
    }

    pub fn nrz_bipolar(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::NrzBipolar.symbols(bits))
    }

    pub fn rz_unipolar(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::RzUnipolar.symbols(bits))
    }

    pub fn rz_bipolar(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::RzBipolar.symbols(bits))
    }

    pub fn ami(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::Ami.symbols(bits))
    }

    pub fn manchester(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::Manchester.symbols(bits))
    }

    pub fn mark(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::Mark.symbols(bits))
    }

    pub fn space(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::Space.symbols(bits))
    }

    /// Bit clock reference, independent of bit values
    pub fn clock(&self, bits: &[u8]) -> Waveform {
        self.render(&Scheme::Clock.symbols(bits))
    }

    pub fn encode(&self, scheme: Scheme, bits: &[u8]) -> Waveform {
        let waveform = match scheme {
            Scheme::NrzUnipolar => self.nrz_unipolar(bits),
            Scheme::NrzBipolar => self.nrz_bipolar(bits),
            Scheme::RzUnipolar => self.rz_unipolar(bits),
            Scheme::RzBipolar => self.rz_bipolar(bits),
            Scheme::Ami => self.ami(bits),
            Scheme::Manchester => self.manchester(bits),
            Scheme::Mark => self.mark(bits),
            Scheme::Space => self.space(bits),
            Scheme::Clock => self.clock(bits),
        };
        debug!(
            "Encoded {}: bits={}, samples={}",
            scheme.name(),
            bits.len(),
            waveform.len()
        );
        waveform
    }

    /// Every scheme, in `SCHEMES` order
    pub fn encode_all(&self, bits: &[u8]) -> Vec<(Scheme, Waveform)> {
        SCHEMES
            .iter()
            .map(|&(_, scheme)| (scheme, self.encode(scheme, bits)))
            .collect()
    }
}
