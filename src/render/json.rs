use std::io::{self, Write};

use serde::Serialize;

use super::{WaveformRenderer, bit_string, hex_string};
use crate::input::Mode;
use crate::phy::{EncodedFrame, Scheme, Waveform};

#[derive(Serialize)]
struct FrameDocument<'a> {
    mode: Mode,
    hex: String,
    bytes: &'a [u8],
    bits: String,
    samples_per_bit: usize,
    waveforms: Vec<NamedWaveform<'a>>,
}

#[derive(Serialize)]
struct NamedWaveform<'a> {
    name: &'static str,
    scheme: Scheme,
    #[serde(flatten)]
    waveform: &'a Waveform,
}

/// Writes each frame as one JSON document
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W, pretty: bool) -> Self {
        Self { out, pretty }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WaveformRenderer for JsonRenderer<W> {
    fn render(&mut self, frame: &EncodedFrame) -> io::Result<()> {
        let document = FrameDocument {
            mode: frame.mode,
            hex: hex_string(&frame.bytes),
            bytes: &frame.bytes,
            bits: bit_string(&frame.bits),
            samples_per_bit: frame.samples_per_bit,
            waveforms: frame
                .waveforms
                .iter()
                .map(|(scheme, waveform)| NamedWaveform {
                    name: scheme.name(),
                    scheme: *scheme,
                    waveform,
                })
                .collect(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, &document)?;
        } else {
            serde_json::to_writer(&mut self.out, &document)?;
        }
        writeln!(self.out)
    }
}
