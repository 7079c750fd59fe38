use super::bits::bytes_to_bits;
use super::line_coding::{LineCoder, Scheme, Waveform};
use crate::input::{Mode, ParseError, parse};
use tracing::{debug, info};

/// Everything derived from one encode request
#[derive(Debug, Clone)]
pub struct EncodedFrame {
    pub mode: Mode,
    pub bytes: Vec<u8>,
    pub bits: Vec<u8>,
    pub samples_per_bit: usize,
    /// One waveform per scheme, in `SCHEMES` order
    pub waveforms: Vec<(Scheme, Waveform)>,
}

/// Runs the parse -> bits -> line codes pipeline
pub struct SignalEncoder {
    coder: LineCoder,
}

impl SignalEncoder {
    pub fn new(coder: LineCoder) -> Self {
        info!("SignalEncoder initialized:");
        info!("  - samples_per_bit: {}", coder.samples_per_bit());
        Self { coder }
    }

    /// Parse `text` under `mode` and encode it with every scheme
    pub fn encode_text(&self, text: &str, mode: Mode) -> Result<EncodedFrame, ParseError> {
        let bytes = parse(text, mode)?;
        Ok(self.encode_bytes(mode, bytes))
    }

    pub fn encode_bytes(&self, mode: Mode, bytes: Vec<u8>) -> EncodedFrame {
        let bits = bytes_to_bits(&bytes);
        let waveforms = self.coder.encode_all(&bits);

        debug!(
            "Encoding request: bytes={}, bits={}, schemes={}",
            bytes.len(),
            bits.len(),
            waveforms.len()
        );

        EncodedFrame {
            mode,
            bytes,
            bits,
            samples_per_bit: self.coder.samples_per_bit(),
            waveforms,
        }
    }
}
