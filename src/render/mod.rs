//! Presentation of encoded frames.
//!
//! The line-code core only produces sample arrays; a [`WaveformRenderer`]
//! is handed a finished [`EncodedFrame`] and decides how to show it.

pub mod json;
pub mod plot;

use std::io;

use crate::phy::EncodedFrame;

pub use json::JsonRenderer;
pub use plot::PlotRenderer;

pub trait WaveformRenderer {
    fn render(&mut self, frame: &EncodedFrame) -> io::Result<()>;
}

/// Lowercase hex, two digits per byte
pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

pub fn bit_string(bits: &[u8]) -> String {
    bits.iter()
        .map(|&bit| if bit == 0 { '0' } else { '1' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(&[0x00, 0x1A, 0xFF]), "001aff");
        assert_eq!(hex_string(&[]), "");
    }

    #[test]
    fn test_bit_string() {
        assert_eq!(bit_string(&[1, 0, 1, 1]), "1011");
    }
}
