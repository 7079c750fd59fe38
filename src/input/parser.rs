use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::literal::literal_to_bytes;

/// How the input text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    /// Integer literal, base taken from a `0x` / `0o` / `0b` prefix
    Integer,
    /// Hex digits, everything else is ignored
    HexBytes,
    /// `0` / `1` digits, everything else is ignored
    Binary,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Integer, Mode::HexBytes, Mode::Binary];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Integer => "Integer",
            Mode::HexBytes => "Hex Bytes",
            Mode::Binary => "Binary",
        }
    }

    /// Placeholder value shown when switching to this mode
    pub fn sample_input(self) -> &'static str {
        match self {
            Mode::Integer => "305419896",
            Mode::HexBytes => "1a2b3c",
            Mode::Binary => "01010110",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid input for mode {mode}")]
    InvalidInput { mode: Mode },
}

/// Parse `text` under `mode` into a byte sequence.
///
/// Surrounding whitespace is ignored. On success the result is never empty.
pub fn parse(text: &str, mode: Mode) -> Result<Vec<u8>, ParseError> {
    let text = text.trim();
    let bytes = match mode {
        Mode::Integer => literal_to_bytes(text),
        Mode::HexBytes => hex_to_bytes(text),
        Mode::Binary => binary_to_bytes(text),
    }
    .ok_or(ParseError::InvalidInput { mode })?;

    debug!("Parsed {:?} input into {} bytes", mode, bytes.len());
    Ok(bytes)
}

/// Keep only hex digits, left-pad an odd count with one `0`, pair up.
fn hex_to_bytes(text: &str) -> Option<Vec<u8>> {
    let mut nibbles: Vec<u8> = text
        .chars()
        .filter_map(|ch| ch.to_digit(16))
        .map(|d| d as u8)
        .collect();
    if nibbles.is_empty() {
        return None;
    }
    if nibbles.len() % 2 != 0 {
        nibbles.insert(0, 0);
    }

    Some(
        nibbles
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect(),
    )
}

/// Keep only `0`/`1`, left-pad to a multiple of 8, read MSB-first octets.
fn binary_to_bytes(text: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = text
        .chars()
        .filter_map(|ch| match ch {
            '0' => Some(0),
            '1' => Some(1),
            _ => None,
        })
        .collect();
    if digits.is_empty() {
        return None;
    }

    let padded_len = digits.len().div_ceil(8) * 8;
    let mut bits = vec![0u8; padded_len - digits.len()];
    bits.extend(digits);

    Some(
        bits.chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u8, |byte, &bit| (byte << 1) | bit)
            })
            .collect(),
    )
}
