// Physical layer: bit extraction and baseband line coding

pub mod bits;
pub mod encoder;
pub mod line_coding;

pub use bits::{byte_to_bits, bytes_to_bits};
pub use encoder::{EncodedFrame, SignalEncoder};
pub use line_coding::{LineCoder, SCHEMES, Scheme, Symbol, Waveform};
