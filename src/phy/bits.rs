// Bit extraction: bytes -> bits, most significant bit first

/// Convert byte to bit array (MSB first)
pub fn byte_to_bits(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (i, bit) in bits
        .iter_mut()
        .enumerate()
    {
        *bit = (byte >> (7 - i)) & 1;
    }
    bits
}

/// Convert bytes to bit vector.
/// Bit `i` of byte `j` lands at position `8 * j + i`.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.extend_from_slice(&byte_to_bits(byte));
    }
    bits
}
