// Integer literals with auto-detected base, read into big-endian bytes.
// Values are unbounded: digits are folded into a `BigUint`.

use num_bigint::BigUint;

/// Split an optional `0x` / `0o` / `0b` prefix (case-insensitive).
/// Returns (radix, remaining digits, whether a prefix was present).
fn split_prefix(body: &str) -> (u32, &str, bool) {
    let bytes = body.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return (radix, &body[2..], true);
        }
    }
    (10, body, false)
}

/// Read an integer literal into its minimal big-endian unsigned bytes.
///
/// Accepts an optional sign, an optional base prefix and digits of that
/// base with single underscores between them. A decimal literal may not
/// carry leading zeros unless it is zero. Returns `None` for anything that
/// is not a literal, or for a negative value; zero becomes `[0]`.
pub fn literal_to_bytes(text: &str) -> Option<Vec<u8>> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits, prefixed) = split_prefix(body);

    let mut magnitude = BigUint::default();
    let mut seen_digit = false;
    let mut leading_zero = false;
    // "0x_ff" is allowed, "_12" is not
    let mut underscore_ok = prefixed;
    let mut trailing_underscore = false;

    for ch in digits.chars() {
        if ch == '_' {
            if !underscore_ok {
                return None;
            }
            underscore_ok = false;
            trailing_underscore = true;
            continue;
        }
        let digit = ch.to_digit(radix)?;
        if !seen_digit {
            leading_zero = digit == 0;
            seen_digit = true;
        }
        underscore_ok = true;
        trailing_underscore = false;
        magnitude = magnitude * radix + digit;
    }

    if !seen_digit || trailing_underscore {
        return None;
    }
    let is_zero = magnitude.bits() == 0;
    if radix == 10 && leading_zero && !is_zero {
        return None;
    }
    if negative && !is_zero {
        return None;
    }
    // zero exports as a single 0x00 byte
    Some(magnitude.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(literal_to_bytes("0"), Some(vec![0x00]));
        assert_eq!(literal_to_bytes("255"), Some(vec![0xFF]));
        assert_eq!(literal_to_bytes("256"), Some(vec![0x01, 0x00]));
        assert_eq!(literal_to_bytes("305419896"), Some(vec![0x12, 0x34, 0x56, 0x78]));
        assert_eq!(literal_to_bytes("+7"), Some(vec![0x07]));
    }

    #[test]
    fn test_prefixed_bases() {
        assert_eq!(literal_to_bytes("0x1A2b"), Some(vec![0x1A, 0x2B]));
        assert_eq!(literal_to_bytes("0XfF"), Some(vec![0xFF]));
        assert_eq!(literal_to_bytes("0o777"), Some(vec![0x01, 0xFF]));
        assert_eq!(literal_to_bytes("0b101"), Some(vec![0x05]));
        assert_eq!(literal_to_bytes("0x0000"), Some(vec![0x00]));
    }

    #[test]
    fn test_wider_than_u128() {
        // 2^128
        let bytes = literal_to_bytes("340282366920938463463374607431768211456").unwrap();
        let mut expected = vec![0x01];
        expected.extend(vec![0x00; 16]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_underscores() {
        assert_eq!(literal_to_bytes("1_000"), Some(vec![0x03, 0xE8]));
        assert_eq!(literal_to_bytes("0x_ff"), Some(vec![0xFF]));
        assert_eq!(literal_to_bytes("_1"), None);
        assert_eq!(literal_to_bytes("1_"), None);
        assert_eq!(literal_to_bytes("1__0"), None);
        assert_eq!(literal_to_bytes("0x__1"), None);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(literal_to_bytes("000"), Some(vec![0x00]));
        assert_eq!(literal_to_bytes("0_0"), Some(vec![0x00]));
        assert_eq!(literal_to_bytes("012"), None);
        // leading zeros are fine after a prefix
        assert_eq!(literal_to_bytes("0x00ff"), Some(vec![0xFF]));
    }

    #[test]
    fn test_rejects() {
        assert_eq!(literal_to_bytes(""), None);
        assert_eq!(literal_to_bytes("-"), None);
        assert_eq!(literal_to_bytes("0x"), None);
        assert_eq!(literal_to_bytes("12a"), None);
        assert_eq!(literal_to_bytes("0b102"), None);
        assert_eq!(literal_to_bytes("-5"), None);
        assert_eq!(literal_to_bytes("1 2"), None);
    }

    #[test]
    fn test_minimal_bytes() {
        for text in ["1", "0x100", "0b1_0000_0000", "0o400", "65535", "0x00001"] {
            let bytes = literal_to_bytes(text).unwrap();
            assert_ne!(bytes[0], 0, "leading zero byte for {}", text);
        }
        assert_eq!(literal_to_bytes("0x0_0"), Some(vec![0x00]));
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(literal_to_bytes("-0"), Some(vec![0x00]));
    }
}
