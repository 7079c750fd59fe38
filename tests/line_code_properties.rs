use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use linecode_rs::input::{Mode, ParseError, parse};
use linecode_rs::phy::{LineCoder, SCHEMES, Scheme, SignalEncoder, bytes_to_bits};

fn bits_to_u128(bits: &[u8]) -> u128 {
    bits.iter()
        .fold(0u128, |acc, &bit| (acc << 1) | u128::from(bit))
}

#[test]
fn integer_bits_reproduce_value() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut values: Vec<u128> = vec![0, 1, 255, 256, 65535, 65536, u64::MAX as u128];
    values.extend((0..200).map(|_| rng.random::<u128>() >> rng.random_range(0..128)));

    for n in values {
        let bytes = parse(&n.to_string(), Mode::Integer).unwrap();
        let bits = bytes_to_bits(&bytes);
        assert_eq!(bits.len() % 8, 0);
        assert_eq!(bits_to_u128(&bits), n, "value {}", n);
        // minimal encoding: no leading zero byte except for zero itself
        if n != 0 {
            assert_ne!(bytes[0], 0, "value {}", n);
        }
    }
}

#[test]
fn hex_prefixed_integer_matches_hex_bytes() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let n: u64 = rng.random_range(1..u64::MAX);
        let literal = format!("{:#x}", n);
        let digits = format!("{:x}", n);
        assert_eq!(
            parse(&literal, Mode::Integer).unwrap(),
            parse(&digits, Mode::HexBytes).unwrap()
        );
    }
}

#[test]
fn zero_is_one_byte() {
    assert_eq!(parse("0", Mode::Integer), Ok(vec![0]));
}

#[test]
fn bit_count_is_eight_per_byte() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in 0..40 {
        let bytes: Vec<u8> = (0..len)
            .map(|_| rng.random())
            .collect();
        assert_eq!(bytes_to_bits(&bytes).len(), 8 * bytes.len());
    }
}

#[test]
fn waveform_lengths_match_bits() {
    let mut rng = StdRng::seed_from_u64(99);
    for spb in [1usize, 2, 7, 100] {
        let coder = LineCoder::new(NonZeroUsize::new(spb).unwrap());
        let bits: Vec<u8> = (0..rng.random_range(0..50))
            .map(|_| rng.random_range(0..2))
            .collect();
        for (_, scheme) in SCHEMES {
            let waveform = coder.encode(scheme, &bits);
            assert_eq!(waveform.level.len(), bits.len() * spb);
            assert_eq!(waveform.time.len(), waveform.level.len());
            assert!(
                waveform
                    .time
                    .windows(2)
                    .all(|w| w[0] < w[1])
            );
        }
    }
}

#[test]
fn empty_bits_give_empty_waveforms() {
    let coder = LineCoder::default();
    for (_, scheme) in SCHEMES {
        let waveform = coder.encode(scheme, &[]);
        assert!(waveform.level.is_empty());
        assert!(waveform.time.is_empty());
    }
}

#[test]
fn ami_reference_pattern() {
    let coder = LineCoder::default();
    let waveform = coder.encode(Scheme::Ami, &[1, 0, 1, 1]);
    for (slot, expected) in [1.0f32, 0.0, -1.0, 1.0]
        .into_iter()
        .enumerate()
    {
        assert!(
            waveform
                .block(slot)
                .unwrap()
                .iter()
                .all(|&v| v == expected),
            "slot {}",
            slot
        );
    }
}

#[test]
fn ami_marks_always_alternate() {
    let mut rng = StdRng::seed_from_u64(3);
    let coder = LineCoder::new(NonZeroUsize::new(4).unwrap());
    let bits: Vec<u8> = (0..256)
        .map(|_| rng.random_range(0..2))
        .collect();
    let waveform = coder.encode(Scheme::Ami, &bits);

    let marks: Vec<f32> = (0..bits.len())
        .filter(|&i| bits[i] == 1)
        .map(|i| waveform.block(i).unwrap()[0])
        .collect();
    for (i, level) in marks
        .iter()
        .enumerate()
    {
        let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(*level, expected);
    }
}

#[test]
fn reference_parse_cases() {
    assert_eq!(parse("1a2b3c", Mode::HexBytes), Ok(vec![0x1a, 0x2b, 0x3c]));
    assert_eq!(parse("a", Mode::HexBytes), Ok(vec![0x0a]));
    assert_eq!(parse("101", Mode::Binary), Ok(vec![0b0000_0101]));

    assert_eq!(
        parse("", Mode::Integer),
        Err(ParseError::InvalidInput { mode: Mode::Integer })
    );
    assert_eq!(
        parse("zz", Mode::HexBytes),
        Err(ParseError::InvalidInput { mode: Mode::HexBytes })
    );
    assert_eq!(
        parse("", Mode::Binary),
        Err(ParseError::InvalidInput { mode: Mode::Binary })
    );
    assert_eq!(
        parse("-5", Mode::Integer),
        Err(ParseError::InvalidInput { mode: Mode::Integer })
    );
}

#[test]
fn default_sample_of_every_mode_encodes() {
    let encoder = SignalEncoder::new(LineCoder::default());
    for mode in Mode::ALL {
        let frame = encoder
            .encode_text(mode.sample_input(), mode)
            .unwrap();
        assert!(!frame.bytes.is_empty());
        assert_eq!(frame.waveforms.len(), SCHEMES.len());
    }
}
