//! Tests for standard base64 encoding.

use strict_base64::{encode, to_base64, Coding, Padding};

const RFC_DATA: [u8; 6] = [0x14, 0xFB, 0x9C, 0x03, 0xD9, 0x7E];

#[test]
fn rfc_vectors() {
    assert_eq!(encode(&RFC_DATA, Coding::Standard, Padding::On).unwrap(), "FPucA9l+");
    assert_eq!(encode(&RFC_DATA[..5], Coding::Standard, Padding::On).unwrap(), "FPucA9k=");
    assert_eq!(encode(&RFC_DATA[..4], Coding::Standard, Padding::On).unwrap(), "FPucAw==");
}

#[test]
fn rfc_vectors_unpadded() {
    assert_eq!(encode(&RFC_DATA[..5], Coding::Standard, Padding::Off).unwrap(), "FPucA9k");
    assert_eq!(encode(&RFC_DATA[..4], Coding::Standard, Padding::Off).unwrap(), "FPucAw");
}

#[test]
fn text_vectors() {
    let cases = [
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_base64(input.as_bytes()).unwrap(), expected);
    }
}

#[test]
fn uses_standard_symbols() {
    assert_eq!(to_base64(&[0xFB, 0xFF]).unwrap(), "+/8=");
}

#[test]
fn output_is_aligned_when_padded() {
    let data: Vec<u8> = (0..=255).collect();
    for length in 1..data.len() {
        let encoded = to_base64(&data[..length]).unwrap();
        assert_eq!(encoded.len() % 4, 0, "length {length}");
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base64(b""), None);
    assert_eq!(encode(&[], Coding::Standard, Padding::Off), None);
}
