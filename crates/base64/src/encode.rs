//! Base64 encoding.

use crate::coding::Coding;
use crate::config::Padding;
use crate::constants::PAD;

/// Returns the number of symbols [`encode`] produces for `length` input bytes.
///
/// # Example
///
/// ```
/// use strict_base64::{encoded_len, Padding};
///
/// assert_eq!(encoded_len(5, Padding::On), 8);
/// assert_eq!(encoded_len(5, Padding::Off), 7);
/// ```
pub fn encoded_len(length: usize, padding: Padding) -> usize {
    let full = (length / 3) * 4;
    match (length % 3, padding) {
        (0, _) => full,
        (_, Padding::On) => full + 4,
        (extra, Padding::Off) => full + extra + 1,
    }
}

/// Encodes bytes into base64 symbols, returned as raw ASCII bytes.
///
/// Returns `None` for empty input.
pub fn encode_bin(input: &[u8], coding: Coding, padding: Padding) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }

    let alphabet = coding.alphabet();
    let length = input.len();
    let mut out = Vec::with_capacity(encoded_len(length, padding));

    let mut i = 0;
    while length - i > 2 {
        let b0 = input[i];
        let b1 = input[i + 1];
        let b2 = input[i + 2];

        out.push(alphabet[((b0 >> 2) & 0x3F) as usize]);
        out.push(alphabet[(((b0 & 0x3) << 4) | ((b1 & 0xF0) >> 4)) as usize]);
        out.push(alphabet[(((b1 & 0xF) << 2) | ((b2 & 0xC0) >> 6)) as usize]);
        out.push(alphabet[(b2 & 0x3F) as usize]);
        i += 3;
    }

    match length - i {
        1 => {
            let b0 = input[i];
            out.push(alphabet[((b0 >> 2) & 0x3F) as usize]);
            out.push(alphabet[((b0 & 0x3) << 4) as usize]);
            if padding == Padding::On {
                out.push(PAD);
                out.push(PAD);
            }
        }
        2 => {
            let b0 = input[i];
            let b1 = input[i + 1];
            out.push(alphabet[((b0 >> 2) & 0x3F) as usize]);
            out.push(alphabet[(((b0 & 0x3) << 4) | ((b1 & 0xF0) >> 4)) as usize]);
            out.push(alphabet[((b1 & 0xF) << 2) as usize]);
            if padding == Padding::On {
                out.push(PAD);
            }
        }
        _ => {}
    }

    (!out.is_empty()).then_some(out)
}

/// Encodes bytes to a base64 string.
///
/// Returns `None` for empty input rather than an empty string.
///
/// # Example
///
/// ```
/// use strict_base64::{encode, Coding, Padding};
///
/// let data = [0x14, 0xFB, 0x9C, 0x03, 0xD9, 0x7E];
/// assert_eq!(encode(&data, Coding::Standard, Padding::On).as_deref(), Some("FPucA9l+"));
/// assert_eq!(encode(&data, Coding::UrlSafe, Padding::Off).as_deref(), Some("FPucA9l-"));
/// assert_eq!(encode(b"", Coding::Standard, Padding::On), None);
/// ```
pub fn encode(input: &[u8], coding: Coding, padding: Padding) -> Option<String> {
    encode_bin(input, coding, padding).and_then(|bytes| String::from_utf8(bytes).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode_bin(b"", Coding::Standard, Padding::On), None);
        assert_eq!(encode(b"", Coding::UrlSafe, Padding::Off), None);
    }

    #[test]
    fn test_single_byte_tail() {
        assert_eq!(encode(b"f", Coding::Standard, Padding::On).unwrap(), "Zg==");
        assert_eq!(encode(b"f", Coding::Standard, Padding::Off).unwrap(), "Zg");
    }

    #[test]
    fn test_two_byte_tail() {
        assert_eq!(encode(b"fo", Coding::Standard, Padding::On).unwrap(), "Zm8=");
        assert_eq!(encode(b"fo", Coding::UrlSafe, Padding::Off).unwrap(), "Zm8");
    }

    #[test]
    fn test_no_tail() {
        assert_eq!(encode(b"foobar", Coding::Standard, Padding::On).unwrap(), "Zm9vYmFy");
        assert_eq!(encode(b"foobar", Coding::Standard, Padding::Off).unwrap(), "Zm9vYmFy");
    }

    #[test]
    fn test_encoded_len_matches_output() {
        let data: Vec<u8> = (0..=255).collect();
        for length in 1..data.len() {
            for padding in [Padding::On, Padding::Off] {
                let encoded = encode_bin(&data[..length], Coding::Standard, padding).unwrap();
                assert_eq!(encoded.len(), encoded_len(length, padding), "length {length}");
            }
        }
    }

    #[test]
    fn test_encoded_len_zero() {
        assert_eq!(encoded_len(0, Padding::On), 0);
        assert_eq!(encoded_len(0, Padding::Off), 0);
    }
}
