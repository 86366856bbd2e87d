//! Standard base64 encoding function.

use crate::{encode, Coding, Padding};

/// Encodes a byte slice to a standard, padded base64 string.
///
/// Returns `None` for empty input.
///
/// # Example
///
/// ```
/// use strict_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world").unwrap(), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> Option<String> {
    encode(uint8, Coding::Standard, Padding::On)
}
