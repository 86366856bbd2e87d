//! Standard base64 decoding function.

use crate::{decode, Base64Error, Coding};

/// Decodes a standard, padded base64 string.
///
/// # Example
///
/// ```
/// use strict_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap().unwrap(), b"hello");
/// ```
pub fn from_base64(encoded: &str) -> Result<Option<Vec<u8>>, Base64Error> {
    decode(encoded, Coding::Standard)
}
