//! URL-safe base64 encoding function.

use crate::{encode, Coding, Padding};

/// Encodes a byte slice to a URL-safe base64 string without padding.
///
/// # Example
///
/// ```
/// use strict_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(b"hello world").unwrap(), "aGVsbG8gd29ybGQ");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> Option<String> {
    encode(uint8, Coding::UrlSafe, Padding::Off)
}
