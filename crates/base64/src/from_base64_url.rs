//! URL-safe base64 decoding function.

use crate::{decode, Base64Error, Coding};

/// Decodes a URL-safe base64 string, padded or not.
///
/// # Example
///
/// ```
/// use strict_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8").unwrap().unwrap(), b"hello");
/// assert_eq!(from_base64_url("aGVsbG8=").unwrap().unwrap(), b"hello");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Option<Vec<u8>>, Base64Error> {
    decode(encoded, Coding::UrlSafe)
}
