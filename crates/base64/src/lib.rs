//! Base64 encoding and decoding per RFC 4648.
//!
//! This crate provides:
//! - Standard (`+` `/`) and URL-safe (`-` `_`) alphabets
//! - Optional padding on encode
//! - Strict grammar validation before any decoding takes place
//!
//! Empty input encodes and decodes to `None`, keeping "no data" apart from
//! both a successful result and an error.
//!
//! # Example
//!
//! ```
//! use strict_base64::{decode, encode, Coding, Padding};
//!
//! let data = b"hello world";
//! let encoded = encode(data, Coding::UrlSafe, Padding::Off).unwrap();
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ");
//! let decoded = decode(&encoded, Coding::UrlSafe).unwrap().unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod coding;
mod config;
mod constants;
mod decode;
mod encode;
mod from_base64;
mod from_base64_url;
mod to_base64;
mod to_base64_url;
mod validate;

use thiserror::Error;

pub use coding::Coding;
pub use config::{Config, Padding};
pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use decode::{decode, decode_bin};
pub use encode::{encode, encode_bin, encoded_len};
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use to_base64::to_base64;
pub use to_base64_url::to_base64_url;

/// Error type for base64 decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The input does not match the alphabet's grammar.
    #[error("CONTAINS_ILLEGAL_CHARACTERS")]
    IllegalCharacters,
    /// A symbol that passed validation could not be translated.
    #[error("CODING_ERROR")]
    CodingError,
}
