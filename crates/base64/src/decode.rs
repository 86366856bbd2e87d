//! Base64 decoding with up-front grammar validation.

use crate::coding::Coding;
use crate::validate::{contains_illegal_characters, trailing_padding};
use crate::Base64Error;

#[inline]
fn sextet(coding: Coding, symbols: &[u8], index: usize) -> Result<u8, Base64Error> {
    coding.value_for_symbol(symbols[index]).ok_or_else(|| {
        tracing::trace!(?coding, index, symbol = symbols[index], "untranslatable symbol");
        Base64Error::CodingError
    })
}

/// Decodes base64 symbols held in a byte slice.
///
/// Standard input must be padded. URL-safe input may be padded or not.
/// Returns `Ok(None)` for empty input.
///
/// # Errors
///
/// [`Base64Error::IllegalCharacters`] if the input does not match the
/// alphabet's grammar.
pub fn decode_bin(input: &[u8], coding: Coding) -> Result<Option<Vec<u8>>, Base64Error> {
    if input.is_empty() {
        return Ok(None);
    }

    if contains_illegal_characters(coding, input, coding == Coding::UrlSafe) {
        tracing::debug!(?coding, length = input.len(), "rejected malformed base64 input");
        return Err(Base64Error::IllegalCharacters);
    }

    let symbols = &input[..input.len() - trailing_padding(input)];
    let mut unread = symbols.len();
    let mut base = 0;
    let mut out = Vec::with_capacity(unread / 4 * 3 + 2);

    while unread > 4 {
        let v0 = sextet(coding, symbols, base)?;
        let v1 = sextet(coding, symbols, base + 1)?;
        let v2 = sextet(coding, symbols, base + 2)?;
        let v3 = sextet(coding, symbols, base + 3)?;

        out.push((v0 << 2) | (v1 >> 4));
        out.push((v1 << 4) | (v2 >> 2));
        out.push((v2 << 6) | v3);

        base += 4;
        unread -= 4;
    }

    if unread > 1 {
        let v0 = sextet(coding, symbols, base)?;
        let v1 = sextet(coding, symbols, base + 1)?;
        out.push((v0 << 2) | (v1 >> 4));
    }
    if unread > 2 {
        let v1 = sextet(coding, symbols, base + 1)?;
        let v2 = sextet(coding, symbols, base + 2)?;
        out.push((v1 << 4) | (v2 >> 2));
    }
    if unread > 3 {
        let v2 = sextet(coding, symbols, base + 2)?;
        let v3 = sextet(coding, symbols, base + 3)?;
        out.push((v2 << 6) | v3);
    }

    Ok((!out.is_empty()).then_some(out))
}

/// Decodes a base64 string.
///
/// # Example
///
/// ```
/// use strict_base64::{decode, Base64Error, Coding};
///
/// assert_eq!(decode("Zm9vYmFy", Coding::Standard).unwrap().unwrap(), b"foobar");
/// assert_eq!(decode("Zm9vYg", Coding::UrlSafe).unwrap().unwrap(), b"foob");
/// assert_eq!(decode("Zm9vYg", Coding::Standard), Err(Base64Error::IllegalCharacters));
/// assert_eq!(decode("", Coding::Standard), Ok(None));
/// ```
pub fn decode(input: &str, coding: Coding) -> Result<Option<Vec<u8>>, Base64Error> {
    decode_bin(input.as_bytes(), coding)
}
