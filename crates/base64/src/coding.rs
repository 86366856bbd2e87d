//! Alphabet variants and symbol lookup.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::constants::{ALPHABET, ALPHABET_URL, PAD_POSITION};
use crate::validate;

/// Builds the symbol -> value table for an alphabet. Bytes that are not data
/// symbols (padding included) map to `-1`.
const fn create_reverse_table(alphabet: &[u8; 65]) -> [i8; 256] {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < PAD_POSITION {
        table[alphabet[i] as usize] = i as i8;
        i += 1;
    }
    table
}

static REVERSE: [i8; 256] = create_reverse_table(ALPHABET);
static REVERSE_URL: [i8; 256] = create_reverse_table(ALPHABET_URL);

/// The base64 alphabet used for encoding and decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coding {
    /// `A-Z a-z 0-9 + /`, padding mandatory on decode.
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`, padding optional on decode.
    UrlSafe,
}

impl Coding {
    /// The 65-entry symbol table: 64 data symbols followed by `=`.
    pub fn alphabet(self) -> &'static [u8; 65] {
        match self {
            Coding::Standard => ALPHABET,
            Coding::UrlSafe => ALPHABET_URL,
        }
    }

    fn reverse_table(self) -> &'static [i8; 256] {
        match self {
            Coding::Standard => &REVERSE,
            Coding::UrlSafe => &REVERSE_URL,
        }
    }

    /// Returns the symbol at `position` in the alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `position` is greater than 64.
    pub fn symbol_at(self, position: usize) -> u8 {
        assert!(
            position <= PAD_POSITION,
            "out-of-range access on an alphabet: {position}"
        );
        self.alphabet()[position]
    }

    /// Returns the 6-bit value of a data symbol, or `None` for padding and
    /// bytes outside the alphabet.
    pub fn value_for_symbol(self, symbol: u8) -> Option<u8> {
        let value = self.reverse_table()[symbol as usize];
        (value >= 0).then_some(value as u8)
    }

    /// Checks the whole input against this alphabet's grammar.
    ///
    /// URL-safe input may carry its padding or omit it; standard input must
    /// be padded. The empty string is valid.
    pub fn is_valid(self, input: &str) -> bool {
        self.is_valid_bin(input.as_bytes())
    }

    /// Byte-slice version of [`Coding::is_valid`].
    pub fn is_valid_bin(self, input: &[u8]) -> bool {
        input.is_empty() || !validate::contains_illegal_characters(self, input, self == Coding::UrlSafe)
    }

    /// Returns `true` if `input` does not match the grammar.
    ///
    /// With `ignore_padding`, a trailing `==` or `=` is stripped before
    /// matching and must then complete the final group to four symbols.
    pub fn contains_illegal_characters(self, input: &str, ignore_padding: bool) -> bool {
        validate::contains_illegal_characters(self, input.as_bytes(), ignore_padding)
    }
}

impl Index<usize> for Coding {
    type Output = u8;

    fn index(&self, position: usize) -> &u8 {
        assert!(
            position <= PAD_POSITION,
            "out-of-range access on an alphabet: {position}"
        );
        &self.alphabet()[position]
    }
}
