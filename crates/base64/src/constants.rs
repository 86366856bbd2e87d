/// Standard base64 alphabet (RFC 4648 §4) followed by the padding symbol.
pub const ALPHABET: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// URL-safe base64 alphabet (RFC 4648 §5), `-` and `_` instead of `+` and `/`.
pub const ALPHABET_URL: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_=";

/// Padding character.
pub const PAD: u8 = b'=';

/// Position of the padding symbol in both alphabets.
pub const PAD_POSITION: usize = 64;
