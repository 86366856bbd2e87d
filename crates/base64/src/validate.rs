//! RFC 4648 grammar checks for encoded input.

use std::sync::OnceLock;

use regex::bytes::Regex;

use crate::coding::Coding;
use crate::constants::PAD;

fn standard_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$",
        )
        .unwrap()
    })
}

fn url_safe_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:[A-Za-z0-9_-]{4})*(?:[A-Za-z0-9_-]{2}|[A-Za-z0-9_-]{3}|[A-Za-z0-9_-]{4})$",
        )
        .unwrap()
    })
}

/// Number of trailing padding characters, at most two.
pub(crate) fn trailing_padding(input: &[u8]) -> usize {
    input.iter().rev().take(2).take_while(|&&b| b == PAD).count()
}

pub(crate) fn contains_illegal_characters(
    coding: Coding,
    input: &[u8],
    ignore_padding: bool,
) -> bool {
    let regex = match coding {
        Coding::Standard => standard_regex(),
        Coding::UrlSafe => url_safe_regex(),
    };

    if !ignore_padding {
        return !regex.is_match(input);
    }

    let padding = trailing_padding(input);
    let body = &input[..input.len() - padding];
    if padding > 0 && (body.len() + padding) % 4 != 0 {
        return true;
    }
    !regex.is_match(body)
}
