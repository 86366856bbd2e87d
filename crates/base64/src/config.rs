//! Codec options.

use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::Base64Error;

/// Whether encoding appends `=` to fill the final group to four symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Add padding characters when needed.
    #[default]
    On,
    /// Omit padding.
    Off,
}

/// An alphabet together with a padding mode.
///
/// Deserializes from partial input, missing fields take their defaults:
///
/// ```
/// use strict_base64::{Coding, Config, Padding};
///
/// let config: Config = serde_json::from_str(r#"{"coding": "url_safe"}"#).unwrap();
/// assert_eq!(config.coding, Coding::UrlSafe);
/// assert_eq!(config.padding, Padding::On);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub coding: Coding,
    pub padding: Padding,
}

impl Config {
    pub const fn new(coding: Coding, padding: Padding) -> Self {
        Self { coding, padding }
    }

    /// Standard alphabet, padded.
    pub const fn standard() -> Self {
        Self::new(Coding::Standard, Padding::On)
    }

    /// URL-safe alphabet, unpadded.
    pub const fn url_safe() -> Self {
        Self::new(Coding::UrlSafe, Padding::Off)
    }

    pub const fn with_coding(self, coding: Coding) -> Self {
        Self { coding, ..self }
    }

    pub const fn with_padding(self, padding: Padding) -> Self {
        Self { padding, ..self }
    }

    pub fn encode(&self, input: &[u8]) -> Option<String> {
        crate::encode(input, self.coding, self.padding)
    }

    /// Decodes with this configuration's alphabet. Padding mode does not
    /// affect decoding.
    pub fn decode(&self, input: &str) -> Result<Option<Vec<u8>>, Base64Error> {
        crate::decode(input, self.coding)
    }
}
