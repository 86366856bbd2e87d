//! Tests for codec configuration.

use serde_json::json;
use strict_base64::{Coding, Config, Padding};

#[test]
fn defaults() {
    assert_eq!(Coding::default(), Coding::Standard);
    assert_eq!(Padding::default(), Padding::On);
    assert_eq!(Config::default(), Config::new(Coding::Standard, Padding::On));
}

#[test]
fn serializes_snake_case() {
    let value = serde_json::to_value(Config::url_safe()).unwrap();
    assert_eq!(value, json!({ "coding": "url_safe", "padding": "off" }));
}

#[test]
fn deserializes_partial() {
    let config: Config = serde_json::from_value(json!({ "padding": "off" })).unwrap();
    assert_eq!(config, Config::new(Coding::Standard, Padding::Off));

    let config: Config = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn rejects_unknown_coding() {
    let result = serde_json::from_value::<Config>(json!({ "coding": "base32" }));
    assert!(result.is_err());
}

#[test]
fn encode_and_decode_through_config() {
    let data = [0x14, 0xFB, 0x9C, 0x03, 0xD9];
    let config = Config::standard();
    let encoded = config.encode(&data).unwrap();
    assert_eq!(encoded, "FPucA9k=");
    assert_eq!(config.decode(&encoded).unwrap().unwrap(), data);

    let config = config.with_coding(Coding::UrlSafe).with_padding(Padding::Off);
    let encoded = config.encode(&data).unwrap();
    assert_eq!(encoded, "FPucA9k");
    assert_eq!(config.decode(&encoded).unwrap().unwrap(), data);
}
