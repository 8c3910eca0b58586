//! From cleaned spellings to values

use once_cell::sync::Lazy;
use regex::Regex;

use super::sign::is_splittable;
use super::value::Value;
use crate::transliteration::atf::{self, UNCLEAR_SIGN, UNIDENTIFIED_SIGN, VARIANT_SEPARATOR};

static WITH_SIGN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^(/|]+\((.+)\)$").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static GRAPHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|([.x×%&+@]?(\d+[.x×%&+@])?\(?[A-ZṢŠṬ₀-₉ₓ]+([@~][a-z0-9]+)*\)?)+\|$").unwrap()
});
static READING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^₀-₉ₓ/]+)([₀-₉]+)?$").unwrap());
static VARIANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^/]+(/[^/]+)+$").unwrap());

fn grapheme(name: &str, is_in_variant: bool) -> Value {
    if !is_in_variant && is_splittable(name) {
        Value::splittable_grapheme(name)
    } else {
        Value::grapheme(name)
    }
}

fn parse_value(cleaned: &str, is_in_variant: bool) -> Value {
    if cleaned.is_empty() {
        Value::empty()
    } else if cleaned == UNCLEAR_SIGN || cleaned == UNIDENTIFIED_SIGN {
        Value::unidentified()
    } else if let Some(captures) = WITH_SIGN.captures(cleaned) {
        let sign = &captures[1];
        if is_splittable(sign) {
            Value::splittable_grapheme(sign)
        } else {
            Value::grapheme(sign)
        }
    } else if NUMBER.is_match(cleaned) {
        Value::number(cleaned)
    } else if GRAPHEME.is_match(cleaned) {
        grapheme(cleaned, is_in_variant)
    } else if let Some(captures) = READING.captures(cleaned) {
        let sub_index = captures
            .get(2)
            .and_then(|sub_index| atf::parse_sub_index(sub_index.as_str()).flatten())
            .unwrap_or(1);
        Value::reading(&captures[1], sub_index)
    } else if VARIANT.is_match(cleaned) {
        let parts = cleaned
            .split(VARIANT_SEPARATOR)
            .map(|part| parse_value(part, true))
            .collect();
        Value::variant(parts).unwrap_or_else(|_| Value::invalid())
    } else {
        Value::invalid()
    }
}

/// Classify a cleaned spelling; anything unrecognised is [`Value::invalid`]
pub fn parse_reading(cleaned: &str) -> Value {
    parse_value(cleaned, false)
}
