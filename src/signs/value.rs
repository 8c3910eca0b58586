//! Parsed spellings
//!
//! A [`Value`] is what a cleaned spelling denotes before the sign list is consulted. Its
//! [`keys`](Value::keys) are what has to be looked up to resolve it, and
//! [`to_sign`](Value::to_sign) renders it against the looked up signs.

use std::collections::HashMap;

use serde::Serialize;

use super::sign::{SignKey, SignValue, Standardization};
use crate::transliteration::atf::{UNIDENTIFIED_SIGN, VARIANT_SEPARATOR};
use crate::transliteration::error::ValueError;

/// Placeholder for spellings that cannot be read
pub const INVALID_READING: &str = "?";

pub type SignMap = HashMap<SignKey, Standardization>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    Reading {
        reading: String,
        sub_index: u32,
        /// Rendered when the sign list has no such reading
        default: String,
    },
    NotReading(String),
    Grapheme(String),
    SplittableGrapheme(Vec<String>),
    Variant(Vec<Value>),
}

impl Value {
    pub fn empty() -> Self {
        Value::NotReading(String::new())
    }

    pub fn unidentified() -> Self {
        Value::NotReading(UNIDENTIFIED_SIGN.to_string())
    }

    pub fn invalid() -> Self {
        Value::NotReading(INVALID_READING.to_string())
    }

    pub fn reading(reading: &str, sub_index: u32) -> Self {
        Value::Reading {
            reading: reading.to_string(),
            sub_index,
            default: INVALID_READING.to_string(),
        }
    }

    /// Numbers stand for themselves unless the sign list says otherwise
    pub fn number(number: &str) -> Self {
        Value::Reading {
            reading: number.to_string(),
            sub_index: 1,
            default: number.to_string(),
        }
    }

    pub fn grapheme(name: &str) -> Self {
        Value::Grapheme(name.to_string())
    }

    /// `|A.B.C|` split on its dots
    pub fn splittable_grapheme(compound: &str) -> Self {
        Value::SplittableGrapheme(
            compound
                .trim_matches('|')
                .split('.')
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn variant(values: Vec<Value>) -> Result<Self, ValueError> {
        if values.iter().any(|value| matches!(value, Value::Variant(_))) {
            return Err(ValueError::NestedVariant);
        }
        if values
            .iter()
            .any(|value| matches!(value, Value::SplittableGrapheme(_)))
        {
            return Err(ValueError::SplittableInVariant);
        }
        Ok(Value::Variant(values))
    }

    pub fn keys(&self) -> Vec<SignKey> {
        match self {
            Value::Reading {
                reading, sub_index, ..
            } => vec![SignKey::Value(SignValue::new(reading.as_str(), Some(*sub_index)))],
            Value::NotReading(_) => Vec::new(),
            Value::Grapheme(name) => vec![SignKey::Name(name.clone())],
            Value::SplittableGrapheme(names) => names
                .iter()
                .map(|name| SignKey::Name(name.clone()))
                .collect(),
            Value::Variant(values) => values.iter().flat_map(Value::keys).collect(),
        }
    }

    /// The sign this value stands for; parts of a split compound are space separated
    pub fn to_sign(&self, sign_map: &SignMap, is_deep: bool) -> String {
        let lookup = |key: SignKey, default: &str| {
            sign_map
                .get(&key)
                .map(|standardization| standardization.get_value(is_deep).to_string())
                .unwrap_or_else(|| default.to_string())
        };
        match self {
            Value::Reading {
                reading,
                sub_index,
                default,
            } => lookup(
                SignKey::Value(SignValue::new(reading.as_str(), Some(*sub_index))),
                default,
            ),
            Value::NotReading(value) => value.clone(),
            Value::Grapheme(name) => lookup(SignKey::Name(name.clone()), name),
            Value::SplittableGrapheme(names) => names
                .iter()
                .map(|name| lookup(SignKey::Name(name.clone()), name))
                .collect::<Vec<_>>()
                .join(" "),
            Value::Variant(values) => values
                .iter()
                .map(|value| value.to_sign(sign_map, false))
                .collect::<Vec<_>>()
                .join(VARIANT_SEPARATOR),
        }
    }
}
