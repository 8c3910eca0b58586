//! Signs as stored in the sign list

use serde::{Deserialize, Serialize};

const ABZ: &str = "ABZ";

/// A reading of a sign, e.g. `gid` with sub-index 2
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignValue {
    pub value: String,
    /// `None` for readings written with `ₓ`
    #[serde(default)]
    pub sub_index: Option<u32>,
}

impl SignValue {
    pub fn new(value: impl Into<String>, sub_index: Option<u32>) -> Self {
        Self {
            value: value.into(),
            sub_index,
        }
    }
}

/// What a sign can be looked up by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SignKey {
    Value(SignValue),
    Name(String),
}

/// An entry of a sign list such as ABZ or MZL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignListRecord {
    pub name: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
    pub name: String,
    #[serde(default)]
    pub lists: Vec<SignListRecord>,
    #[serde(default)]
    pub values: Vec<SignValue>,
}

impl Sign {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lists: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: &str, sub_index: Option<u32>) -> Self {
        self.values.push(SignValue::new(value, sub_index));
        self
    }

    pub fn with_list(mut self, name: &str, number: &str) -> Self {
        self.lists.push(SignListRecord {
            name: name.to_string(),
            number: number.to_string(),
        });
        self
    }

    /// The ABZ number, e.g. `ABZ075`
    pub fn abz_number(&self) -> Option<String> {
        self.lists
            .iter()
            .find(|record| record.name == ABZ)
            .map(|record| format!("{}{}", ABZ, record.number))
    }

    /// Every key this sign answers to: its values, then its name
    pub fn keys(&self) -> Vec<SignKey> {
        self.values
            .iter()
            .cloned()
            .map(SignKey::Value)
            .chain(std::iter::once(SignKey::Name(self.name.clone())))
            .collect()
    }

    pub fn matches(&self, key: &SignKey) -> bool {
        match key {
            SignKey::Value(value) => self.values.contains(value),
            SignKey::Name(name) => &self.name == name,
        }
    }
}

/// A compound of graphemes that can be looked up part by part, e.g. `|A.EDIN.LAL|`
pub fn is_splittable(name: &str) -> bool {
    name.contains('.') && !name.contains('(')
}

/// Spaces and slashes separate signs and variants in resolved strings
fn escape(name: &str) -> String {
    name.replace('/', "\\u002F").replace(' ', "\\u0020")
}

/// Canonical forms of a sign: `deep` splits compounds, `shallow` keeps them whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standardization {
    pub deep: String,
    pub shallow: String,
}

impl Standardization {
    pub fn new(deep: impl Into<String>, shallow: impl Into<String>) -> Self {
        Self {
            deep: deep.into(),
            shallow: shallow.into(),
        }
    }

    pub fn of_string(value: &str) -> Self {
        Self::new(value, value)
    }

    pub fn of_sign(sign: &Sign) -> Self {
        if is_splittable(&sign.name) {
            Self::of_string(&sign.name)
        } else {
            let value = escape(&sign.abz_number().unwrap_or_else(|| sign.name.clone()));
            Self::of_string(&value)
        }
    }

    pub fn is_splittable(&self) -> bool {
        is_splittable(&self.deep)
    }

    pub fn get_value(&self, is_deep: bool) -> &str {
        if is_deep {
            &self.deep
        } else {
            &self.shallow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardization_prefers_abz() {
        let sign = Sign::new("KU").with_list("ABZ", "207a/207b X");
        assert_eq!(
            Standardization::of_sign(&sign),
            Standardization::of_string("ABZ207a\\u002F207b\\u0020X")
        );
        assert_eq!(Standardization::of_sign(&Sign::new("BU")).deep, "BU");
    }

    #[test]
    fn test_splittable_sign_keeps_its_name() {
        let sign = Sign::new("|A.EDIN.LAL|").with_list("ABZ", "081");
        let standardization = Standardization::of_sign(&sign);
        assert!(standardization.is_splittable());
        assert_eq!(standardization.get_value(false), "|A.EDIN.LAL|");
        assert!(!is_splittable("|(4×ZA).KUR|"));
    }

    #[test]
    fn test_sign_deserialization() {
        let sign: Sign = serde_json::from_str(
            r#"{"name": "KU", "lists": [{"name": "ABZ", "number": "075"}], "values": [{"value": "ku", "subIndex": 1}]}"#,
        )
        .unwrap();
        assert_eq!(sign.abz_number(), Some("ABZ075".to_string()));
        assert!(sign.matches(&SignKey::Value(SignValue::new("ku", Some(1)))));
        assert!(sign.matches(&SignKey::Name("KU".into())));
    }
}
