//! From transliteration to signs
//!
//! [`AtfConverter`] reduces a transliteration to a matrix of sign names, one row per text
//! line, by cleaning each line, parsing the spellings into [`Value`]s and resolving them
//! against a [`SignRepository`] in a single batch.

use log::{debug, warn};

use super::clean::clean_values;
use super::repository::SignRepository;
use super::sign::{Sign, SignKey, Standardization};
use super::value::{SignMap, Value};
use super::value_mapper::parse_reading;
use crate::transliteration::error::ParseError;
use crate::transliteration::parser::AtfParser;

const SIGN_SEPARATOR: char = ' ';

fn sign_to_pairs(sign: &Sign) -> Vec<(SignKey, Standardization)> {
    let standardization = Standardization::of_sign(sign);
    sign.keys()
        .into_iter()
        .map(|key| (key, standardization.clone()))
        .collect()
}

pub struct AtfConverter<R: SignRepository> {
    repository: R,
    parser: AtfParser,
}

impl<R: SignRepository> AtfConverter<R> {
    pub fn new(repository: R) -> Self {
        Self::with_parser(repository, AtfParser::default())
    }

    pub fn with_parser(repository: R, parser: AtfParser) -> Self {
        Self { repository, parser }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn convert_atf_to_sign_matrix(&self, atf: &str) -> Result<Vec<Vec<String>>, ParseError> {
        let values = self.convert_atf_to_values(atf)?;
        Ok(self.convert_values_to_signs(&values))
    }

    pub fn convert_atf_to_values(&self, atf: &str) -> Result<Vec<Vec<Value>>, ParseError> {
        let text = self.parser.parse_atf(atf)?;
        Ok(clean_values(&text)
            .into_iter()
            .map(|row| row.iter().map(|value| parse_reading(value)).collect())
            .collect())
    }

    /// Resolve every value, splitting compounds into their parts
    pub fn convert_values_to_signs(&self, values: &[Vec<Value>]) -> Vec<Vec<String>> {
        let sign_map = self.create_sign_map(values);
        values
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|value| {
                        value
                            .to_sign(&sign_map, true)
                            .split(SIGN_SEPARATOR)
                            .map(str::to_string)
                            .collect::<Vec<_>>()
                    })
                    .collect()
            })
            .collect()
    }

    fn create_sign_map(&self, values: &[Vec<Value>]) -> SignMap {
        let keys: Vec<SignKey> = values.iter().flatten().flat_map(Value::keys).collect();
        let signs = self.repository.search_many(&keys);
        debug!("{} key(s) matched {} sign(s)", keys.len(), signs.len());

        let sign_map: SignMap = signs
            .iter()
            .flat_map(sign_to_pairs)
            .map(|(key, standardization)| (key, self.expand_splittable(standardization)))
            .collect();
        for key in keys.iter().filter(|key| !sign_map.contains_key(key)) {
            warn!("no sign found for {:?}", key);
        }
        sign_map
    }

    /// Resolve the parts of a compound so that its deep form names signs
    fn expand_splittable(&self, standardization: Standardization) -> Standardization {
        if standardization.is_splittable() {
            let value = parse_reading(&standardization.deep);
            let sign_map = self.create_sign_map(&[vec![value.clone()]]);
            Standardization::new(value.to_sign(&sign_map, true), standardization.shallow)
        } else {
            standardization
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signs::repository::MemorySignRepository;

    fn converter() -> AtfConverter<MemorySignRepository> {
        AtfConverter::new(MemorySignRepository::new(vec![
            Sign::new("ŠU").with_value("šu", Some(1)),
            Sign::new("BU").with_value("gid", Some(2)),
            Sign::new("KU").with_value("ku", Some(1)).with_list("ABZ", "207a/207b X"),
            Sign::new("|A.EDIN.LAL|").with_value("ummu", Some(3)),
            Sign::new("A").with_list("ABZ", "579"),
            Sign::new("EDIN").with_list("ABZ", "168"),
            Sign::new("LAL"),
        ]))
    }

    #[test]
    fn test_sign_matrix() {
        assert_eq!(
            converter().convert_atf_to_sign_matrix("1. šu gid₂"),
            Ok(vec![vec!["ŠU".to_string(), "BU".to_string()]])
        );
    }

    #[test]
    fn test_compounds_are_split() {
        assert_eq!(
            converter().convert_atf_to_sign_matrix("1. ummu₃\n2. ku x"),
            Ok(vec![
                vec![
                    "ABZ579".to_string(),
                    "ABZ168".to_string(),
                    "LAL".to_string()
                ],
                vec!["ABZ207a\\u002F207b\\u0020X".to_string(), "X".to_string()],
            ])
        );
    }

    #[test]
    fn test_unknown_readings() {
        assert_eq!(
            converter().convert_atf_to_sign_matrix("1. mu 3"),
            Ok(vec![vec!["?".to_string(), "3".to_string()]])
        );
    }

    #[test]
    fn test_invalid_transliteration() {
        assert!(converter().convert_atf_to_sign_matrix("1. [ku").is_err());
    }
}
