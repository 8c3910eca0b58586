//! Lemmatization and alignment updates
//!
//! Updates are positional: one entry per token of a line, each naming the value of the
//! token it is meant for. The payload types mirror the JSON exchanged with editors.

use serde::{Deserialize, Serialize};

use super::error::AlignmentError;
use super::language::Language;
use super::parser::AtfParser;
use super::tokens::Word;

/// Map from old token positions to new ones, `None` where a token has no counterpart
pub type AlignmentMap = Vec<Option<usize>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LemmatizationToken {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_lemma: Option<Vec<String>>,
}

impl LemmatizationToken {
    pub fn new(value: impl Into<String>, unique_lemma: Option<Vec<String>>) -> Self {
        Self {
            value: value.into(),
            unique_lemma,
        }
    }
}

/// Lemmatization of a whole text, one list per line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lemmatization {
    pub tokens: Vec<Vec<LemmatizationToken>>,
}

impl Lemmatization {
    pub fn new(tokens: Vec<Vec<LemmatizationToken>>) -> Self {
        Self { tokens }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentToken {
    pub value: String,
    pub alignment: Option<usize>,
    pub variant: Option<Word>,
}

impl AlignmentToken {
    pub fn new(value: impl Into<String>, alignment: Option<usize>, variant: Option<Word>) -> Self {
        Self {
            value: value.into(),
            alignment,
            variant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPayload {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub language: Language,
}

/// `{value, alignment?, variant?}` as sent by editors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentPayload {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantPayload>,
}

impl AlignmentPayload {
    /// Resolve the payload; the variant is parsed as a word
    pub fn to_token(&self, parser: &AtfParser) -> Result<AlignmentToken, AlignmentError> {
        let variant = match &self.variant {
            Some(variant) if variant.kind == "Word" => {
                let token = parser
                    .parse_word(&variant.value)
                    .map_err(|_| AlignmentError::InvalidVariant(variant.value.clone()))?;
                let word = token
                    .as_word()
                    .cloned()
                    .ok_or_else(|| AlignmentError::InvalidVariant(variant.value.clone()))?;
                Some(word.with_language(variant.language, false))
            }
            Some(variant) => return Err(AlignmentError::InvalidVariant(variant.value.clone())),
            None => None,
        };
        Ok(AlignmentToken::new(self.value.clone(), self.alignment, variant))
    }
}

impl From<&AlignmentToken> for AlignmentPayload {
    fn from(token: &AlignmentToken) -> Self {
        Self {
            value: token.value.clone(),
            alignment: token.alignment,
            variant: token.variant.as_ref().map(|word| VariantPayload {
                value: word.value(),
                kind: "Word".to_string(),
                language: word.language(),
            }),
        }
    }
}

/// Alignment of a text, one list per line, in payload form
pub fn parse_alignment(
    parser: &AtfParser,
    payload: &[Vec<AlignmentPayload>],
) -> Result<Vec<Vec<AlignmentToken>>, AlignmentError> {
    payload
        .iter()
        .map(|line| line.iter().map(|entry| entry.to_token(parser)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::config::ParserConfig;

    #[test]
    fn test_lemmatization_payload() {
        let json = r#"[[{"value": "kur", "uniqueLemma": ["kur I"]}, {"value": "|"}]]"#;
        let lemmatization: Lemmatization = serde_json::from_str(json).unwrap();
        assert_eq!(
            lemmatization.tokens[0],
            vec![
                LemmatizationToken::new("kur", Some(vec!["kur I".to_string()])),
                LemmatizationToken::new("|", None),
            ]
        );
        let round_trip = serde_json::to_value(&lemmatization).unwrap();
        assert_eq!(round_trip, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }

    #[test]
    fn test_alignment_payload_with_variant() {
        let parser = AtfParser::new(ParserConfig::strict());
        let payload: AlignmentPayload = serde_json::from_str(
            r#"{"value": "kur", "alignment": 1, "variant": {"value": "ra", "type": "Word", "language": "SUMERIAN"}}"#,
        )
        .unwrap();
        let token = payload.to_token(&parser).unwrap();
        assert_eq!(token.alignment, Some(1));
        let variant = token.variant.clone().unwrap();
        assert_eq!(variant.value(), "ra");
        assert_eq!(variant.language(), Language::Sumerian);
        assert_eq!(AlignmentPayload::from(&token), payload);
    }

    #[test]
    fn test_alignment_payload_rejects_other_variant_types() {
        let parser = AtfParser::new(ParserConfig::strict());
        let payload = AlignmentPayload {
            value: "kur".into(),
            alignment: Some(0),
            variant: Some(VariantPayload {
                value: "{d}".into(),
                kind: "LoneDeterminative".into(),
                language: Language::Akkadian,
            }),
        };
        assert_eq!(
            payload.to_token(&parser),
            Err(AlignmentError::InvalidVariant("{d}".into()))
        );
    }
}
