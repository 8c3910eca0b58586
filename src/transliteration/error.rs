//! Error types for parsing and updating transliterations.

use serde::Serialize;
use thiserror::Error;

/// The grammar rejected a line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct SyntaxError {
    /// `Invalid line: ` followed by a context window and a caret line
    pub description: String,
    /// Character offset of the failure within the line
    pub position: usize,
}

/// Bracket nesting violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid brackets.")]
pub struct EnclosureError;

/// Two text lines of one document share a structural label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate labels.")]
pub struct DuplicateLabelError {
    pub duplicates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LemmatizationError {
    #[error("Expected {expected} lemmatization entries, got {actual}.")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Cannot apply lemma {lemma:?} to \"{value}\" using \"{update}\".")]
    Incompatible {
        value: String,
        update: String,
        lemma: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("Expected {expected} alignment entries, got {actual}.")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Cannot apply alignment {alignment:?} to \"{value}\" using \"{update}\".")]
    Incompatible {
        value: String,
        update: String,
        alignment: Option<usize>,
    },
    #[error("Invalid variant \"{0}\".")]
    InvalidVariant(String),
}

/// Illegal composition of a variant or compound value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("Variants cannot be nested.")]
    NestedVariant,
    #[error("Variants cannot contain splittable compound graphemes.")]
    SplittableInVariant,
    #[error("A splittable grapheme can only contain graphemes.")]
    NotAGrapheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("Duplicate status in \"{0}\".")]
    DuplicateStatus(String),
    #[error("Invalid roman numeral \"{0}\".")]
    InvalidRoman(String),
}

/// A parsed line that the model cannot accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Enclosure(#[from] EnclosureError),
    #[error("Invalid line: {0}")]
    Invalid(String),
}

impl From<ValueError> for LineError {
    fn from(error: ValueError) -> Self {
        LineError::Invalid(error.to_string())
    }
}

impl From<LabelError> for LineError {
    fn from(error: LabelError) -> Self {
        LineError::Invalid(error.to_string())
    }
}

/// One entry of the error report, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub description: String,
    #[serde(rename = "lineNumber")]
    pub line_number: usize,
}

impl ErrorEntry {
    pub fn new(description: impl Into<String>, line_number: usize) -> Self {
        Self {
            description: description.into(),
            line_number,
        }
    }
}

/// All line errors of a document, reported together
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Invalid transliteration: {} line(s) rejected.", .errors.len())]
pub struct TransliterationError {
    pub errors: Vec<ErrorEntry>,
}

/// Failure of the document parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Transliteration(#[from] TransliterationError),
    #[error(transparent)]
    DuplicateLabels(#[from] DuplicateLabelError),
}

impl ParseError {
    /// The error report shown to users
    pub fn errors(&self) -> Vec<ErrorEntry> {
        match self {
            ParseError::Transliteration(error) => error.errors.clone(),
            ParseError::DuplicateLabels(error) => vec![ErrorEntry::new(error.to_string(), 0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_entry_serialization() {
        let entry = ErrorEntry::new("Invalid brackets.", 3);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"description": "Invalid brackets.", "lineNumber": 3})
        );
    }

    #[test]
    fn test_line_error_descriptions() {
        assert_eq!(
            LineError::from(EnclosureError).to_string(),
            "Invalid brackets."
        );
        assert_eq!(
            LineError::from(ValueError::NestedVariant).to_string(),
            "Invalid line: Variants cannot be nested."
        );
    }

    #[test]
    fn test_transliteration_error_message() {
        let error = TransliterationError {
            errors: vec![ErrorEntry::new("a", 1), ErrorEntry::new("b", 2)],
        };
        assert_eq!(
            error.to_string(),
            "Invalid transliteration: 2 line(s) rejected."
        );
    }
}
