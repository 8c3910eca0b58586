//! Line numbers and structural labels
//!
//! Text lines are numbered (`1.`, `2'.`, `a+1'b.`, `3-4.`); surfaces, columns and objects
//! are labelled with abbreviations such as `o`, `iii'` or `tablet`. Label status marks may
//! not repeat.

use std::fmt;

use serde::Serialize;

use super::atf::{self, Object, Status, Surface};
use super::error::LabelError;

/// `[<prefix>+]<number>[']<suffix>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineNumber {
    pub number: u32,
    pub has_prime: bool,
    pub prefix_modifier: Option<String>,
    pub suffix_modifier: Option<char>,
}

impl LineNumber {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            has_prime: false,
            prefix_modifier: None,
            suffix_modifier: None,
        }
    }

    pub fn primed(self) -> Self {
        Self {
            has_prime: true,
            ..self
        }
    }

    pub fn label(&self) -> String {
        let prefix = self
            .prefix_modifier
            .as_ref()
            .map(|prefix| format!("{}+", prefix))
            .unwrap_or_default();
        let prime = if self.has_prime { "'" } else { "" };
        let suffix = self
            .suffix_modifier
            .map(String::from)
            .unwrap_or_default();
        format!("{}{}{}{}", prefix, self.number, prime, suffix)
    }

    /// Line 1 of a side, the point where a new surface starts
    pub fn is_beginning_of_side(&self) -> bool {
        self.number == 1 && !self.has_prime && self.prefix_modifier.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineNumberRange {
    pub start: LineNumber,
    pub end: LineNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AbstractLineNumber {
    Single(LineNumber),
    Range(LineNumberRange),
}

impl AbstractLineNumber {
    /// The number as written before the dot
    pub fn label(&self) -> String {
        match self {
            AbstractLineNumber::Single(number) => number.label(),
            AbstractLineNumber::Range(range) => {
                format!("{}-{}", range.start.label(), range.end.label())
            }
        }
    }

    pub fn atf(&self) -> String {
        format!("{}.", self.label())
    }

    pub fn is_beginning_of_side(&self) -> bool {
        match self {
            AbstractLineNumber::Single(number) => number.is_beginning_of_side(),
            AbstractLineNumber::Range(range) => range.start.is_beginning_of_side(),
        }
    }
}

impl From<LineNumber> for AbstractLineNumber {
    fn from(number: LineNumber) -> Self {
        AbstractLineNumber::Single(number)
    }
}

fn check_status(status: &[Status]) -> Result<(), LabelError> {
    let mut seen = Vec::with_capacity(status.len());
    for mark in status {
        if seen.contains(mark) {
            return Err(LabelError::DuplicateStatus(atf::status_atf(status)));
        }
        seen.push(*mark);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnLabel {
    pub column: u32,
    status: Vec<Status>,
}

impl ColumnLabel {
    pub fn new(column: u32, status: Vec<Status>) -> Result<Self, LabelError> {
        check_status(&status)?;
        Ok(Self { column, status })
    }

    /// From a roman numeral such as `iv`
    pub fn from_label(numeral: &str, status: Vec<Status>) -> Result<Self, LabelError> {
        let column = from_roman(numeral)
            .ok_or_else(|| LabelError::InvalidRoman(numeral.to_string()))?;
        Self::new(column, status)
    }

    pub fn status(&self) -> &[Status] {
        &self.status
    }

    pub fn abbreviation(&self) -> String {
        to_roman(self.column).to_lowercase()
    }

    pub fn to_value(&self) -> String {
        format!("{}{}", self.abbreviation(), atf::status_atf(&self.status))
    }

    pub fn to_atf(&self) -> String {
        format!("@column {}{}", self.column, atf::status_atf(&self.status))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SurfaceLabel {
    pub surface: Surface,
    pub text: String,
    status: Vec<Status>,
}

impl SurfaceLabel {
    pub fn new(surface: Surface, status: Vec<Status>, text: &str) -> Result<Self, LabelError> {
        check_status(&status)?;
        Ok(Self {
            surface,
            text: text.to_string(),
            status,
        })
    }

    pub fn status(&self) -> &[Status] {
        &self.status
    }

    pub fn abbreviation(&self) -> String {
        match self.surface {
            Surface::Edge if !self.text.is_empty() => self.text.clone(),
            _ if self.surface.label().is_empty() => self.text.clone(),
            _ => self.surface.label().to_string(),
        }
    }

    pub fn to_value(&self) -> String {
        format!("{}{}", self.abbreviation(), atf::status_atf(&self.status))
    }

    pub fn to_atf(&self) -> String {
        let text = if self.text.is_empty() {
            String::new()
        } else {
            format!(" {}", self.text)
        };
        format!(
            "@{}{}{}",
            self.surface.atf(),
            atf::status_atf(&self.status),
            text
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectLabel {
    pub object: Object,
    pub text: String,
    status: Vec<Status>,
}

impl ObjectLabel {
    pub fn new(object: Object, status: Vec<Status>, text: &str) -> Result<Self, LabelError> {
        check_status(&status)?;
        Ok(Self {
            object,
            text: text.to_string(),
            status,
        })
    }

    pub fn status(&self) -> &[Status] {
        &self.status
    }

    pub fn abbreviation(&self) -> String {
        if self.text.is_empty() {
            self.object.atf().to_string()
        } else {
            self.text.clone()
        }
    }

    pub fn to_value(&self) -> String {
        format!("{}{}", self.abbreviation(), atf::status_atf(&self.status))
    }

    pub fn to_atf(&self) -> String {
        let text = if self.text.is_empty() {
            String::new()
        } else {
            format!(" {}", self.text)
        };
        format!("@{}{}{}", self.object.atf(), atf::status_atf(&self.status), text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    Column(ColumnLabel),
    Surface(SurfaceLabel),
    Object(ObjectLabel),
}

impl Label {
    pub fn to_value(&self) -> String {
        match self {
            Label::Column(label) => label.to_value(),
            Label::Surface(label) => label.to_value(),
            Label::Object(label) => label.to_value(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

fn split_status(label: &str) -> (&str, Vec<Status>) {
    let body = label.trim_end_matches(|c: char| "'?!*".contains(c));
    let status = label[body.len()..]
        .chars()
        .filter_map(|mark| Status::from_atf(&mark.to_string()))
        .collect();
    (body, status)
}

/// Parse space separated labels such as `o iii'`
pub fn parse_labels(labels: &str) -> Result<Vec<Label>, LabelError> {
    labels
        .split_whitespace()
        .map(|label| {
            let (body, status) = split_status(label);
            if let Some(surface) = Surface::from_label(body) {
                SurfaceLabel::new(surface, status, "").map(Label::Surface)
            } else if let Some(object) = Object::from_atf(body) {
                ObjectLabel::new(object, status, "").map(Label::Object)
            } else {
                ColumnLabel::from_label(body, status).map(Label::Column)
            }
        })
        .collect()
}

const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub fn to_roman(mut number: u32) -> String {
    let mut roman = String::new();
    for (value, numeral) in ROMAN_NUMERALS {
        while number >= value {
            roman.push_str(numeral);
            number -= value;
        }
    }
    roman
}

/// Only canonical numerals are accepted
pub fn from_roman(numeral: &str) -> Option<u32> {
    let upper = numeral.to_uppercase();
    let mut rest = upper.as_str();
    let mut number = 0;
    for (value, symbol) in ROMAN_NUMERALS {
        while let Some(stripped) = rest.strip_prefix(symbol) {
            number += value;
            rest = stripped;
        }
    }
    if rest.is_empty() && number > 0 && to_roman(number) == upper {
        Some(number)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number_labels() {
        let number = LineNumber {
            number: 1,
            has_prime: true,
            prefix_modifier: Some("a".to_string()),
            suffix_modifier: Some('b'),
        };
        assert_eq!(number.label(), "a+1'b");
        assert_eq!(AbstractLineNumber::from(number).atf(), "a+1'b.");

        let range = AbstractLineNumber::Range(LineNumberRange {
            start: LineNumber::new(1),
            end: LineNumber::new(2).primed(),
        });
        assert_eq!(range.atf(), "1-2'.");
    }

    #[test]
    fn test_roman_numerals() {
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(from_roman("iii"), Some(3));
        assert_eq!(from_roman("IIII"), None);
        assert_eq!(from_roman("o"), None);
    }

    #[test]
    fn test_duplicate_status_is_rejected() {
        assert_eq!(
            ColumnLabel::new(1, vec![Status::Prime, Status::Prime]),
            Err(LabelError::DuplicateStatus("''".to_string()))
        );
    }

    #[test]
    fn test_parse_labels() {
        let labels = parse_labels("o iii'").unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].to_value(), "o");
        assert_eq!(labels[1].to_value(), "iii'");
        assert_eq!(
            parse_labels("q"),
            Err(LabelError::InvalidRoman("q".to_string()))
        );
    }

    #[test]
    fn test_label_atf() {
        let surface = SurfaceLabel::new(Surface::Surface, vec![], "a").unwrap();
        assert_eq!(surface.to_atf(), "@surface a");
        let object = ObjectLabel::new(Object::Tablet, vec![Status::Uncertain], "").unwrap();
        assert_eq!(object.to_atf(), "@tablet?");
        assert_eq!(ColumnLabel::new(2, vec![]).unwrap().to_atf(), "@column 2");
    }
}
