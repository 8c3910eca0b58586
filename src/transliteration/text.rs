//! Documents
//!
//! A [`Text`] is the ordered list of lines of one transliteration together with the
//! version of the parser that produced it.

use serde::Serialize;

use super::annotation::Lemmatization;
use super::atf::{Status, ATF_PARSER_VERSION};
use super::error::LemmatizationError;
use super::labels::{AbstractLineNumber, ColumnLabel, ObjectLabel, SurfaceLabel};
use super::line::{AtLine, Line};
use super::merger::merge_by;

/// Position of a text line within the structure of its document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TextLabel {
    pub column: Option<ColumnLabel>,
    pub surface: Option<SurfaceLabel>,
    pub object: Option<ObjectLabel>,
    pub line_number: Option<AbstractLineNumber>,
}

impl TextLabel {
    /// Human readable form, e.g. `o ii 3`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        parts.extend(self.object.as_ref().map(ObjectLabel::to_value));
        parts.extend(self.surface.as_ref().map(SurfaceLabel::to_value));
        parts.extend(self.column.as_ref().map(ColumnLabel::to_value));
        parts.extend(self.line_number.as_ref().map(AbstractLineNumber::label));
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    lines: Vec<Line>,
    parser_version: String,
}

impl Default for Text {
    fn default() -> Self {
        Self::of_iterable(Vec::new())
    }
}

impl Text {
    pub fn new(lines: Vec<Line>, parser_version: impl Into<String>) -> Self {
        Self {
            lines,
            parser_version: parser_version.into(),
        }
    }

    pub fn of_iterable(lines: impl IntoIterator<Item = Line>) -> Self {
        Self::new(lines.into_iter().collect(), ATF_PARSER_VERSION)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn parser_version(&self) -> &str {
        &self.parser_version
    }

    pub fn set_parser_version(self, parser_version: impl Into<String>) -> Self {
        Self {
            parser_version: parser_version.into(),
            ..self
        }
    }

    pub fn atf(&self) -> String {
        self.lines
            .iter()
            .map(Line::atf)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn text_lines(&self) -> impl Iterator<Item = &super::line::TextLine> {
        self.lines.iter().filter_map(Line::as_text_line)
    }

    /// One label per text line, following `@column`, surface and object lines
    pub fn labels(&self) -> Vec<TextLabel> {
        let mut current = TextLabel::default();
        let mut labels = Vec::new();
        for line in &self.lines {
            match line {
                Line::Text(text_line) => labels.push(TextLabel {
                    line_number: Some(text_line.line_number().clone()),
                    ..current.clone()
                }),
                Line::At(AtLine::Column(column)) => current.column = Some(column.clone()),
                Line::At(AtLine::Surface(surface)) => current.surface = Some(surface.clone()),
                Line::At(AtLine::Object(object)) => current.object = Some(object.clone()),
                _ => {}
            }
        }
        labels
    }

    /// Labels that occur more than once, in order of their second occurrence
    pub fn duplicate_labels(&self) -> Vec<TextLabel> {
        let labels = self.labels();
        let mut duplicates: Vec<TextLabel> = Vec::new();
        for (index, label) in labels.iter().enumerate() {
            let comparable = |other: &TextLabel| same_position(other, label);
            if labels[..index].iter().any(comparable)
                && !duplicates.iter().any(|duplicate| same_position(duplicate, label))
            {
                duplicates.push(label.clone());
            }
        }
        duplicates
    }

    pub fn lemmatization(&self) -> Lemmatization {
        Lemmatization::new(self.lines.iter().map(Line::lemmatization).collect())
    }

    /// Apply a lemmatization with one entry per line
    pub fn update_lemmatization(&self, lemmatization: &Lemmatization) -> Result<Text, LemmatizationError> {
        if lemmatization.tokens.len() != self.lines.len() {
            return Err(LemmatizationError::LengthMismatch {
                expected: self.lines.len(),
                actual: lemmatization.tokens.len(),
            });
        }
        let lines = self
            .lines
            .iter()
            .zip(&lemmatization.tokens)
            .map(|(line, tokens)| line.update_lemmatization(tokens))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            lines,
            parser_version: self.parser_version.clone(),
        })
    }

    pub fn strip_alignments(&self) -> Text {
        Self {
            lines: self.lines.iter().map(Line::strip_alignments).collect(),
            parser_version: self.parser_version.clone(),
        }
    }

    /// Merge `self` (old) into `new`, matching lines by key
    pub fn merge(&self, new: &Text) -> Text {
        Self {
            lines: merge_by(&self.lines, &new.lines, Line::key, Line::merge),
            parser_version: new.parser_version.clone(),
        }
    }
}

/// Labels compare by structure; object status and text are part of the position
fn same_position(left: &TextLabel, right: &TextLabel) -> bool {
    fn object_key(label: &TextLabel) -> Option<(String, Vec<Status>)> {
        label.object.as_ref().map(|object| {
            let mut status = object.status().to_vec();
            status.sort();
            (object.to_atf(), status)
        })
    }
    left.column == right.column
        && left.surface == right.surface
        && object_key(left) == object_key(right)
        && left.line_number == right.line_number
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::atf::Surface;
    use crate::transliteration::labels::LineNumber;
    use crate::transliteration::line::TextLine;
    use crate::transliteration::tokens::Token;

    fn text_line(number: u32, value: &str) -> Line {
        Line::Text(TextLine::of_iterable(
            LineNumber::new(number).into(),
            vec![Token::word(vec![Token::reading(value, Some(1))])],
        ))
    }

    fn surface(surface: Surface) -> Line {
        Line::At(AtLine::Surface(SurfaceLabel::new(surface, vec![], "").unwrap()))
    }

    #[test]
    fn test_labels_follow_structure() {
        let text = Text::of_iterable(vec![
            surface(Surface::Obverse),
            text_line(1, "kur"),
            surface(Surface::Reverse),
            text_line(1, "ra"),
        ]);
        let labels = text.labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].describe(), "o 1");
        assert_eq!(labels[1].describe(), "r 1");
        assert!(text.duplicate_labels().is_empty());
    }

    #[test]
    fn test_duplicate_labels() {
        let text = Text::of_iterable(vec![text_line(1, "kur"), text_line(1, "ra")]);
        let duplicates = text.duplicate_labels();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].describe(), "1");
    }

    #[test]
    fn test_atf_joins_lines() {
        let text = Text::of_iterable(vec![text_line(1, "kur"), Line::Empty, text_line(2, "ra")]);
        assert_eq!(text.atf(), "1. kur\n\n2. ra");
        assert_eq!(text.parser_version(), ATF_PARSER_VERSION);
    }

    #[test]
    fn test_merge_takes_new_version() {
        let old = Text::of_iterable(vec![text_line(1, "kur")]).set_parser_version("0.1.0");
        let new = Text::of_iterable(vec![text_line(1, "kur"), text_line(2, "ra")]);
        let merged = old.merge(&new);
        assert_eq!(merged, new);
        assert_eq!(old.merge(&old), old);
    }

    #[test]
    fn test_update_lemmatization_requires_every_line() {
        let text = Text::of_iterable(vec![text_line(1, "kur"), Line::Empty]);
        assert_eq!(
            text.update_lemmatization(&Lemmatization::new(vec![vec![]])),
            Err(LemmatizationError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        let lemmatization = text.lemmatization();
        assert_eq!(text.update_lemmatization(&lemmatization), Ok(text.clone()));
    }
}
