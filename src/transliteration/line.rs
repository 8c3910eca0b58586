//! The line model
//!
//! A document is a sequence of [`Line`]s. Only text lines carry tokens; the other kinds
//! are structural or editorial annotations with their own canonical rendering.

mod at_line;
mod dollar_line;
mod note_line;
mod parallel_line;
mod text_line;

pub use at_line::{AtLine, CompositeAtLine};
pub use dollar_line::{
    DollarLine, DollarStatus, Extent, Qualification, Ruling, Scope, ScopeContainer, State,
    StateDollarLine,
};
pub use note_line::{NoteLine, TranslationLine, DEFAULT_TRANSLATION_LANGUAGE};
pub use parallel_line::{ChapterName, ParallelLine};
pub use text_line::TextLine;

use serde::Serialize;

use super::annotation::{AlignmentToken, LemmatizationToken};
use super::error::{AlignmentError, LemmatizationError};
use super::tokens::Token;

/// Any other `#`, `=:` or `&` line, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlLine {
    pub prefix: String,
    pub content: String,
}

impl ControlLine {
    pub fn new(prefix: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Line {
    Text(TextLine),
    Control(ControlLine),
    Empty,
    Dollar(DollarLine),
    At(AtLine),
    Note(NoteLine),
    Translation(TranslationLine),
    Parallel(ParallelLine),
}

impl Line {
    pub fn type_name(&self) -> &'static str {
        match self {
            Line::Text(_) => "TextLine",
            Line::Control(_) => "ControlLine",
            Line::Empty => "EmptyLine",
            Line::Dollar(line) => line.type_name(),
            Line::At(line) => line.type_name(),
            Line::Note(_) => "NoteLine",
            Line::Translation(_) => "TranslationLine",
            Line::Parallel(line) => line.type_name(),
        }
    }

    pub fn atf(&self) -> String {
        match self {
            Line::Text(line) => line.atf(),
            Line::Control(line) => format!("{}{}", line.prefix, line.content),
            Line::Empty => String::new(),
            Line::Dollar(line) => line.atf(),
            Line::At(line) => line.atf(),
            Line::Note(line) => line.atf(),
            Line::Translation(line) => line.atf(),
            Line::Parallel(line) => line.atf(),
        }
    }

    /// Rendering plus token keys, used to match lines when merging
    pub fn key(&self) -> String {
        let tokens: Vec<String> = self.content().iter().map(Token::key).collect();
        format!("{}⁞{}⟨{}⟩", self.type_name(), self.atf(), tokens.join("⁚"))
    }

    pub fn content(&self) -> &[Token] {
        match self {
            Line::Text(line) => line.content(),
            _ => &[],
        }
    }

    pub fn as_text_line(&self) -> Option<&TextLine> {
        match self {
            Line::Text(line) => Some(line),
            _ => None,
        }
    }

    pub fn lemmatization(&self) -> Vec<LemmatizationToken> {
        match self {
            Line::Text(line) => line.lemmatization(),
            _ => Vec::new(),
        }
    }

    pub fn update_lemmatization(
        &self,
        lemmatization: &[LemmatizationToken],
    ) -> Result<Line, LemmatizationError> {
        match self {
            Line::Text(line) => Ok(Line::Text(line.update_lemmatization(lemmatization)?)),
            other => Ok(other.clone()),
        }
    }

    pub fn update_alignment(&self, alignment: &[AlignmentToken]) -> Result<Line, AlignmentError> {
        match self {
            Line::Text(line) => Ok(Line::Text(line.update_alignment(alignment)?)),
            other => Ok(other.clone()),
        }
    }

    pub fn update_alignments(&self, alignment_map: &[Option<usize>]) -> Line {
        match self {
            Line::Text(line) => Line::Text(line.update_alignments(alignment_map)),
            other => other.clone(),
        }
    }

    pub fn strip_alignments(&self) -> Line {
        match self {
            Line::Text(line) => Line::Text(line.strip_alignments()),
            other => other.clone(),
        }
    }

    /// Merge `self` (old) into `new`; only text lines carry anything over
    pub fn merge(&self, new: &Line) -> Line {
        match (self, new) {
            (Line::Text(old), Line::Text(new)) => Line::Text(old.merge(new)),
            _ => new.clone(),
        }
    }
}

impl From<TextLine> for Line {
    fn from(line: TextLine) -> Self {
        Line::Text(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::labels::LineNumber;

    #[test]
    fn test_control_and_empty_lines() {
        assert_eq!(Line::Control(ControlLine::new("=:", " comment")).atf(), "=: comment");
        assert_eq!(Line::Empty.atf(), "");
        assert_eq!(Line::Empty.key(), "EmptyLine⁞⟨⟩");
    }

    #[test]
    fn test_text_line_key() {
        let line = Line::Text(TextLine::of_iterable(
            LineNumber::new(1).into(),
            vec![Token::word(vec![Token::reading("kur", Some(1))])],
        ));
        assert_eq!(
            line.key(),
            "TextLine⁞1. kur⟨Word⁝kur⟨Reading⁝kur⟨ValueToken⁝kur⟩⟩⟩"
        );
    }

    #[test]
    fn test_merge_replaces_non_text_lines() {
        let old = Line::Control(ControlLine::new("#", " old"));
        let new = Line::Empty;
        assert_eq!(old.merge(&new), Line::Empty);
    }
}
