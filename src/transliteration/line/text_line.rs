use serde::Serialize;

use crate::transliteration::annotation::{AlignmentToken, LemmatizationToken};
use crate::transliteration::atf_visitor::convert_to_atf;
use crate::transliteration::enclosure::tag_enclosures;
use crate::transliteration::error::{AlignmentError, LemmatizationError};
use crate::transliteration::labels::AbstractLineNumber;
use crate::transliteration::language::set_language;
use crate::transliteration::merger::merge_tokens;
use crate::transliteration::tokens::{Token, TokenKind};

/// A numbered line of transliteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    line_number: AbstractLineNumber,
    content: Vec<Token>,
}

impl TextLine {
    /// Build a line, tagging enclosures and languages
    pub fn of_iterable(line_number: AbstractLineNumber, content: Vec<Token>) -> Self {
        let tagged = tag_enclosures(&content);
        Self {
            line_number,
            content: set_language(&tagged),
        }
    }

    pub fn line_number(&self) -> &AbstractLineNumber {
        &self.line_number
    }

    pub fn content(&self) -> &[Token] {
        &self.content
    }

    pub fn atf(&self) -> String {
        convert_to_atf(Some(&self.line_number.atf()), &self.content)
    }

    fn with_content(&self, content: Vec<Token>) -> Self {
        Self {
            line_number: self.line_number.clone(),
            content,
        }
    }

    pub fn lemmatization(&self) -> Vec<LemmatizationToken> {
        self.content
            .iter()
            .map(|token| match token.kind() {
                TokenKind::Word(word) | TokenKind::GreekWord(word) => {
                    LemmatizationToken::new(token.value(), Some(word.unique_lemma().to_vec()))
                }
                _ => LemmatizationToken::new(token.value(), None),
            })
            .collect()
    }

    /// Apply one lemma per token; nothing changes unless every token accepts its lemma
    pub fn update_lemmatization(
        &self,
        lemmatization: &[LemmatizationToken],
    ) -> Result<TextLine, LemmatizationError> {
        if lemmatization.len() != self.content.len() {
            return Err(LemmatizationError::LengthMismatch {
                expected: self.content.len(),
                actual: lemmatization.len(),
            });
        }
        let content = self
            .content
            .iter()
            .zip(lemmatization)
            .map(|(token, update)| token.set_unique_lemma(update))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_content(content))
    }

    pub fn alignment(&self) -> Vec<AlignmentToken> {
        self.content
            .iter()
            .map(|token| match token.as_word() {
                Some(word) => AlignmentToken::new(
                    token.value(),
                    word.alignment(),
                    word.variant().cloned(),
                ),
                None => AlignmentToken::new(token.value(), None, None),
            })
            .collect()
    }

    /// Apply one alignment per token, all or nothing
    pub fn update_alignment(&self, alignment: &[AlignmentToken]) -> Result<TextLine, AlignmentError> {
        if alignment.len() != self.content.len() {
            return Err(AlignmentError::LengthMismatch {
                expected: self.content.len(),
                actual: alignment.len(),
            });
        }
        let content = self
            .content
            .iter()
            .zip(alignment)
            .map(|(token, update)| token.set_alignment(update))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_content(content))
    }

    pub fn update_alignments(&self, alignment_map: &[Option<usize>]) -> TextLine {
        self.with_content(
            self.content
                .iter()
                .map(|token| token.update_alignment(alignment_map))
                .collect(),
        )
    }

    pub fn strip_alignments(&self) -> TextLine {
        self.with_content(self.content.iter().map(Token::strip_alignment).collect())
    }

    /// Merge `self` (old) into `new`, keeping annotations of unchanged words
    pub fn merge(&self, new: &TextLine) -> TextLine {
        TextLine::of_iterable(
            new.line_number.clone(),
            merge_tokens(&self.content, &new.content),
        )
    }
}
