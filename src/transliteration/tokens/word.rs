use serde::Serialize;

use super::{Token, TokenKind};
use crate::transliteration::language::{Language, DEFAULT_LANGUAGE, DEFAULT_NORMALIZED};

/// A word: signs and glosses joined by joiners, plus its annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    parts: Vec<Token>,
    language: Language,
    normalized: bool,
    unique_lemma: Vec<String>,
    alignment: Option<usize>,
    variant: Option<Box<Word>>,
}

impl Word {
    pub fn of(parts: Vec<Token>) -> Self {
        Self {
            parts,
            language: DEFAULT_LANGUAGE,
            normalized: DEFAULT_NORMALIZED,
            unique_lemma: Vec::new(),
            alignment: None,
            variant: None,
        }
    }

    pub fn parts(&self) -> &[Token] {
        &self.parts
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    pub fn unique_lemma(&self) -> &[String] {
        &self.unique_lemma
    }

    pub fn alignment(&self) -> Option<usize> {
        self.alignment
    }

    /// The word of another witness this word is aligned with
    pub fn variant(&self) -> Option<&Word> {
        self.variant.as_deref()
    }

    pub fn with_language(self, language: Language, normalized: bool) -> Self {
        Self {
            language,
            normalized,
            ..self
        }
    }

    pub fn with_unique_lemma(self, unique_lemma: Vec<String>) -> Self {
        Self {
            unique_lemma,
            ..self
        }
    }

    pub fn with_alignment(self, alignment: Option<usize>, variant: Option<Word>) -> Self {
        Self {
            alignment,
            variant: variant.map(Box::new),
            ..self
        }
    }

    pub(crate) fn with_parts(self, parts: Vec<Token>) -> Self {
        Self { parts, ..self }
    }

    pub fn value(&self) -> String {
        self.parts.iter().map(Token::value).collect()
    }

    pub fn clean_value(&self) -> String {
        self.parts.iter().map(Token::clean_value).collect()
    }

    /// Unclear content anywhere in the word blocks lemmatization
    pub fn has_unlemmatizable_part(&self) -> bool {
        fn blocks(token: &Token) -> bool {
            match token.kind() {
                TokenKind::Variant(_)
                | TokenKind::UnclearSign(_)
                | TokenKind::UnidentifiedSign(_)
                | TokenKind::UnknownNumberOfSigns => true,
                _ => token.parts().into_iter().any(blocks),
            }
        }
        self.parts.iter().any(blocks)
    }
}
