//! Languages and the language propagation pass
//!
//! Words are stamped with the language of the closest preceding language shift
//! (`%sux`, `%n`, ...). Shifts that resolve to an unknown language leave the state as is.

use serde::{Deserialize, Serialize};

use super::tokens::{Token, TokenKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    Unknown,
    #[default]
    Akkadian,
    Hittite,
    Sumerian,
    Emesal,
    Greek,
}

pub const DEFAULT_LANGUAGE: Language = Language::Akkadian;
pub const DEFAULT_NORMALIZED: bool = false;

const AKKADIAN_SHIFTS: &[&str] = &[
    "akk", "a", "eakk", "oakk", "ur3akk", "oa", "ob", "ma", "mb", "na", "nb", "sb", "lb",
];
const SUMERIAN_SHIFTS: &[&str] = &["sux", "eg", "s"];
const EMESAL_SHIFTS: &[&str] = &["es", "e"];
const NORMALIZATION_SHIFT: &str = "n";
/// `%grc`, also the suffix of `%akkgrc` and `%suxgrc`
const GREEK_SHIFT: &str = "grc";

impl Language {
    pub fn lemmatizable(self) -> bool {
        matches!(self, Language::Unknown | Language::Akkadian)
    }

    /// Resolve a shift such as `%sux` to its language and normalization flag
    pub fn of_shift(shift: &str) -> (Language, bool) {
        let code = shift.trim_start_matches('%');
        if code == NORMALIZATION_SHIFT {
            (Language::Akkadian, true)
        } else if AKKADIAN_SHIFTS.contains(&code) {
            (Language::Akkadian, false)
        } else if SUMERIAN_SHIFTS.contains(&code) {
            (Language::Sumerian, false)
        } else if EMESAL_SHIFTS.contains(&code) {
            (Language::Emesal, false)
        } else if code == "hit" {
            (Language::Hittite, false)
        } else if code == GREEK_SHIFT {
            (Language::Greek, false)
        } else if let Some(language) = code.strip_suffix(GREEK_SHIFT) {
            match Language::of_shift(language) {
                (Language::Akkadian, false) => (Language::Akkadian, false),
                (Language::Sumerian, false) => (Language::Sumerian, false),
                _ => (Language::Unknown, false),
            }
        } else {
            (Language::Unknown, false)
        }
    }

    /// Code used by language-tagged markup spans (`@akk{...}`)
    pub fn markup_code(self) -> Option<&'static str> {
        match self {
            Language::Akkadian => Some("akk"),
            Language::Sumerian => Some("sux"),
            Language::Emesal => Some("es"),
            _ => None,
        }
    }

    pub fn from_markup_code(code: &str) -> Option<Language> {
        match code {
            "akk" => Some(Language::Akkadian),
            "sux" => Some(Language::Sumerian),
            "es" => Some(Language::Emesal),
            _ => None,
        }
    }
}

/// Left-to-right pass assigning language metadata to words
pub struct LanguageVisitor {
    language: Language,
    normalized: bool,
}

impl LanguageVisitor {
    pub fn new() -> Self {
        Self::starting_with(DEFAULT_LANGUAGE, DEFAULT_NORMALIZED)
    }

    pub fn starting_with(language: Language, normalized: bool) -> Self {
        Self {
            language,
            normalized,
        }
    }

    pub fn visit(&mut self, token: &Token) -> Token {
        match token.kind() {
            TokenKind::LanguageShift(shift) => {
                let (language, normalized) = Language::of_shift(shift);
                if language != Language::Unknown {
                    self.language = language;
                    self.normalized = normalized;
                }
                token.clone()
            }
            TokenKind::Word(word) => token.with_kind(TokenKind::Word(
                word.clone().with_language(self.language, self.normalized),
            )),
            TokenKind::LoneDeterminative(word) => token.with_kind(TokenKind::LoneDeterminative(
                word.clone().with_language(self.language, self.normalized),
            )),
            TokenKind::GreekWord(word) => token.with_kind(TokenKind::GreekWord(
                word.clone().with_language(self.language, false),
            )),
            _ => token.clone(),
        }
    }
}

impl Default for LanguageVisitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamp every word of a token sequence with its language
pub fn set_language(tokens: &[Token]) -> Vec<Token> {
    let mut visitor = LanguageVisitor::new();
    tokens.iter().map(|token| visitor.visit(token)).collect()
}

/// Stamp every word with a fixed language, as language-tagged markup does
pub fn set_fixed_language(tokens: &[Token], language: Language) -> Vec<Token> {
    let mut visitor = LanguageVisitor::starting_with(language, false);
    tokens.iter().map(|token| visitor.visit(token)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::tokens::Word;

    fn word(name: &str) -> Token {
        Token::word(vec![Token::reading(name, Some(1))])
    }

    fn language_of(token: &Token) -> (Language, bool) {
        match token.kind() {
            TokenKind::Word(word) => (word.language(), word.normalized()),
            _ => panic!("expected a word, got {:?}", token),
        }
    }

    #[test]
    fn test_shift_resolution() {
        assert_eq!(Language::of_shift("%sux"), (Language::Sumerian, false));
        assert_eq!(Language::of_shift("%es"), (Language::Emesal, false));
        assert_eq!(Language::of_shift("%n"), (Language::Akkadian, true));
        assert_eq!(Language::of_shift("%ob"), (Language::Akkadian, false));
        assert_eq!(Language::of_shift("%foo"), (Language::Unknown, false));
        assert_eq!(Language::of_shift("%grc"), (Language::Greek, false));
        assert_eq!(Language::of_shift("%akkgrc"), (Language::Akkadian, false));
        assert_eq!(Language::of_shift("%suxgrc"), (Language::Sumerian, false));
        assert_eq!(Language::of_shift("%ngrc"), (Language::Unknown, false));
    }

    #[test]
    fn test_greek_words_follow_the_preceding_shift() {
        let alpha = Token::greek_word(vec![Token::greek_letter('α', vec![])]);
        let tokens = vec![Token::language_shift("%suxgrc"), alpha];
        let result = set_language(&tokens);
        match result[1].kind() {
            TokenKind::GreekWord(word) => assert_eq!(word.language(), Language::Sumerian),
            other => panic!("expected a Greek word, got {:?}", other),
        }
    }

    #[test]
    fn test_words_follow_the_preceding_shift() {
        let tokens = vec![
            word("kur"),
            Token::language_shift("%sux"),
            word("lugal"),
            Token::language_shift("%foo"),
            word("e"),
            Token::language_shift("%n"),
            word("šarru"),
        ];

        let result = set_language(&tokens);

        assert_eq!(language_of(&result[0]), (Language::Akkadian, false));
        assert_eq!(language_of(&result[2]), (Language::Sumerian, false));
        assert_eq!(language_of(&result[4]), (Language::Sumerian, false));
        assert_eq!(language_of(&result[6]), (Language::Akkadian, true));
        assert_eq!(result[1], tokens[1]);
    }

    #[test]
    fn test_lemmatizable_languages() {
        assert!(Language::Akkadian.lemmatizable());
        assert!(Language::Unknown.lemmatizable());
        assert!(!Language::Sumerian.lemmatizable());
        assert!(!Language::Greek.lemmatizable());
        assert_eq!(Word::of(vec![]).language(), Language::Akkadian);
    }
}
