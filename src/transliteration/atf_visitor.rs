//! Canonical ATF rendering of token sequences
//!
//! Tokens are joined by single spaces, except that an opening enclosure attaches to what
//! follows it and a closing enclosure to what precedes it. Dividers, shifts and commentary
//! protocols always stand apart.

use super::atf::{CommentaryProtocol, Side, WORD_SEPARATOR};
use super::enclosure::EnclosureType;
use super::tokens::{Divider, Token, TokenVisitor, Word};

pub struct AtfVisitor {
    parts: Vec<String>,
    force_separator: bool,
    omit_separator: bool,
}

impl AtfVisitor {
    pub fn new(prefix: &str) -> Self {
        Self {
            parts: vec![prefix.to_string()],
            force_separator: true,
            omit_separator: false,
        }
    }

    pub fn result(self) -> String {
        self.parts.concat()
    }

    fn append_separator(&mut self) {
        self.parts.push(WORD_SEPARATOR.to_string());
    }

    fn set_omit(&mut self, omit: bool) {
        self.omit_separator = omit;
        self.force_separator = false;
    }

    fn set_force(&mut self) {
        self.omit_separator = false;
        self.force_separator = true;
    }
}

impl TokenVisitor for AtfVisitor {
    fn visit_token(&mut self, token: &Token) {
        if self.force_separator || !self.omit_separator {
            self.append_separator();
        }
        self.parts.push(token.value());
        self.set_omit(false);
    }

    fn visit_word(&mut self, token: &Token, _word: &Word) {
        if !self.omit_separator {
            self.append_separator();
        }
        self.parts.push(token.value());
        self.set_omit(false);
    }

    fn visit_language_shift(&mut self, token: &Token) {
        self.append_separator();
        self.parts.push(token.value());
        self.set_force();
    }

    fn visit_divider(&mut self, token: &Token, _divider: &Divider) {
        self.append_separator();
        self.parts.push(token.value());
        self.set_force();
    }

    fn visit_commentary_protocol(&mut self, token: &Token, _protocol: CommentaryProtocol) {
        self.append_separator();
        self.parts.push(token.value());
        self.set_force();
    }

    fn visit_enclosure(&mut self, token: &Token, _enclosure: EnclosureType, side: Side) {
        match side {
            Side::Right => {
                if self.force_separator {
                    self.append_separator();
                }
                self.parts.push(token.value());
                self.set_omit(false);
            }
            _ => {
                if !self.omit_separator {
                    self.append_separator();
                }
                self.parts.push(token.value());
                self.set_omit(true);
            }
        }
    }

    fn visit_erasure(&mut self, token: &Token, side: Side) {
        match side {
            Side::Left => {
                self.append_separator();
                self.parts.push(token.value());
                self.set_omit(true);
            }
            Side::Center => {
                self.parts.push(token.value());
                self.set_omit(true);
            }
            Side::Right => {
                self.parts.push(token.value());
                self.set_force();
            }
        }
    }
}

/// Render tokens after `prefix`; without a prefix the leading separator is dropped
pub fn convert_to_atf(prefix: Option<&str>, tokens: &[Token]) -> String {
    let mut visitor = AtfVisitor::new(prefix.unwrap_or(""));
    for token in tokens {
        token.accept(&mut visitor);
    }
    let atf = visitor.result();
    match prefix {
        Some(_) => atf,
        None => atf.trim_start().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::tokens::Joiner;

    fn word(name: &str) -> Token {
        Token::word(vec![Token::reading(name, Some(1))])
    }

    #[test]
    fn test_words_are_separated() {
        let tokens = vec![word("šu"), word("gid"), Token::divider("|"), word("kur")];
        assert_eq!(convert_to_atf(Some("1."), &tokens), "1. šu gid | kur");
    }

    #[test]
    fn test_enclosures_attach_inward() {
        let tokens = vec![
            Token::broken_away(Side::Left),
            Token::unknown_number_of_signs(),
            Token::broken_away(Side::Right),
            word("ra"),
            Token::accidental_omission(Side::Left),
            word("ku"),
            Token::accidental_omission(Side::Right),
        ];
        assert_eq!(convert_to_atf(None, &tokens), "[...] ra <ku>");
    }

    #[test]
    fn test_standalone_brackets_keep_spaces() {
        let tokens = vec![
            Token::broken_away(Side::Left),
            Token::divider("|"),
            Token::broken_away(Side::Right),
        ];
        assert_eq!(convert_to_atf(Some("1."), &tokens), "1. [ | ]");
    }

    #[test]
    fn test_erasure() {
        let tokens = vec![
            word("a"),
            Token::erasure(Side::Left),
            word("er"),
            Token::erasure(Side::Center),
            Token::word(vec![
                Token::reading("o", Some(1)),
                Token::joiner(Joiner::Hyphen),
                Token::reading("ver", Some(1)),
            ]),
            Token::erasure(Side::Right),
            word("b"),
        ];
        assert_eq!(convert_to_atf(None, &tokens), "a °er\\o-ver° b");
    }
}
