//! Enclosures: validation and tagging
//!
//! Six bracket kinds can enclose parts of a text line. [`validate`] checks that they are
//! balanced and nested legally; [`tag_enclosures`] records on every token the set of
//! kinds it sits inside. Validation rejects, tagging never fails.

use std::collections::BTreeSet;

use serde::Serialize;

use super::atf::Side;
use super::error::EnclosureError;
use super::tokens::{Token, TokenKind, TokenVisitor, Variant, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnclosureType {
    AccidentalOmission,
    IntentionalOmission,
    Removal,
    BrokenAway,
    PerhapsBrokenAway,
    DocumentOrientedGloss,
}

/// The enclosure kinds a token is nested inside
pub type EnclosureSet = BTreeSet<EnclosureType>;

impl EnclosureType {
    pub fn marker(self, side: Side) -> &'static str {
        match (self, side) {
            (EnclosureType::AccidentalOmission, Side::Right) => ">",
            (EnclosureType::AccidentalOmission, _) => "<",
            (EnclosureType::IntentionalOmission, Side::Right) => ")>",
            (EnclosureType::IntentionalOmission, _) => "<(",
            (EnclosureType::Removal, Side::Right) => ">>",
            (EnclosureType::Removal, _) => "<<",
            (EnclosureType::BrokenAway, Side::Right) => "]",
            (EnclosureType::BrokenAway, _) => "[",
            (EnclosureType::PerhapsBrokenAway, Side::Right) => ")",
            (EnclosureType::PerhapsBrokenAway, _) => "(",
            (EnclosureType::DocumentOrientedGloss, Side::Right) => ")}",
            (EnclosureType::DocumentOrientedGloss, _) => "{(",
        }
    }

    /// Kinds this kind may not be opened inside of
    pub fn forbidden(self) -> &'static [EnclosureType] {
        use EnclosureType::*;
        match self {
            AccidentalOmission => &[AccidentalOmission, IntentionalOmission],
            IntentionalOmission => &[IntentionalOmission, AccidentalOmission],
            Removal => &[Removal],
            BrokenAway => &[BrokenAway, PerhapsBrokenAway],
            PerhapsBrokenAway => &[PerhapsBrokenAway, AccidentalOmission, IntentionalOmission],
            DocumentOrientedGloss => &[DocumentOrientedGloss],
        }
    }

    /// Kinds that must be open before this kind can be opened
    pub fn required(self) -> &'static [EnclosureType] {
        match self {
            EnclosureType::PerhapsBrokenAway => &[EnclosureType::BrokenAway],
            _ => &[],
        }
    }
}

/// Stack machine over the enclosure markers of a token sequence
#[derive(Debug, Clone, Default)]
pub struct EnclosureValidator {
    stack: Vec<EnclosureType>,
    failed: bool,
}

impl EnclosureValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn open(&mut self, enclosure: EnclosureType) {
        let conflicts = enclosure
            .forbidden()
            .iter()
            .any(|forbidden| self.stack.contains(forbidden));
        let missing = enclosure
            .required()
            .iter()
            .any(|required| !self.stack.contains(required));
        if conflicts || missing {
            self.failed = true;
        } else {
            self.stack.push(enclosure);
        }
    }

    fn close(&mut self, enclosure: EnclosureType) {
        if self.stack.last() == Some(&enclosure) {
            self.stack.pop();
        } else {
            self.failed = true;
        }
    }

    fn visit_all(&mut self, tokens: &[Token]) {
        for token in tokens {
            if self.failed {
                return;
            }
            token.accept(self);
        }
    }

    /// Accept once every token has been visited and nothing is left open
    pub fn done(&self) -> Result<(), EnclosureError> {
        if self.failed || !self.stack.is_empty() {
            Err(EnclosureError)
        } else {
            Ok(())
        }
    }
}

impl TokenVisitor for EnclosureValidator {
    fn visit_token(&mut self, token: &Token) {
        let parts: Vec<Token> = token.parts().into_iter().cloned().collect();
        self.visit_all(&parts);
    }

    fn visit_word(&mut self, _token: &Token, word: &Word) {
        self.visit_all(word.parts());
    }

    fn visit_gloss(&mut self, _token: &Token, parts: &[Token]) {
        self.visit_all(parts);
    }

    fn visit_variant(&mut self, _token: &Token, variant: &Variant) {
        let results: Vec<EnclosureValidator> = variant
            .tokens()
            .iter()
            .map(|alternative| {
                let mut validator = self.clone();
                alternative.accept(&mut validator);
                validator
            })
            .collect();
        let consistent = results
            .windows(2)
            .all(|pair| pair[0].stack == pair[1].stack);
        match results.into_iter().next() {
            Some(first) if consistent => *self = first,
            _ => self.failed = true,
        }
    }

    fn visit_enclosure(&mut self, _token: &Token, enclosure: EnclosureType, side: Side) {
        match side {
            Side::Right => self.close(enclosure),
            _ => self.open(enclosure),
        }
    }
}

/// Check that the enclosures of a token sequence are balanced and legally nested
pub fn validate(tokens: &[Token]) -> Result<(), EnclosureError> {
    let mut validator = EnclosureValidator::new();
    validator.visit_all(tokens);
    validator.done()
}

/// Running set of open enclosures used while tagging
#[derive(Debug, Clone, Default)]
struct EnclosureTagger {
    open: EnclosureSet,
}

impl EnclosureTagger {
    fn tag_all(&mut self, tokens: &[Token]) -> Vec<Token> {
        tokens.iter().map(|token| self.tag(token)).collect()
    }

    fn tag(&mut self, token: &Token) -> Token {
        if let Some((enclosure, side)) = token.enclosure_marker() {
            return match side {
                Side::Right => {
                    self.open.remove(&enclosure);
                    token.clone().with_enclosure_type(self.open.clone())
                }
                _ => {
                    let tagged = token.clone().with_enclosure_type(self.open.clone());
                    self.open.insert(enclosure);
                    tagged
                }
            };
        }

        let outer = self.open.clone();
        let kind = match token.kind() {
            TokenKind::Word(word) => {
                TokenKind::Word(word.clone().with_parts(self.tag_all(word.parts())))
            }
            TokenKind::LoneDeterminative(word) => {
                TokenKind::LoneDeterminative(word.clone().with_parts(self.tag_all(word.parts())))
            }
            TokenKind::GreekWord(word) => {
                TokenKind::GreekWord(word.clone().with_parts(self.tag_all(word.parts())))
            }
            TokenKind::Reading(sign) => {
                TokenKind::Reading(sign.clone().with_name_parts(self.tag_all(sign.name_parts())))
            }
            TokenKind::Logogram(sign) => {
                TokenKind::Logogram(sign.clone().with_name_parts(self.tag_all(sign.name_parts())))
            }
            TokenKind::Number(sign) => {
                TokenKind::Number(sign.clone().with_name_parts(self.tag_all(sign.name_parts())))
            }
            TokenKind::Determinative(parts) => TokenKind::Determinative(self.tag_all(parts)),
            TokenKind::PhoneticGloss(parts) => TokenKind::PhoneticGloss(self.tag_all(parts)),
            TokenKind::LinguisticGloss(parts) => TokenKind::LinguisticGloss(self.tag_all(parts)),
            TokenKind::Variant(variant) => {
                let start = self.open.clone();
                let mut end = None;
                let tagged = variant.map_tokens(|alternative| {
                    let mut tagger = EnclosureTagger {
                        open: start.clone(),
                    };
                    let tagged = tagger.tag(alternative);
                    end.get_or_insert(tagger.open);
                    tagged
                });
                if let Some(end) = end {
                    self.open = end;
                }
                TokenKind::Variant(tagged)
            }
            other => other.clone(),
        };
        token.with_kind(kind).with_enclosure_type(outer)
    }
}

/// Record on every token, recursively, the enclosures open at its position
pub fn tag_enclosures(tokens: &[Token]) -> Vec<Token> {
    EnclosureTagger::default().tag_all(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::tokens::Joiner;

    fn unknown() -> Token {
        Token::unknown_number_of_signs()
    }

    fn enclosed(left: Token, inner: Vec<Token>, right: Token) -> Vec<Token> {
        let mut tokens = vec![left];
        tokens.extend(inner);
        tokens.push(right);
        tokens
    }

    #[test]
    fn test_accepts_balanced() {
        let broken = enclosed(
            Token::broken_away(Side::Left),
            vec![unknown()],
            Token::broken_away(Side::Right),
        );
        assert_eq!(validate(&broken), Ok(()));

        let perhaps = enclosed(
            Token::broken_away(Side::Left),
            enclosed(
                Token::perhaps_broken_away(Side::Left),
                vec![unknown()],
                Token::perhaps_broken_away(Side::Right),
            ),
            Token::broken_away(Side::Right),
        );
        assert_eq!(validate(&perhaps), Ok(()));
    }

    #[test]
    fn test_rejects_unbalanced_and_illegal_nesting() {
        assert_eq!(
            validate(&[Token::broken_away(Side::Left), unknown()]),
            Err(EnclosureError)
        );
        assert_eq!(
            validate(&[unknown(), Token::broken_away(Side::Right)]),
            Err(EnclosureError)
        );
        let bare_perhaps = enclosed(
            Token::perhaps_broken_away(Side::Left),
            vec![unknown()],
            Token::perhaps_broken_away(Side::Right),
        );
        assert_eq!(validate(&bare_perhaps), Err(EnclosureError));
        let crossed = vec![
            Token::broken_away(Side::Left),
            Token::accidental_omission(Side::Left),
            Token::broken_away(Side::Right),
            Token::accidental_omission(Side::Right),
        ];
        assert_eq!(validate(&crossed), Err(EnclosureError));
    }

    #[test]
    fn test_validates_inside_words() {
        let word = Token::word(vec![
            Token::broken_away(Side::Left),
            Token::reading("kur", Some(1)),
            Token::joiner(Joiner::Hyphen),
            Token::reading("ra", Some(1)),
        ]);
        assert_eq!(validate(&[word.clone()]), Err(EnclosureError));
        assert_eq!(
            validate(&[word, Token::broken_away(Side::Right)]),
            Ok(())
        );
    }

    #[test]
    fn test_tagging_marks_enclosed_tokens() {
        let tokens = vec![
            Token::broken_away(Side::Left),
            Token::word(vec![Token::reading("kur", Some(1))]),
            Token::broken_away(Side::Right),
            Token::word(vec![Token::reading("ra", Some(1))]),
        ];
        let tagged = tag_enclosures(&tokens);
        let broken: EnclosureSet = [EnclosureType::BrokenAway].into_iter().collect();

        assert!(tagged[0].enclosure_type().is_empty());
        assert_eq!(tagged[1].enclosure_type(), &broken);
        assert_eq!(tagged[1].parts()[0].enclosure_type(), &broken);
        assert!(tagged[2].enclosure_type().is_empty());
        assert!(tagged[3].enclosure_type().is_empty());
    }
}
