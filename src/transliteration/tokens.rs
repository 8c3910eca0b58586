//! Token algebra
//!
//! A [`Token`] is one lexical unit of a text line. The set of variants is closed
//! ([`TokenKind`]); every consumer matches on it exhaustively or goes through
//! [`TokenVisitor`]. Tokens are immutable: tagging, language assignment and annotation
//! updates all return new tokens.
//!
//! Besides its kind every token records the enclosures it is nested in and its
//! erasure state.

mod sign;
mod visitor;
mod word;

pub use sign::{CompoundGrapheme, Divider, Grapheme, GreekLetter, NamedSign};
pub use visitor::TokenVisitor;
pub use word::Word;

use serde::Serialize;

use super::annotation::{AlignmentToken, LemmatizationToken};
use super::atf::{self, CommentaryProtocol, ErasureState, Flag, Side};
use super::enclosure::{EnclosureSet, EnclosureType};
use super::error::{AlignmentError, LemmatizationError, ValueError};
use super::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Joiner {
    Hyphen,
    Dot,
    Plus,
    Colon,
}

impl Joiner {
    pub fn atf(self) -> &'static str {
        match self {
            Joiner::Hyphen => "-",
            Joiner::Dot => ".",
            Joiner::Plus => "+",
            Joiner::Colon => ":",
        }
    }

    pub fn from_atf(joiner: &str) -> Option<Joiner> {
        match joiner {
            "-" => Some(Joiner::Hyphen),
            "." => Some(Joiner::Dot),
            "+" => Some(Joiner::Plus),
            ":" => Some(Joiner::Colon),
            _ => None,
        }
    }
}

/// Alternative readings of one position, written `a/b`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    tokens: Vec<Token>,
}

impl Variant {
    /// Build a variant; nested variants and splittable compounds are rejected
    pub fn of(tokens: Vec<Token>) -> Result<Self, ValueError> {
        for token in &tokens {
            match token.kind() {
                TokenKind::Variant(_) => return Err(ValueError::NestedVariant),
                TokenKind::CompoundGrapheme(grapheme) if grapheme.is_splittable() => {
                    return Err(ValueError::SplittableInVariant)
                }
                _ => {}
            }
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Rebuild the variant with each alternative mapped; the kinds must not change
    pub(crate) fn map_tokens(&self, f: impl FnMut(&Token) -> Token) -> Self {
        Self {
            tokens: self.tokens.iter().map(f).collect(),
        }
    }
}

/// The closed set of token variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// Plain text, used for the characters of sign names
    ValueToken(String),
    Word(Word),
    LoneDeterminative(Word),
    /// Greek letters, written after a `%grc` shift
    GreekWord(Word),
    GreekLetter(GreekLetter),
    Reading(NamedSign),
    Logogram(NamedSign),
    Number(NamedSign),
    Grapheme(Grapheme),
    CompoundGrapheme(CompoundGrapheme),
    UnclearSign(Vec<Flag>),
    UnidentifiedSign(Vec<Flag>),
    Joiner(Joiner),
    /// `;` inside a word: the word continues on the next line of the tablet
    InWordNewline,
    Divider(Divider),
    LanguageShift(String),
    CommentaryProtocol(CommentaryProtocol),
    Tabulation,
    Column(Option<u32>),
    UnknownNumberOfSigns,
    Variant(Variant),
    Determinative(Vec<Token>),
    PhoneticGloss(Vec<Token>),
    LinguisticGloss(Vec<Token>),
    BrokenAway(Side),
    PerhapsBrokenAway(Side),
    AccidentalOmission(Side),
    IntentionalOmission(Side),
    Removal(Side),
    DocumentOrientedGloss(Side),
    Erasure(Side),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    enclosure_type: EnclosureSet,
    erasure: ErasureState,
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token::new(kind)
    }
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            enclosure_type: EnclosureSet::new(),
            erasure: ErasureState::None,
        }
    }

    pub fn value_token(value: impl Into<String>) -> Self {
        Token::new(TokenKind::ValueToken(value.into()))
    }

    pub fn reading(name: &str, sub_index: Option<u32>) -> Self {
        Token::new(TokenKind::Reading(NamedSign::of_name(name, sub_index)))
    }

    pub fn logogram(name: &str, sub_index: Option<u32>) -> Self {
        Token::new(TokenKind::Logogram(NamedSign::of_name(name, sub_index)))
    }

    pub fn number(name: &str) -> Self {
        Token::new(TokenKind::Number(NamedSign::of_name(name, Some(1))))
    }

    pub fn word(parts: Vec<Token>) -> Self {
        Token::new(TokenKind::Word(Word::of(parts)))
    }

    pub fn lone_determinative(parts: Vec<Token>) -> Self {
        Token::new(TokenKind::LoneDeterminative(Word::of(parts)))
    }

    pub fn greek_word(parts: Vec<Token>) -> Self {
        Token::new(TokenKind::GreekWord(
            Word::of(parts).with_language(Language::Greek, false),
        ))
    }

    pub fn greek_letter(letter: char, flags: Vec<Flag>) -> Self {
        Token::new(TokenKind::GreekLetter(GreekLetter::new(letter, flags)))
    }

    pub fn joiner(joiner: Joiner) -> Self {
        Token::new(TokenKind::Joiner(joiner))
    }

    pub fn divider(divider: &str) -> Self {
        Token::new(TokenKind::Divider(Divider::of(divider)))
    }

    pub fn language_shift(shift: &str) -> Self {
        Token::new(TokenKind::LanguageShift(shift.to_string()))
    }

    pub fn unknown_number_of_signs() -> Self {
        Token::new(TokenKind::UnknownNumberOfSigns)
    }

    pub fn unclear_sign(flags: Vec<Flag>) -> Self {
        Token::new(TokenKind::UnclearSign(flags))
    }

    pub fn unidentified_sign(flags: Vec<Flag>) -> Self {
        Token::new(TokenKind::UnidentifiedSign(flags))
    }

    pub fn determinative(parts: Vec<Token>) -> Self {
        Token::new(TokenKind::Determinative(parts))
    }

    pub fn compound_grapheme(parts: &[&str]) -> Self {
        Token::new(TokenKind::CompoundGrapheme(CompoundGrapheme::of(
            parts.iter().map(|part| part.to_string()).collect(),
        )))
    }

    pub fn variant(tokens: Vec<Token>) -> Result<Self, ValueError> {
        Ok(Token::new(TokenKind::Variant(Variant::of(tokens)?)))
    }

    pub fn broken_away(side: Side) -> Self {
        Token::new(TokenKind::BrokenAway(side))
    }

    pub fn perhaps_broken_away(side: Side) -> Self {
        Token::new(TokenKind::PerhapsBrokenAway(side))
    }

    pub fn accidental_omission(side: Side) -> Self {
        Token::new(TokenKind::AccidentalOmission(side))
    }

    pub fn intentional_omission(side: Side) -> Self {
        Token::new(TokenKind::IntentionalOmission(side))
    }

    pub fn removal(side: Side) -> Self {
        Token::new(TokenKind::Removal(side))
    }

    pub fn document_oriented_gloss(side: Side) -> Self {
        Token::new(TokenKind::DocumentOrientedGloss(side))
    }

    pub fn erasure(side: Side) -> Self {
        Token::new(TokenKind::Erasure(side))
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn enclosure_type(&self) -> &EnclosureSet {
        &self.enclosure_type
    }

    pub fn erasure_state(&self) -> ErasureState {
        self.erasure
    }

    /// Same metadata, different kind
    pub(crate) fn with_kind(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            enclosure_type: self.enclosure_type.clone(),
            erasure: self.erasure,
        }
    }

    pub fn with_enclosure_type(self, enclosure_type: EnclosureSet) -> Token {
        Token {
            enclosure_type,
            ..self
        }
    }

    pub fn with_erasure(self, erasure: ErasureState) -> Token {
        Token { erasure, ..self }
    }

    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            TokenKind::ValueToken(_) => "ValueToken",
            TokenKind::Word(_) => "Word",
            TokenKind::LoneDeterminative(_) => "LoneDeterminative",
            TokenKind::GreekWord(_) => "GreekWord",
            TokenKind::GreekLetter(_) => "GreekLetter",
            TokenKind::Reading(_) => "Reading",
            TokenKind::Logogram(_) => "Logogram",
            TokenKind::Number(_) => "Number",
            TokenKind::Grapheme(_) => "Grapheme",
            TokenKind::CompoundGrapheme(_) => "CompoundGrapheme",
            TokenKind::UnclearSign(_) => "UnclearSign",
            TokenKind::UnidentifiedSign(_) => "UnidentifiedSign",
            TokenKind::Joiner(_) => "Joiner",
            TokenKind::InWordNewline => "InWordNewline",
            TokenKind::Divider(_) => "Divider",
            TokenKind::LanguageShift(_) => "LanguageShift",
            TokenKind::CommentaryProtocol(_) => "CommentaryProtocol",
            TokenKind::Tabulation => "Tabulation",
            TokenKind::Column(_) => "Column",
            TokenKind::UnknownNumberOfSigns => "UnknownNumberOfSigns",
            TokenKind::Variant(_) => "Variant",
            TokenKind::Determinative(_) => "Determinative",
            TokenKind::PhoneticGloss(_) => "PhoneticGloss",
            TokenKind::LinguisticGloss(_) => "LinguisticGloss",
            TokenKind::BrokenAway(_) => "BrokenAway",
            TokenKind::PerhapsBrokenAway(_) => "PerhapsBrokenAway",
            TokenKind::AccidentalOmission(_) => "AccidentalOmission",
            TokenKind::IntentionalOmission(_) => "IntentionalOmission",
            TokenKind::Removal(_) => "Removal",
            TokenKind::DocumentOrientedGloss(_) => "DocumentOrientedGloss",
            TokenKind::Erasure(_) => "Erasure",
        }
    }

    /// The canonical ATF rendering of the token
    pub fn value(&self) -> String {
        match &self.kind {
            TokenKind::ValueToken(value) => value.clone(),
            TokenKind::Word(word)
            | TokenKind::LoneDeterminative(word)
            | TokenKind::GreekWord(word) => word.value(),
            TokenKind::GreekLetter(letter) => letter.value(),
            TokenKind::Reading(sign) | TokenKind::Logogram(sign) | TokenKind::Number(sign) => {
                sign.value()
            }
            TokenKind::Grapheme(grapheme) => grapheme.value(),
            TokenKind::CompoundGrapheme(grapheme) => grapheme.value(),
            TokenKind::UnclearSign(flags) => format!("{}{}", atf::UNCLEAR_SIGN, atf::flags_atf(flags)),
            TokenKind::UnidentifiedSign(flags) => {
                format!("{}{}", atf::UNIDENTIFIED_SIGN, atf::flags_atf(flags))
            }
            TokenKind::Joiner(joiner) => joiner.atf().to_string(),
            TokenKind::InWordNewline => atf::IN_WORD_NEWLINE.to_string(),
            TokenKind::Divider(divider) => divider.value(),
            TokenKind::LanguageShift(shift) => shift.clone(),
            TokenKind::CommentaryProtocol(protocol) => protocol.atf().to_string(),
            TokenKind::Tabulation => atf::TABULATION.to_string(),
            TokenKind::Column(None) => "&".to_string(),
            TokenKind::Column(Some(number)) => format!("&{}", number),
            TokenKind::UnknownNumberOfSigns => atf::UNKNOWN_NUMBER_OF_SIGNS.to_string(),
            TokenKind::Variant(variant) => variant
                .tokens()
                .iter()
                .map(Token::value)
                .collect::<Vec<_>>()
                .join(atf::VARIANT_SEPARATOR),
            TokenKind::Determinative(parts) => format!("{{{}}}", concat_values(parts)),
            TokenKind::PhoneticGloss(parts) => format!("{{+{}}}", concat_values(parts)),
            TokenKind::LinguisticGloss(parts) => format!("{{{{{}}}}}", concat_values(parts)),
            TokenKind::Erasure(side) => match side {
                Side::Center => "\\".to_string(),
                _ => "°".to_string(),
            },
            TokenKind::BrokenAway(_)
            | TokenKind::PerhapsBrokenAway(_)
            | TokenKind::AccidentalOmission(_)
            | TokenKind::IntentionalOmission(_)
            | TokenKind::Removal(_)
            | TokenKind::DocumentOrientedGloss(_) => self
                .enclosure_marker()
                .map(|(enclosure, side)| enclosure.marker(side).to_string())
                .unwrap_or_default(),
        }
    }

    /// The value without flags and enclosure markers
    pub fn clean_value(&self) -> String {
        match &self.kind {
            TokenKind::Word(word)
            | TokenKind::LoneDeterminative(word)
            | TokenKind::GreekWord(word) => word.clean_value(),
            TokenKind::GreekLetter(letter) => letter.clean_value(),
            TokenKind::Reading(sign) | TokenKind::Logogram(sign) | TokenKind::Number(sign) => {
                sign.clean_value()
            }
            TokenKind::Grapheme(grapheme) => grapheme.clean_value(),
            TokenKind::CompoundGrapheme(grapheme) => grapheme.clean_value(),
            TokenKind::UnclearSign(_) => atf::UNCLEAR_SIGN.to_string(),
            TokenKind::UnidentifiedSign(_) => atf::UNIDENTIFIED_SIGN.to_string(),
            TokenKind::Divider(divider) => divider.clean_value(),
            TokenKind::Variant(variant) => variant
                .tokens()
                .iter()
                .map(Token::clean_value)
                .collect::<Vec<_>>()
                .join(atf::VARIANT_SEPARATOR),
            TokenKind::Determinative(parts) => format!("{{{}}}", concat_clean_values(parts)),
            TokenKind::PhoneticGloss(parts) => format!("{{+{}}}", concat_clean_values(parts)),
            TokenKind::LinguisticGloss(parts) => {
                format!("{{{{{}}}}}", concat_clean_values(parts))
            }
            TokenKind::Erasure(_) => String::new(),
            _ if self.enclosure_marker().is_some() => String::new(),
            _ => self.value(),
        }
    }

    /// Sub-tokens, in order
    pub fn parts(&self) -> Vec<&Token> {
        match &self.kind {
            TokenKind::Word(word)
            | TokenKind::LoneDeterminative(word)
            | TokenKind::GreekWord(word) => word.parts().iter().collect(),
            TokenKind::Reading(sign) | TokenKind::Logogram(sign) | TokenKind::Number(sign) => {
                sign.name_parts().iter().chain(sign.sign()).collect()
            }
            TokenKind::Variant(variant) => variant.tokens().iter().collect(),
            TokenKind::Determinative(parts)
            | TokenKind::PhoneticGloss(parts)
            | TokenKind::LinguisticGloss(parts) => parts.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Stable key used to match tokens when merging
    pub fn key(&self) -> String {
        let parts = self.parts();
        let key = format!("{}⁝{}", self.type_name(), self.value());
        if parts.is_empty() {
            key
        } else {
            let part_keys: Vec<String> = parts.iter().map(|part| part.key()).collect();
            format!("{}⟨{}⟩", key, part_keys.join("⁚"))
        }
    }

    /// The enclosure kind and side of an enclosure marker
    pub fn enclosure_marker(&self) -> Option<(EnclosureType, Side)> {
        match self.kind {
            TokenKind::BrokenAway(side) => Some((EnclosureType::BrokenAway, side)),
            TokenKind::PerhapsBrokenAway(side) => Some((EnclosureType::PerhapsBrokenAway, side)),
            TokenKind::AccidentalOmission(side) => {
                Some((EnclosureType::AccidentalOmission, side))
            }
            TokenKind::IntentionalOmission(side) => {
                Some((EnclosureType::IntentionalOmission, side))
            }
            TokenKind::Removal(side) => Some((EnclosureType::Removal, side)),
            TokenKind::DocumentOrientedGloss(side) => {
                Some((EnclosureType::DocumentOrientedGloss, side))
            }
            _ => None,
        }
    }

    /// Words, lone determinatives and Greek words
    pub fn as_word(&self) -> Option<&Word> {
        match &self.kind {
            TokenKind::Word(word)
            | TokenKind::LoneDeterminative(word)
            | TokenKind::GreekWord(word) => Some(word),
            _ => None,
        }
    }

    pub fn is_word_like(&self) -> bool {
        self.as_word().is_some()
    }

    pub fn lemmatizable(&self) -> bool {
        match &self.kind {
            TokenKind::Word(word) | TokenKind::GreekWord(word) => {
                word.language().lemmatizable()
                    && self.erasure != ErasureState::Erased
                    && !word.has_unlemmatizable_part()
            }
            _ => false,
        }
    }

    pub fn alignable(&self) -> bool {
        self.lemmatizable()
    }

    pub fn unique_lemma(&self) -> &[String] {
        self.as_word().map(Word::unique_lemma).unwrap_or(&[])
    }

    pub fn alignment(&self) -> Option<usize> {
        self.as_word().and_then(Word::alignment)
    }

    fn map_word(&self, f: impl FnOnce(Word) -> Word) -> Token {
        match &self.kind {
            TokenKind::Word(word) => self.with_kind(TokenKind::Word(f(word.clone()))),
            TokenKind::LoneDeterminative(word) => {
                self.with_kind(TokenKind::LoneDeterminative(f(word.clone())))
            }
            TokenKind::GreekWord(word) => self.with_kind(TokenKind::GreekWord(f(word.clone()))),
            _ => self.clone(),
        }
    }

    /// Apply a lemma; the update must name this token's value
    pub fn set_unique_lemma(&self, update: &LemmatizationToken) -> Result<Token, LemmatizationError> {
        let lemma = update.unique_lemma.clone().unwrap_or_default();
        let value_matches = update.value == self.value();
        let compatible = if self.is_word_like() {
            value_matches && (self.lemmatizable() || lemma.is_empty())
        } else {
            value_matches && lemma.is_empty()
        };
        if !compatible {
            return Err(LemmatizationError::Incompatible {
                value: self.value(),
                update: update.value.clone(),
                lemma,
            });
        }
        Ok(self.map_word(|word| word.with_unique_lemma(lemma)))
    }

    /// Apply an alignment; the update must name this token's value
    pub fn set_alignment(&self, update: &AlignmentToken) -> Result<Token, AlignmentError> {
        let value_matches = update.value == self.value();
        let empty = update.alignment.is_none() && update.variant.is_none();
        let compatible = if self.is_word_like() {
            value_matches && (self.alignable() || empty)
        } else {
            value_matches && empty
        };
        if !compatible {
            return Err(AlignmentError::Incompatible {
                value: self.value(),
                update: update.value.clone(),
                alignment: update.alignment,
            });
        }
        Ok(self.map_word(|word| word.with_alignment(update.alignment, update.variant.clone())))
    }

    pub fn strip_alignment(&self) -> Token {
        self.map_word(|word| word.with_alignment(None, None))
    }

    /// Follow an alignment map; alignments without a target are dropped with their variant
    pub fn update_alignment(&self, alignment_map: &[Option<usize>]) -> Token {
        match self.alignment() {
            Some(alignment) => {
                let target = alignment_map.get(alignment).copied().flatten();
                self.map_word(|word| {
                    let variant = target.and(word.variant().cloned());
                    word.with_alignment(target, variant)
                })
            }
            None => self.clone(),
        }
    }

    /// Merge `self` (old) into `new`, keeping annotations of unchanged words
    pub fn merge(&self, new: &Token) -> Token {
        let same_type = std::mem::discriminant(&self.kind) == std::mem::discriminant(&new.kind);
        let (old_word, _) = match (self.as_word(), new.as_word()) {
            (Some(old_word), Some(new_word)) => (old_word, new_word),
            _ => return new.clone(),
        };
        if !same_type || self.clean_value() != new.clean_value() {
            return new.clone();
        }
        let mut result = new.clone();
        if new.lemmatizable() {
            let lemma = old_word.unique_lemma().to_vec();
            result = result.map_word(|word| word.with_unique_lemma(lemma));
        }
        if new.alignable() {
            let variant = old_word.variant().cloned();
            result = result.map_word(|word| word.with_alignment(old_word.alignment(), variant));
        }
        result
    }

    pub fn accept(&self, visitor: &mut dyn TokenVisitor) {
        match &self.kind {
            TokenKind::Word(word) | TokenKind::GreekWord(word) => visitor.visit_word(self, word),
            TokenKind::LoneDeterminative(word) => visitor.visit_lone_determinative(self, word),
            TokenKind::Reading(sign) | TokenKind::Logogram(sign) | TokenKind::Number(sign) => {
                visitor.visit_named_sign(self, sign)
            }
            TokenKind::Determinative(parts)
            | TokenKind::PhoneticGloss(parts)
            | TokenKind::LinguisticGloss(parts) => visitor.visit_gloss(self, parts),
            TokenKind::Variant(variant) => visitor.visit_variant(self, variant),
            TokenKind::LanguageShift(_) => visitor.visit_language_shift(self),
            TokenKind::Divider(divider) => visitor.visit_divider(self, divider),
            TokenKind::CommentaryProtocol(protocol) => {
                visitor.visit_commentary_protocol(self, *protocol)
            }
            TokenKind::Erasure(side) => visitor.visit_erasure(self, *side),
            TokenKind::BrokenAway(_)
            | TokenKind::PerhapsBrokenAway(_)
            | TokenKind::AccidentalOmission(_)
            | TokenKind::IntentionalOmission(_)
            | TokenKind::Removal(_)
            | TokenKind::DocumentOrientedGloss(_) => {
                if let Some((enclosure, side)) = self.enclosure_marker() {
                    visitor.visit_enclosure(self, enclosure, side)
                }
            }
            TokenKind::ValueToken(_)
            | TokenKind::Grapheme(_)
            | TokenKind::CompoundGrapheme(_)
            | TokenKind::UnclearSign(_)
            | TokenKind::UnidentifiedSign(_)
            | TokenKind::GreekLetter(_)
            | TokenKind::Joiner(_)
            | TokenKind::InWordNewline
            | TokenKind::Tabulation
            | TokenKind::Column(_)
            | TokenKind::UnknownNumberOfSigns => visitor.visit_token(self),
        }
    }
}

fn concat_values(tokens: &[Token]) -> String {
    tokens.iter().map(Token::value).collect()
}

fn concat_clean_values(tokens: &[Token]) -> String {
    tokens.iter().map(Token::clean_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kur_ra() -> Token {
        Token::word(vec![
            Token::reading("kur", Some(1)),
            Token::joiner(Joiner::Hyphen),
            Token::reading("ra", Some(1)),
        ])
    }

    #[test]
    fn test_word_value_and_key() {
        let word = kur_ra();
        assert_eq!(word.value(), "kur-ra");
        assert_eq!(
            word.key(),
            "Word⁝kur-ra⟨Reading⁝kur⟨ValueToken⁝kur⟩⁚Joiner⁝-⁚Reading⁝ra⟨ValueToken⁝ra⟩⟩"
        );
    }

    #[test]
    fn test_enclosure_marker_values() {
        assert_eq!(Token::broken_away(Side::Left).value(), "[");
        assert_eq!(Token::perhaps_broken_away(Side::Right).value(), ")");
        assert_eq!(Token::intentional_omission(Side::Left).value(), "<(");
        assert_eq!(Token::removal(Side::Right).value(), ">>");
        assert_eq!(Token::document_oriented_gloss(Side::Left).value(), "{(");
        assert_eq!(Token::erasure(Side::Center).value(), "\\");
        assert_eq!(Token::broken_away(Side::Left).clean_value(), "");
    }

    #[test]
    fn test_clean_value_strips_flags_and_brackets() {
        let sign = NamedSign::new(
            vec![
                Token::value_token("k"),
                Token::broken_away(Side::Left),
                Token::value_token("ur"),
            ],
            Some(2),
            vec![],
            vec![Flag::Damage],
            None,
        );
        let token = Token::new(TokenKind::Reading(sign));
        assert_eq!(token.value(), "k[ur₂#");
        assert_eq!(token.clean_value(), "kur₂");
    }

    #[test]
    fn test_variant_rejects_nesting() {
        let inner = Token::variant(vec![Token::reading("a", Some(1)), Token::reading("b", Some(1))])
            .unwrap();
        assert_eq!(
            Token::variant(vec![inner, Token::reading("c", Some(1))]),
            Err(ValueError::NestedVariant)
        );
        assert_eq!(
            Token::variant(vec![Token::compound_grapheme(&["BI", "IS"])]),
            Err(ValueError::SplittableInVariant)
        );
        assert!(Token::variant(vec![Token::compound_grapheme(&["ŠU×A"])]).is_ok());
    }

    #[test]
    fn test_lemmatizable_words() {
        assert!(kur_ra().lemmatizable());
        assert!(!Token::word(vec![Token::unclear_sign(vec![])]).lemmatizable());
        assert!(!kur_ra().with_erasure(ErasureState::Erased).lemmatizable());
        assert!(kur_ra().with_erasure(ErasureState::OverErased).lemmatizable());
        assert!(!Token::lone_determinative(vec![Token::determinative(vec![Token::reading(
            "d",
            Some(1)
        )])])
        .lemmatizable());

        let sumerian = match kur_ra().kind() {
            TokenKind::Word(word) => {
                Token::new(TokenKind::Word(word.clone().with_language(Language::Sumerian, false)))
            }
            _ => unreachable!(),
        };
        assert!(!sumerian.lemmatizable());
    }

    #[test]
    fn test_set_unique_lemma() {
        let word = kur_ra();
        let update = LemmatizationToken::new("kur-ra", Some(vec!["kur I".to_string()]));
        let lemmatized = word.set_unique_lemma(&update).unwrap();
        assert_eq!(lemmatized.unique_lemma(), ["kur I".to_string()]);

        let wrong_value = LemmatizationToken::new("kur", Some(vec!["kur I".to_string()]));
        assert!(word.set_unique_lemma(&wrong_value).is_err());

        let divider = Token::divider("|");
        assert_eq!(
            divider.set_unique_lemma(&LemmatizationToken::new("|", None)),
            Ok(divider.clone())
        );
        assert!(divider
            .set_unique_lemma(&LemmatizationToken::new("|", Some(vec!["x".to_string()])))
            .is_err());
    }

    #[test]
    fn test_set_alignment() {
        let word = kur_ra();
        let aligned = word
            .set_alignment(&AlignmentToken::new("kur-ra", Some(2), None))
            .unwrap();
        assert_eq!(aligned.alignment(), Some(2));

        let unclear = Token::word(vec![Token::unclear_sign(vec![])]);
        assert!(unclear
            .set_alignment(&AlignmentToken::new("x", Some(1), None))
            .is_err());
        assert!(unclear
            .set_alignment(&AlignmentToken::new("x", None, None))
            .is_ok());
    }

    #[test]
    fn test_merge_keeps_annotations_of_unchanged_words() {
        let old = kur_ra()
            .set_unique_lemma(&LemmatizationToken::new("kur-ra", Some(vec!["kurra I".into()])))
            .unwrap()
            .set_alignment(&AlignmentToken::new("kur-ra", Some(1), None))
            .unwrap();
        let new = Token::word(vec![
            Token::reading("kur", Some(1)),
            Token::joiner(Joiner::Hyphen),
            Token::new(TokenKind::Reading(NamedSign::new(
                vec![Token::value_token("ra")],
                Some(1),
                vec![],
                vec![Flag::Uncertain],
                None,
            ))),
        ]);

        let merged = old.merge(&new);
        assert_eq!(merged.value(), "kur-ra?");
        assert_eq!(merged.unique_lemma(), ["kurra I".to_string()]);
        assert_eq!(merged.alignment(), Some(1));

        let different = Token::word(vec![Token::reading("ra", Some(1))]);
        assert_eq!(old.merge(&different), different);
    }

    #[test]
    fn test_greek_word() {
        let word = Token::greek_word(vec![
            Token::greek_letter('α', vec![Flag::Damage]),
            Token::greek_letter('β', vec![]),
        ]);
        assert_eq!(word.value(), "α#β");
        assert_eq!(word.clean_value(), "αβ");
        assert_eq!(word.type_name(), "GreekWord");
        assert_eq!(word.parts()[0].key(), "GreekLetter⁝α#");
        assert!(word.is_word_like());
        assert!(!word.lemmatizable());
    }

    #[test]
    fn test_in_word_newline() {
        let word = Token::word(vec![
            Token::reading("un", Some(1)),
            Token::new(TokenKind::InWordNewline),
            Token::joiner(Joiner::Hyphen),
            Token::reading("e", Some(3)),
        ]);
        assert_eq!(word.value(), "un;-e₃");
        assert!(word.lemmatizable());
    }

    #[test]
    fn test_update_alignment_follows_map() {
        let word = kur_ra()
            .set_alignment(&AlignmentToken::new("kur-ra", Some(1), None))
            .unwrap();
        assert_eq!(word.update_alignment(&[Some(0), Some(3)]).alignment(), Some(3));
        assert_eq!(word.update_alignment(&[Some(0), None]).alignment(), None);
        assert_eq!(word.update_alignment(&[Some(0)]).alignment(), None);
    }
}
