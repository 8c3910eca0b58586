use serde::Serialize;

use super::Token;
use crate::transliteration::atf::{self, Flag};

/// A reading, logogram or number
///
/// The name is kept as a token sequence so that broken-away markers written inside a
/// name (`k[ur`) survive rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSign {
    name_parts: Vec<Token>,
    sub_index: Option<u32>,
    modifiers: Vec<String>,
    flags: Vec<Flag>,
    sign: Option<Box<Token>>,
}

impl NamedSign {
    pub fn new(
        name_parts: Vec<Token>,
        sub_index: Option<u32>,
        modifiers: Vec<String>,
        flags: Vec<Flag>,
        sign: Option<Token>,
    ) -> Self {
        Self {
            name_parts,
            sub_index,
            modifiers,
            flags,
            sign: sign.map(Box::new),
        }
    }

    pub fn of_name(name: &str, sub_index: Option<u32>) -> Self {
        Self::new(
            vec![Token::value_token(name)],
            sub_index,
            Vec::new(),
            Vec::new(),
            None,
        )
    }

    /// The name without inline markers
    pub fn name(&self) -> String {
        self.name_parts.iter().map(Token::clean_value).collect()
    }

    pub fn name_parts(&self) -> &[Token] {
        &self.name_parts
    }

    /// `None` is the unknown sub-index `ₓ`
    pub fn sub_index(&self) -> Option<u32> {
        self.sub_index
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Explicit sign written as `reading(SIGN)`
    pub fn sign(&self) -> Option<&Token> {
        self.sign.as_deref()
    }

    pub(crate) fn with_name_parts(self, name_parts: Vec<Token>) -> Self {
        Self { name_parts, ..self }
    }

    pub(crate) fn with_sign(self, sign: Option<Token>) -> Self {
        Self {
            sign: sign.map(Box::new),
            ..self
        }
    }

    pub fn value(&self) -> String {
        let name: String = self.name_parts.iter().map(Token::value).collect();
        let sign = self
            .sign()
            .map(|sign| format!("({})", sign.value()))
            .unwrap_or_default();
        format!(
            "{}{}{}{}{}",
            name,
            atf::sub_index_atf(self.sub_index),
            self.modifiers.concat(),
            atf::flags_atf(&self.flags),
            sign
        )
    }

    pub fn clean_value(&self) -> String {
        let sign = self
            .sign()
            .map(|sign| format!("({})", sign.clean_value()))
            .unwrap_or_default();
        format!(
            "{}{}{}{}",
            self.name(),
            atf::sub_index_atf(self.sub_index),
            self.modifiers.concat(),
            sign
        )
    }
}

/// A sign named by its shape, e.g. `KUR` inside `x(KUR)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grapheme {
    name: String,
    modifiers: Vec<String>,
    flags: Vec<Flag>,
}

impl Grapheme {
    pub fn new(name: impl Into<String>, modifiers: Vec<String>, flags: Vec<Flag>) -> Self {
        Self {
            name: name.into(),
            modifiers,
            flags,
        }
    }

    pub fn of(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new(), Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> String {
        format!(
            "{}{}{}",
            self.name,
            self.modifiers.concat(),
            atf::flags_atf(&self.flags)
        )
    }

    pub fn clean_value(&self) -> String {
        format!("{}{}", self.name, self.modifiers.concat())
    }
}

/// A letter of a Greek word, with its flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreekLetter {
    letter: char,
    flags: Vec<Flag>,
}

impl GreekLetter {
    pub fn new(letter: char, flags: Vec<Flag>) -> Self {
        Self { letter, flags }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn value(&self) -> String {
        format!("{}{}", self.letter, atf::flags_atf(&self.flags))
    }

    pub fn clean_value(&self) -> String {
        self.letter.to_string()
    }
}

/// `|A.B|`, `|A×B|` and friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundGrapheme {
    compound_parts: Vec<String>,
    flags: Vec<Flag>,
}

impl CompoundGrapheme {
    pub fn new(compound_parts: Vec<String>, flags: Vec<Flag>) -> Self {
        Self {
            compound_parts,
            flags,
        }
    }

    pub fn of(compound_parts: Vec<String>) -> Self {
        Self::new(compound_parts, Vec::new())
    }

    /// Split the body of `|...|` on its top-level dots
    pub fn parse_body(body: &str) -> Vec<String> {
        body.split('.').map(str::to_string).collect()
    }

    pub fn compound_parts(&self) -> &[String] {
        &self.compound_parts
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// A plain sequence of graphemes that can be looked up part by part
    pub fn is_splittable(&self) -> bool {
        self.compound_parts.len() > 1
            && self
                .compound_parts
                .iter()
                .all(|part| !part.contains('(') && !part.contains(')'))
    }

    pub fn clean_value(&self) -> String {
        format!("|{}|", self.compound_parts.join("."))
    }

    pub fn value(&self) -> String {
        format!("{}{}", self.clean_value(), atf::flags_atf(&self.flags))
    }
}

/// Word divider such as `|`, `:` or `:'`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divider {
    divider: String,
    modifiers: Vec<String>,
    flags: Vec<Flag>,
}

impl Divider {
    pub fn new(divider: impl Into<String>, modifiers: Vec<String>, flags: Vec<Flag>) -> Self {
        Self {
            divider: divider.into(),
            modifiers,
            flags,
        }
    }

    pub fn of(divider: &str) -> Self {
        Self::new(divider, Vec::new(), Vec::new())
    }

    pub fn divider(&self) -> &str {
        &self.divider
    }

    pub fn value(&self) -> String {
        format!(
            "{}{}{}",
            self.divider,
            self.modifiers.concat(),
            atf::flags_atf(&self.flags)
        )
    }

    pub fn clean_value(&self) -> String {
        format!("{}{}", self.divider, self.modifiers.concat())
    }
}
