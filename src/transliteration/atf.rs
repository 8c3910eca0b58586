//! ATF vocabulary shared by tokens, lines and the grammar
//!
//! Flags, status marks, sides, erasure states and the structural keywords used by
//! `@` and `$` lines, each with its canonical ATF spelling.

use serde::{Deserialize, Serialize};

/// Version stamped on every text produced by the document parser
pub const ATF_PARSER_VERSION: &str = "0.17.0";

pub const WORD_SEPARATOR: &str = " ";
pub const VARIANT_SEPARATOR: &str = "/";
pub const UNCLEAR_SIGN: &str = "x";
pub const UNIDENTIFIED_SIGN: &str = "X";
pub const UNKNOWN_NUMBER_OF_SIGNS: &str = "...";
pub const TABULATION: &str = "($___$)";
pub const IN_WORD_NEWLINE: &str = ";";

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
pub const SUBSCRIPT_X: char = 'ₓ';

/// Sign flags, written directly after a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Flag {
    Damage,
    Uncertain,
    Correction,
    Collation,
}

impl Flag {
    pub fn atf(self) -> &'static str {
        match self {
            Flag::Damage => "#",
            Flag::Uncertain => "?",
            Flag::Correction => "!",
            Flag::Collation => "*",
        }
    }

    pub fn from_atf(flag: &str) -> Option<Flag> {
        match flag {
            "#" => Some(Flag::Damage),
            "?" => Some(Flag::Uncertain),
            "!" => Some(Flag::Correction),
            "*" => Some(Flag::Collation),
            _ => None,
        }
    }
}

pub fn flags_atf(flags: &[Flag]) -> String {
    flags.iter().map(|flag| flag.atf()).collect()
}

/// Status marks of labels and structural lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Status {
    Prime,
    Uncertain,
    Correction,
    Collation,
}

impl Status {
    pub fn atf(self) -> &'static str {
        match self {
            Status::Prime => "'",
            Status::Uncertain => "?",
            Status::Correction => "!",
            Status::Collation => "*",
        }
    }

    pub fn from_atf(status: &str) -> Option<Status> {
        match status {
            "'" => Some(Status::Prime),
            "?" => Some(Status::Uncertain),
            "!" => Some(Status::Correction),
            "*" => Some(Status::Collation),
            _ => None,
        }
    }
}

pub fn status_atf(status: &[Status]) -> String {
    status.iter().map(|status| status.atf()).collect()
}

/// Which side of an enclosure a marker stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ErasureState {
    #[default]
    None,
    Erased,
    OverErased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Obverse,
    Reverse,
    Bottom,
    Edge,
    Left,
    Right,
    Top,
    Surface,
    Face,
}

impl Surface {
    /// Keyword used by `@` lines
    pub fn atf(self) -> &'static str {
        match self {
            Surface::Obverse => "obverse",
            Surface::Reverse => "reverse",
            Surface::Bottom => "bottom",
            Surface::Edge => "edge",
            Surface::Left => "left",
            Surface::Right => "right",
            Surface::Top => "top",
            Surface::Surface => "surface",
            Surface::Face => "face",
        }
    }

    /// Abbreviation used inside labels
    pub fn label(self) -> &'static str {
        match self {
            Surface::Obverse => "o",
            Surface::Reverse => "r",
            Surface::Bottom => "b.e.",
            Surface::Edge => "e.",
            Surface::Left => "l.e.",
            Surface::Right => "r.e.",
            Surface::Top => "t.e.",
            Surface::Surface => "",
            Surface::Face => "",
        }
    }

    pub fn from_atf(keyword: &str) -> Option<Surface> {
        [
            Surface::Obverse,
            Surface::Reverse,
            Surface::Bottom,
            Surface::Edge,
            Surface::Left,
            Surface::Right,
            Surface::Top,
            Surface::Surface,
            Surface::Face,
        ]
        .into_iter()
        .find(|surface| surface.atf() == keyword)
    }

    pub fn from_label(label: &str) -> Option<Surface> {
        [
            Surface::Obverse,
            Surface::Reverse,
            Surface::Bottom,
            Surface::Edge,
            Surface::Left,
            Surface::Right,
            Surface::Top,
        ]
        .into_iter()
        .find(|surface| surface.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Object {
    Tablet,
    Envelope,
    Prism,
    Bulla,
    Fragment,
    Object,
}

impl Object {
    pub fn atf(self) -> &'static str {
        match self {
            Object::Tablet => "tablet",
            Object::Envelope => "envelope",
            Object::Prism => "prism",
            Object::Bulla => "bulla",
            Object::Fragment => "fragment",
            Object::Object => "object",
        }
    }

    pub fn from_atf(keyword: &str) -> Option<Object> {
        [
            Object::Tablet,
            Object::Envelope,
            Object::Prism,
            Object::Bulla,
            Object::Fragment,
            Object::Object,
        ]
        .into_iter()
        .find(|object| object.atf() == keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Discourse {
    Catchline,
    Colophon,
    Date,
    Signatures,
    Signature,
    Summary,
    Witnesses,
}

impl Discourse {
    pub fn atf(self) -> &'static str {
        match self {
            Discourse::Catchline => "catchline",
            Discourse::Colophon => "colophon",
            Discourse::Date => "date",
            Discourse::Signatures => "signatures",
            Discourse::Signature => "signature",
            Discourse::Summary => "summary",
            Discourse::Witnesses => "witnesses",
        }
    }

    pub fn from_atf(keyword: &str) -> Option<Discourse> {
        [
            Discourse::Catchline,
            Discourse::Colophon,
            Discourse::Date,
            Discourse::Signatures,
            Discourse::Signature,
            Discourse::Summary,
            Discourse::Witnesses,
        ]
        .into_iter()
        .find(|discourse| discourse.atf() == keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommentaryProtocol {
    QuotationText,
    BaseText,
    Commentary,
    Uncertain,
}

impl CommentaryProtocol {
    pub fn atf(self) -> &'static str {
        match self {
            CommentaryProtocol::QuotationText => "!qt",
            CommentaryProtocol::BaseText => "!bs",
            CommentaryProtocol::Commentary => "!cm",
            CommentaryProtocol::Uncertain => "!zz",
        }
    }

    pub fn from_atf(protocol: &str) -> Option<CommentaryProtocol> {
        match protocol {
            "!qt" => Some(CommentaryProtocol::QuotationText),
            "!bs" => Some(CommentaryProtocol::BaseText),
            "!cm" => Some(CommentaryProtocol::Commentary),
            "!zz" => Some(CommentaryProtocol::Uncertain),
            _ => None,
        }
    }
}

/// Render a sub-index: 1 is implicit, `None` is the unknown index `ₓ`
pub fn sub_index_atf(sub_index: Option<u32>) -> String {
    match sub_index {
        Some(1) => String::new(),
        Some(number) => number
            .to_string()
            .chars()
            .filter_map(|digit| digit.to_digit(10))
            .map(|digit| SUBSCRIPT_DIGITS[digit as usize])
            .collect(),
        None => SUBSCRIPT_X.to_string(),
    }
}

/// Parse a written sub-index; `Some(None)` is `ₓ`, `None` means the text is not a sub-index
pub fn parse_sub_index(sub_index: &str) -> Option<Option<u32>> {
    if sub_index == SUBSCRIPT_X.to_string() {
        return Some(None);
    }
    if sub_index.is_empty() {
        return None;
    }
    let digits: Option<String> = sub_index.chars().map(subscript_to_digit).collect();
    digits.and_then(|digits| digits.parse().ok()).map(Some)
}

pub fn subscript_to_digit(subscript: char) -> Option<char> {
    SUBSCRIPT_DIGITS
        .iter()
        .position(|candidate| *candidate == subscript)
        .and_then(|digit| char::from_digit(digit as u32, 10))
}

pub fn digit_to_subscript(digit: char) -> Option<char> {
    digit.to_digit(10).map(|digit| SUBSCRIPT_DIGITS[digit as usize])
}

pub fn is_subscript(character: char) -> bool {
    SUBSCRIPT_DIGITS.contains(&character) || character == SUBSCRIPT_X
}
