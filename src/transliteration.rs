//! Transliterations
//!
//! Raw ATF is parsed line by line into a [`Text`]: an ordered list of [`Line`]s whose
//! text lines hold [`Token`]s. The modules below cover, bottom up:
//!
//! - [`atf`], [`tokens`], [`labels`], [`markup`]: the notation and its value types
//! - [`parser`]: the grammar and the [`AtfParser`] context
//! - [`enclosure`], [`language`], [`atf_visitor`]: passes over token sequences
//! - [`annotation`], [`merger`], [`text`], [`corpus`]: lemmatization, alignment and merging
//! - [`config`], [`legacy`]: parser flavours and the legacy notation passes

pub mod annotation;
pub mod atf;
pub mod atf_visitor;
pub mod config;
pub mod corpus;
pub mod enclosure;
pub mod error;
pub mod labels;
pub mod language;
pub mod legacy;
pub mod line;
pub mod markup;
pub mod merger;
pub mod parser;
pub mod text;
pub mod tokens;

mod transform;

pub use annotation::{AlignmentMap, AlignmentToken, Lemmatization, LemmatizationToken};
pub use config::{ConfigRegistry, ParserConfig};
pub use corpus::{LineVariant, ManuscriptLine};
pub use error::{
    AlignmentError, DuplicateLabelError, EnclosureError, ErrorEntry, LabelError,
    LemmatizationError, LineError, ParseError, SyntaxError, TransliterationError, ValueError,
};
pub use language::Language;
pub use line::{Line, TextLine};
pub use parser::{AtfParser, ParsedLine};
pub use text::Text;
pub use tokens::{Token, TokenKind, Word};
