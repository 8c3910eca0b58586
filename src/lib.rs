//! # atf
//!
//! A parser and document model for transliterated cuneiform written in ATF notation.
//!
//! The [transliteration] module turns raw ATF into validated [`Text`](transliteration::Text)
//! values: a chumsky grammar produces parse trees, a family of transformers folds them into
//! typed lines and tokens, and single-pass visitors validate enclosures and propagate
//! languages. Lemmatization and alignment updates, and the diff-based merge that keeps
//! annotations across edits, operate on the resulting model.
//!
//! The [signs] module resolves transliterated spellings to canonical sign names through an
//! injected [`SignRepository`](signs::SignRepository).

pub mod signs;
pub mod transliteration;

pub use transliteration::{
    AtfParser, Line, ParseError, ParserConfig, Text, TextLine, Token, TransliterationError,
};
