//! Line kind classification
//!
//! The first token of a line decides which grammar parses it. Lines that start with
//! anything else are text lines.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum LineSigil {
    #[token("@")]
    At,

    #[token("$")]
    Dollar,

    #[token("#note:")]
    Note,

    #[regex(r"#tr(\.[a-z]+)?(\.\([^)]*\))?:")]
    Translation,

    #[token("#")]
    Comment,

    #[token("=:")]
    Multiplex,

    #[token("//")]
    Parallel,

    #[token("&")]
    Ampersand,
}

/// What kind of line this is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Empty,
    Text,
    At,
    Dollar,
    Note,
    Translation,
    Parallel,
    Control,
}

pub(crate) fn classify(line: &str) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Empty;
    }
    match LineSigil::lexer(line).next() {
        Some(Ok(LineSigil::At)) => LineKind::At,
        Some(Ok(LineSigil::Dollar)) => LineKind::Dollar,
        Some(Ok(LineSigil::Note)) => LineKind::Note,
        Some(Ok(LineSigil::Translation)) => LineKind::Translation,
        Some(Ok(LineSigil::Parallel)) => LineKind::Parallel,
        Some(Ok(LineSigil::Comment | LineSigil::Multiplex | LineSigil::Ampersand)) => {
            LineKind::Control
        }
        Some(Err(_)) | None => LineKind::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Empty);
        assert_eq!(classify("   "), LineKind::Empty);
        assert_eq!(classify("1. kur"), LineKind::Text);
        assert_eq!(classify("@obverse"), LineKind::At);
        assert_eq!(classify("$ single ruling"), LineKind::Dollar);
        assert_eq!(classify("#note: text"), LineKind::Note);
        assert_eq!(classify("#tr.en.(1-2): text"), LineKind::Translation);
        assert_eq!(classify("#tr: text"), LineKind::Translation);
        assert_eq!(classify("# comment"), LineKind::Control);
        assert_eq!(classify("=: continuation"), LineKind::Control);
        assert_eq!(classify("&K 1 = text"), LineKind::Control);
        assert_eq!(classify("// F K.1 1"), LineKind::Parallel);
    }
}
