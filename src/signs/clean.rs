//! Sign spellings of a transliteration
//!
//! Each text line becomes the list of its signs as plain spellings: flags, brackets,
//! modifiers, joiners, dividers and shifts are dropped, logograms are lowered and erased
//! signs are skipped. Explicit signs are kept as `reading(SIGN)`.

use crate::transliteration::atf::{self, ErasureState, UNCLEAR_SIGN, UNIDENTIFIED_SIGN};
use crate::transliteration::line::TextLine;
use crate::transliteration::text::Text;
use crate::transliteration::tokens::{NamedSign, Token, TokenKind};

fn named_sign(sign: &NamedSign, lower: bool) -> String {
    let name = if lower {
        sign.name().to_lowercase()
    } else {
        sign.name()
    };
    let explicit = sign
        .sign()
        .map(|sign| format!("({})", sign.clean_value()))
        .unwrap_or_default();
    format!("{}{}{}", name, atf::sub_index_atf(sign.sub_index()), explicit)
}

/// Spellings of the signs inside a word
fn signs(token: &Token, values: &mut Vec<String>) {
    if token.erasure_state() == ErasureState::Erased {
        return;
    }
    match token.kind() {
        TokenKind::Word(word) | TokenKind::LoneDeterminative(word) => {
            for part in word.parts() {
                signs(part, values);
            }
        }
        TokenKind::Determinative(parts)
        | TokenKind::PhoneticGloss(parts)
        | TokenKind::LinguisticGloss(parts) => {
            for part in parts {
                signs(part, values);
            }
        }
        TokenKind::Variant(variant) => {
            let parts: Vec<String> = variant
                .tokens()
                .iter()
                .filter_map(|part| {
                    let mut spelling = Vec::new();
                    signs(part, &mut spelling);
                    (!spelling.is_empty()).then(|| spelling.join(" "))
                })
                .collect();
            if !parts.is_empty() {
                values.push(parts.join(atf::VARIANT_SEPARATOR));
            }
        }
        TokenKind::Reading(sign) | TokenKind::Number(sign) => values.push(named_sign(sign, false)),
        TokenKind::Logogram(sign) => values.push(named_sign(sign, true)),
        TokenKind::Grapheme(grapheme) => values.push(grapheme.name().to_string()),
        TokenKind::CompoundGrapheme(grapheme) => values.push(grapheme.clean_value()),
        TokenKind::UnclearSign(_) => values.push(UNCLEAR_SIGN.to_string()),
        TokenKind::UnidentifiedSign(_) => values.push(UNIDENTIFIED_SIGN.to_string()),
        _ => {}
    }
}

pub fn clean_line(line: &TextLine) -> Vec<String> {
    let mut values = Vec::new();
    for token in line.content() {
        if token.is_word_like() {
            signs(token, &mut values);
        }
    }
    values
}

/// One row of spellings per text line
pub fn clean_values(text: &Text) -> Vec<Vec<String>> {
    text.text_lines().map(clean_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::AtfParser;

    fn clean(atf: &str) -> Vec<Vec<String>> {
        let text = AtfParser::default().parse_atf(atf).unwrap();
        clean_values(&text)
    }

    #[test]
    fn test_control_lines_are_skipped() {
        assert_eq!(
            clean("@reverse\n\n$ end of side\n#note: foo\n=: foo\n1. ku X x\n2. nuₓ"),
            vec![vec!["ku", "X", "x"], vec!["nuₓ"]]
        );
    }

    #[test]
    fn test_decorations_are_dropped() {
        assert_eq!(
            clean("1. [k]u#?-{d}UTU | %sux gid₂! ..."),
            vec![vec!["ku", "d", "utu", "gid₂"]]
        );
    }

    #[test]
    fn test_explicit_signs_and_variants() {
        assert_eq!(
            clean("1. ku(KU) šu/gid₂"),
            vec![vec!["ku(KU)", "šu/gid₂"]]
        );
    }

    #[test]
    fn test_erased_signs_are_skipped() {
        assert_eq!(clean("1. °ku\\ra° mu"), vec![vec!["ra", "mu"]]);
    }
}
