//! Text lines, words and signs

use crate::transliteration::atf::{self, CommentaryProtocol, ErasureState, Flag, Side};
use crate::transliteration::error::LineError;
use crate::transliteration::legacy::accented_vowel;
use crate::transliteration::line::TextLine;
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};
use crate::transliteration::tokens::{
    CompoundGrapheme, Divider, Grapheme, Joiner, NamedSign, Token, TokenKind,
};

use super::{abstract_line_number, legacy, parse_number, required_leaf, unexpected};

pub(super) fn text_line(tree: &Tree) -> Result<TextLine, LineError> {
    match tree.children() {
        [line_number, content] => {
            let line_number = abstract_line_number(line_number)?;
            let tokens = tokens(content)?;
            if tokens.is_empty() {
                return Err(LineError::Invalid("Text line has no content.".to_string()));
            }
            Ok(TextLine::of_iterable(line_number, tokens))
        }
        _ => unexpected(tree),
    }
}

/// Tokens of a `Content` node
pub(crate) fn tokens(content: &Tree) -> Result<Vec<Token>, LineError> {
    let mut tokens = Vec::new();
    for item in content.children() {
        segment(item, &mut tokens)?;
    }
    Ok(tokens)
}

fn segment(tree: &Tree, tokens: &mut Vec<Token>) -> Result<(), LineError> {
    match tree {
        Tree::Leaf(Terminal::EnclosureOpen, marker) => tokens.push(enclosure(marker, Side::Left)),
        Tree::Leaf(Terminal::EnclosureClose, marker) => {
            tokens.push(enclosure(marker, Side::Right))
        }
        Tree::Leaf(Terminal::HalfBracketOpen | Terminal::HalfBracketClose, bracket) => {
            return Err(legacy(bracket))
        }
        Tree::Leaf(Terminal::Tabulation, _) => tokens.push(Token::new(TokenKind::Tabulation)),
        Tree::Leaf(Terminal::CommentaryProtocol, protocol) => {
            let protocol = CommentaryProtocol::from_atf(protocol).unwrap_or_else(|| unexpected(tree));
            tokens.push(Token::new(TokenKind::CommentaryProtocol(protocol)))
        }
        Tree::Leaf(Terminal::LanguageShift, shift) => tokens.push(Token::language_shift(shift)),
        Tree::Leaf(Terminal::Column, column) => {
            let number = match column.trim_start_matches('&') {
                "" => None,
                number => Some(parse_number(number)?),
            };
            tokens.push(Token::new(TokenKind::Column(number)))
        }
        Tree::Node(Rule::Word, _) => tokens.push(word(tree)?),
        Tree::Node(Rule::GreekWord, _) => tokens.push(greek_word(tree)),
        Tree::Node(Rule::Divider | Rule::Variant, _) => tokens.push(sign(tree)?),
        Tree::Node(Rule::Erasure, sides) => match sides.as_slice() {
            [erased, over_erased] => {
                tokens.push(Token::erasure(Side::Left));
                erasure_side(erased, ErasureState::Erased, tokens)?;
                tokens.push(Token::erasure(Side::Center));
                erasure_side(over_erased, ErasureState::OverErased, tokens)?;
                tokens.push(Token::erasure(Side::Right));
            }
            _ => unexpected(tree),
        },
        _ => unexpected(tree),
    }
    Ok(())
}

fn erasure_side(
    side: &Tree,
    state: ErasureState,
    tokens: &mut Vec<Token>,
) -> Result<(), LineError> {
    let mut side_tokens = Vec::new();
    for item in side.children() {
        segment(item, &mut side_tokens)?;
    }
    tokens.extend(side_tokens.into_iter().map(|token| token.with_erasure(state)));
    Ok(())
}

fn enclosure(marker: &str, side: Side) -> Token {
    match marker {
        "[" | "]" => Token::broken_away(side),
        "(" | ")" => Token::perhaps_broken_away(side),
        "<" | ">" => Token::accidental_omission(side),
        "<(" | ")>" => Token::intentional_omission(side),
        "<<" | ">>" => Token::removal(side),
        "{(" | ")}" => Token::document_oriented_gloss(side),
        _ => panic!("unknown enclosure marker {:?}", marker),
    }
}

fn is_gloss_only(parts: &[Token]) -> bool {
    let mut content = parts
        .iter()
        .filter(|part| part.enclosure_marker().is_none());
    matches!(
        (content.next().map(Token::kind), content.next()),
        (
            Some(TokenKind::Determinative(_) | TokenKind::PhoneticGloss(_)),
            None
        )
    )
}

/// A word, or a lone determinative when a gloss is all there is
pub(crate) fn word(tree: &Tree) -> Result<Token, LineError> {
    let mut parts = Vec::new();
    word_parts(tree.children(), &mut parts)?;
    if is_gloss_only(&parts) {
        Ok(Token::lone_determinative(parts))
    } else {
        Ok(Token::word(parts))
    }
}

/// Word parts; an erasure inside the word spreads into its markers and erased parts
fn word_parts(trees: &[Tree], parts: &mut Vec<Token>) -> Result<(), LineError> {
    for tree in trees {
        match tree {
            Tree::Node(Rule::Erasure, sides) => match sides.as_slice() {
                [erased, over_erased] => {
                    parts.push(Token::erasure(Side::Left));
                    erased_parts(erased, ErasureState::Erased, parts)?;
                    parts.push(Token::erasure(Side::Center));
                    erased_parts(over_erased, ErasureState::OverErased, parts)?;
                    parts.push(Token::erasure(Side::Right));
                }
                _ => unexpected(tree),
            },
            _ => parts.push(word_part(tree)?),
        }
    }
    Ok(())
}

fn erased_parts(
    side: &Tree,
    state: ErasureState,
    parts: &mut Vec<Token>,
) -> Result<(), LineError> {
    for part in side.children() {
        parts.push(word_part(part)?.with_erasure(state));
    }
    Ok(())
}

fn word_part(tree: &Tree) -> Result<Token, LineError> {
    match tree {
        Tree::Leaf(Terminal::EnclosureOpen, marker) => Ok(enclosure(marker, Side::Left)),
        Tree::Leaf(Terminal::EnclosureClose, marker) => Ok(enclosure(marker, Side::Right)),
        Tree::Leaf(Terminal::Joiner, joiner) => Joiner::from_atf(joiner)
            .map(Token::joiner)
            .ok_or_else(|| unexpected(tree)),
        Tree::Leaf(Terminal::InWordNewline, _) => Ok(Token::new(TokenKind::InWordNewline)),
        Tree::Leaf(
            Terminal::LegacyJoiner | Terminal::HalfBracketOpen | Terminal::HalfBracketClose,
            notation,
        ) => Err(legacy(notation)),
        Tree::Node(Rule::Determinative, parts) => {
            gloss_parts(parts).map(|parts| Token::new(TokenKind::Determinative(parts)))
        }
        Tree::Node(Rule::PhoneticGloss, parts) => {
            gloss_parts(parts).map(|parts| Token::new(TokenKind::PhoneticGloss(parts)))
        }
        Tree::Node(Rule::LinguisticGloss, parts) => {
            gloss_parts(parts).map(|parts| Token::new(TokenKind::LinguisticGloss(parts)))
        }
        _ => sign(tree),
    }
}

fn gloss_parts(parts: &[Tree]) -> Result<Vec<Token>, LineError> {
    parts.iter().map(word_part).collect()
}

fn greek_word(tree: &Tree) -> Token {
    let letters = tree
        .children()
        .iter()
        .map(|letter| {
            let value = required_leaf(letter, Terminal::Value);
            let mut characters = value.chars();
            match (characters.next(), characters.next()) {
                (Some(character), None) => Token::greek_letter(character, flags(letter)),
                _ => unexpected(letter),
            }
        })
        .collect();
    Token::greek_word(letters)
}

fn sign(tree: &Tree) -> Result<Token, LineError> {
    match tree {
        Tree::Leaf(Terminal::UnknownNumberOfSigns, _) => Ok(Token::unknown_number_of_signs()),
        Tree::Node(Rule::Reading, children) => {
            named_sign(children).map(|sign| Token::new(TokenKind::Reading(sign)))
        }
        Tree::Node(Rule::Logogram, children) => {
            named_sign(children).map(|sign| Token::new(TokenKind::Logogram(sign)))
        }
        Tree::Node(Rule::Number, children) => {
            named_sign(children).map(|sign| Token::new(TokenKind::Number(sign)))
        }
        Tree::Node(Rule::UnclearSign, _) => Ok(Token::unclear_sign(flags(tree))),
        Tree::Node(Rule::UnidentifiedSign, _) => Ok(Token::unidentified_sign(flags(tree))),
        Tree::Node(Rule::CompoundGrapheme, _) => {
            let body = tree.find_leaf(Terminal::Value).unwrap_or_else(|| unexpected(tree));
            Ok(Token::new(TokenKind::CompoundGrapheme(CompoundGrapheme::new(
                CompoundGrapheme::parse_body(body),
                flags(tree),
            ))))
        }
        Tree::Node(Rule::Grapheme, _) => {
            let name = tree.find_leaf(Terminal::Value).unwrap_or_else(|| unexpected(tree));
            Ok(Token::new(TokenKind::Grapheme(Grapheme::new(
                name,
                modifiers(tree)?,
                flags(tree),
            ))))
        }
        Tree::Node(Rule::Divider, _) => {
            let divider = tree
                .find_leaf(Terminal::DividerSymbol)
                .unwrap_or_else(|| unexpected(tree));
            Ok(Token::new(TokenKind::Divider(Divider::new(
                divider,
                modifiers(tree)?,
                flags(tree),
            ))))
        }
        Tree::Node(Rule::Variant, alternatives) => {
            let tokens = alternatives
                .iter()
                .map(sign)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Token::variant(tokens)?)
        }
        _ => unexpected(tree),
    }
}

fn flags(sign: &Tree) -> Vec<Flag> {
    sign.find_node(Rule::Flags)
        .map(|flags| {
            flags
                .leaves(Terminal::Flag)
                .into_iter()
                .filter_map(Flag::from_atf)
                .collect()
        })
        .unwrap_or_default()
}

fn modifiers(sign: &Tree) -> Result<Vec<String>, LineError> {
    let Some(modifiers) = sign.find_node(Rule::Modifiers) else {
        return Ok(Vec::new());
    };
    modifiers
        .children()
        .iter()
        .map(|modifier| match modifier {
            Tree::Leaf(Terminal::Modifier, text) => Ok(text.clone()),
            Tree::Leaf(Terminal::LegacyModifier, text) => Err(legacy(text)),
            _ => unexpected(modifier),
        })
        .collect()
}

/// Name characters become one value token per run; inline brackets stay between them
fn name_parts(name: &Tree) -> Result<Vec<Token>, LineError> {
    let mut parts: Vec<Token> = Vec::new();
    let mut value = String::new();
    for child in name.children() {
        match child {
            Tree::Leaf(Terminal::Value, text) => {
                if let Some(accented) = text.chars().find(|c| accented_vowel(*c).is_some()) {
                    return Err(legacy(&accented.to_string()));
                }
                value.push_str(text);
            }
            Tree::Leaf(Terminal::EnclosureOpen | Terminal::EnclosureClose, marker) => {
                if !value.is_empty() {
                    parts.push(Token::value_token(std::mem::take(&mut value)));
                }
                let side = if child.terminal() == Some(Terminal::EnclosureOpen) {
                    Side::Left
                } else {
                    Side::Right
                };
                parts.push(enclosure(marker, side));
            }
            Tree::Leaf(Terminal::LegacyAleph, aleph) => return Err(legacy(aleph)),
            _ => unexpected(child),
        }
    }
    if !value.is_empty() {
        parts.push(Token::value_token(value));
    }
    Ok(parts)
}

fn sub_index(sign: &[Tree]) -> Result<Option<u32>, LineError> {
    for child in sign {
        match child {
            Tree::Leaf(Terminal::SubIndex, index) => {
                return atf::parse_sub_index(index).ok_or_else(|| {
                    LineError::Invalid(format!("Sub-index {} is too large.", index))
                })
            }
            Tree::Leaf(Terminal::LegacySubIndex, index) => return Err(legacy(index)),
            _ => {}
        }
    }
    Ok(Some(1))
}

fn named_sign(children: &[Tree]) -> Result<NamedSign, LineError> {
    let node = Tree::node(Rule::Reading, children.to_vec());
    let name = node.find_node(Rule::Name).unwrap_or_else(|| unexpected(&node));
    let explicit_sign = node
        .find_node(Rule::SignOverride)
        .map(|sign_override| match sign_override.children() {
            [explicit] => sign(explicit),
            _ => unexpected(sign_override),
        })
        .transpose()?;
    Ok(NamedSign::new(
        name_parts(name)?,
        sub_index(children)?,
        modifiers(&node)?,
        flags(&node),
        explicit_sign,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(children: Vec<Tree>) -> Tree {
        Tree::node(Rule::Reading, children)
    }

    fn name(parts: Vec<Tree>) -> Tree {
        Tree::node(Rule::Name, parts)
    }

    #[test]
    fn test_name_with_inline_bracket() {
        let tree = reading(vec![
            name(vec![
                Tree::leaf(Terminal::Value, "k"),
                Tree::leaf(Terminal::EnclosureOpen, "["),
                Tree::leaf(Terminal::Value, "ur"),
            ]),
            Tree::leaf(Terminal::SubIndex, "₂"),
            Tree::node(Rule::Modifiers, vec![]),
            Tree::node(Rule::Flags, vec![Tree::leaf(Terminal::Flag, "#")]),
        ]);
        let token = sign(&tree).unwrap();
        assert_eq!(token.value(), "k[ur₂#");
        match token.kind() {
            TokenKind::Reading(sign) => {
                assert_eq!(sign.name(), "kur");
                assert_eq!(sign.sub_index(), Some(2));
                assert_eq!(sign.flags(), &[Flag::Damage]);
            }
            other => panic!("expected a reading, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_determinative() {
        let tree = Tree::node(
            Rule::Word,
            vec![Tree::node(
                Rule::Determinative,
                vec![reading(vec![name(vec![Tree::leaf(Terminal::Value, "d")])])],
            )],
        );
        let token = word(&tree).unwrap();
        assert_eq!(token.type_name(), "LoneDeterminative");
        assert_eq!(token.value(), "{d}");
    }

    #[test]
    fn test_accented_reading_is_rejected() {
        let tree = reading(vec![name(vec![Tree::leaf(Terminal::Value, "ú")])]);
        assert!(matches!(sign(&tree), Err(LineError::Invalid(_))));
    }

    #[test]
    fn test_erasure_states() {
        let word_tree = |value: &str| {
            Tree::node(
                Rule::Word,
                vec![reading(vec![name(vec![Tree::leaf(Terminal::Value, value)])])],
            )
        };
        let content = Tree::node(
            Rule::Content,
            vec![Tree::node(
                Rule::Erasure,
                vec![
                    Tree::node(Rule::Erased, vec![word_tree("ku")]),
                    Tree::node(Rule::OverErased, vec![word_tree("ra")]),
                ],
            )],
        );
        let tokens = tokens(&content).unwrap();
        let states: Vec<ErasureState> = tokens.iter().map(Token::erasure_state).collect();
        assert_eq!(
            states,
            vec![
                ErasureState::None,
                ErasureState::Erased,
                ErasureState::None,
                ErasureState::OverErased,
                ErasureState::None,
            ]
        );
    }
}
