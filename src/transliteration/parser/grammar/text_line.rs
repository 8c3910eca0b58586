//! Text line grammar
//!
//! A text line is a line number followed by space separated segments. A segment is an
//! erasure or a core (word, divider, shift, ...) with enclosure markers attached on either
//! side. Words are signs and glosses joined by connectors; a connector may carry enclosure
//! markers of its own.

use chumsky::prelude::*;

use super::common::{
    is_logogram_character, is_reading_character, line_number_or_range, space, spaces, tag,
    tags, GrammarError, GrammarParser,
};
use crate::transliteration::atf;
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

const OPENERS: [&str; 6] = ["{(", "<<", "<(", "<", "[", "("];
const CLOSERS: [&str; 6] = [")}", ")>", ">>", ">", "]", ")"];
const DIVIDERS: [&str; 9] = [":'", ":\"", ":.", "::", ":?", ":", ";", "/", "|"];
const JOINERS: [&str; 4] = ["-", ".", "+", ":"];

fn opener() -> GrammarParser<Tree> {
    tags(Terminal::EnclosureOpen, &OPENERS)
        .or(tag(Terminal::HalfBracketOpen, "⸢"))
        .boxed()
}

fn closer() -> GrammarParser<Tree> {
    tags(Terminal::EnclosureClose, &CLOSERS)
        .or(tag(Terminal::HalfBracketClose, "⸣"))
        .boxed()
}

fn flags() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    one_of("#?!*")
        .map(|flag: char| Tree::leaf(Terminal::Flag, flag))
        .repeated()
        .map(|flags| Tree::node(Rule::Flags, flags))
}

fn modifiers() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    let body = filter(|c: &char| c.is_ascii_lowercase() || c.is_ascii_digit())
        .repeated()
        .at_least(1);
    let modifier = just('@')
        .chain(body.clone())
        .collect::<String>()
        .map(|modifier| Tree::leaf(Terminal::Modifier, modifier));
    let legacy = just('~')
        .chain(body)
        .collect::<String>()
        .map(|modifier| Tree::leaf(Terminal::LegacyModifier, modifier));
    modifier
        .or(legacy)
        .repeated()
        .map(|modifiers| Tree::node(Rule::Modifiers, modifiers))
}

/// `KUR`, `U₄`, with modifiers and flags
fn grapheme() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    filter(is_logogram_character)
        .repeated()
        .at_least(1)
        .chain::<char, Vec<char>, _>(filter(|c: &char| atf::is_subscript(*c)).repeated())
        .collect::<String>()
        .then(modifiers())
        .then(flags())
        .map(|((name, modifiers), flags)| {
            Tree::node(
                Rule::Grapheme,
                vec![Tree::leaf(Terminal::Value, name), modifiers, flags],
            )
        })
}

/// `|A.B|`
fn compound_grapheme() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    none_of("| ")
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just('|'), just('|'))
        .then(flags())
        .map(|(body, flags)| {
            Tree::node(
                Rule::CompoundGrapheme,
                vec![Tree::leaf(Terminal::Value, body), flags],
            )
        })
}

fn sign_override() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    compound_grapheme()
        .or(grapheme())
        .delimited_by(just('('), just(')'))
        .map(|sign| Tree::node(Rule::SignOverride, vec![sign]))
}

/// `ₓ` or subscript digits; plain digits are the legacy spelling
fn sub_index() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    let unknown = just(atf::SUBSCRIPT_X).map(|index| Tree::leaf(Terminal::SubIndex, index));
    let number = filter(|c: &char| atf::subscript_to_digit(*c).is_some())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(|index| Tree::leaf(Terminal::SubIndex, index));
    unknown
        .or(number)
        .or(filter(|c: &char| c.is_ascii_digit())
            .repeated()
            .at_least(1)
            .collect::<String>()
            .map(|index| Tree::leaf(Terminal::LegacySubIndex, index)))
}

/// A name made of value characters; `[` and `]` may interrupt it, `'` is a legacy aleph
fn name(
    is_value_character: fn(&char) -> bool,
) -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    let value = filter(is_value_character)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(|value| Tree::leaf(Terminal::Value, value));
    let bracket = tag(Terminal::EnclosureOpen, "[").or(tag(Terminal::EnclosureClose, "]"));
    let inner_bracket = bracket.then(value.clone()).map(|(bracket, value)| vec![bracket, value]);
    let aleph = just('\'')
        .map(|aleph| Tree::leaf(Terminal::LegacyAleph, aleph))
        .then(value.clone().or_not())
        .map(|(aleph, value)| std::iter::once(aleph).chain(value).collect::<Vec<_>>());

    value
        .then(inner_bracket.or(aleph).repeated().flatten())
        .map(|(first, rest)| {
            Tree::node(Rule::Name, std::iter::once(first).chain(rest).collect())
        })
}

/// Reading or logogram: name, sub-index, modifiers, flags and an explicit sign
fn named_sign(
    rule: Rule,
    is_value_character: fn(&char) -> bool,
) -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    name(is_value_character)
        .then(sub_index().or_not())
        .then(modifiers())
        .then(flags())
        .then(sign_override().or_not())
        .map(move |((((name, sub_index), modifiers), flags), sign)| {
            let children = std::iter::once(name)
                .chain(sub_index)
                .chain([modifiers, flags])
                .chain(sign)
                .collect();
            Tree::node(rule, children)
        })
}

fn number_sign() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .then(modifiers())
        .then(flags())
        .then(sign_override().or_not())
        .map(|(((digits, modifiers), flags), sign)| {
            let name = Tree::node(Rule::Name, vec![Tree::leaf(Terminal::Value, digits)]);
            let children = [name, modifiers, flags].into_iter().chain(sign).collect();
            Tree::node(Rule::Number, children)
        })
}

fn sign() -> GrammarParser<Tree> {
    let unclear = just('x')
        .ignore_then(flags())
        .map(|flags| Tree::node(Rule::UnclearSign, vec![flags]));
    let unidentified = just('X')
        .ignore_then(flags())
        .map(|flags| Tree::node(Rule::UnidentifiedSign, vec![flags]));
    choice((
        compound_grapheme(),
        unclear,
        unidentified,
        number_sign(),
        named_sign(Rule::Reading, is_reading_character),
        named_sign(Rule::Logogram, is_logogram_character),
        tag(Terminal::UnknownNumberOfSigns, atf::UNKNOWN_NUMBER_OF_SIGNS),
    ))
    .boxed()
}

/// A sign, or signs separated by `/`
fn sign_or_variant() -> GrammarParser<Tree> {
    sign()
        .then(just('/').ignore_then(sign()).repeated())
        .map(|(first, rest)| {
            if rest.is_empty() {
                first
            } else {
                Tree::node(Rule::Variant, std::iter::once(first).chain(rest).collect())
            }
        })
        .boxed()
}

fn joiner() -> GrammarParser<Tree> {
    tags(Terminal::Joiner, &JOINERS)
        .or(tag(Terminal::LegacyJoiner, "–"))
        .boxed()
}

/// What stands between two word parts: closing markers, an optional joiner and opening
/// markers
#[derive(Debug, Clone)]
struct Connector {
    closers: Vec<Tree>,
    newline: Option<Tree>,
    joiner: Option<Tree>,
    openers: Vec<Tree>,
    space_before: bool,
    space_after: bool,
}

impl Connector {
    fn into_trees(self) -> impl Iterator<Item = Tree> {
        self.closers
            .into_iter()
            .chain(self.newline)
            .chain(self.joiner)
            .chain(self.openers)
    }
}

/// `]-[`, `;-`: a joiner, optionally after an in-word newline
fn joined() -> impl Parser<char, Connector, Error = GrammarError> + Clone {
    closer()
        .repeated()
        .then(tag(Terminal::InWordNewline, atf::IN_WORD_NEWLINE).or_not())
        .then(joiner())
        .then(opener().repeated())
        .map(|(((closers, newline), joiner), openers)| Connector {
            closers,
            newline,
            joiner: Some(joiner),
            openers,
            space_before: false,
            space_after: false,
        })
}

/// Markers only; the parts touch
fn touching() -> impl Parser<char, Connector, Error = GrammarError> + Clone {
    closer()
        .repeated()
        .then(opener().repeated())
        .map(|(closers, openers)| Connector {
            closers,
            newline: None,
            joiner: None,
            openers,
            space_before: false,
            space_after: false,
        })
}

/// `... -ad`, `ad- ...`: a hyphen next to `...` may be set off by a space
fn spaced() -> impl Parser<char, Connector, Error = GrammarError> + Clone {
    closer()
        .repeated()
        .then(space().or_not())
        .then(tag(Terminal::Joiner, "-"))
        .then(space().or_not())
        .then(opener().repeated())
        .try_map(|((((closers, before), joiner), after), openers), span| {
            if before.is_none() && after.is_none() {
                return Err(Simple::custom(span, "no space around the joiner"));
            }
            Ok(Connector {
                closers,
                newline: None,
                joiner: Some(joiner),
                openers,
                space_before: before.is_some(),
                space_after: after.is_some(),
            })
        })
}

fn is_gloss(tree: &Tree) -> bool {
    matches!(
        tree.rule(),
        Some(Rule::Determinative | Rule::PhoneticGloss | Rule::LinguisticGloss)
    )
}

fn is_unknown_number_of_signs(tree: &Tree) -> bool {
    tree.terminal() == Some(Terminal::UnknownNumberOfSigns)
}

/// Parts joined by connectors; only glosses may touch their neighbours without a joiner
fn joined_parts(
    part: GrammarParser<Tree>,
) -> impl Parser<char, Vec<Tree>, Error = GrammarError> + Clone {
    let spaced_part = spaced().then(part.clone()).try_map(|(connector, part), span| {
        if connector.space_after && !is_unknown_number_of_signs(&part) {
            Err(Simple::custom(span, "only ... may follow a spaced joiner"))
        } else {
            Ok((connector, part))
        }
    });
    let next = choice((
        joined().then(part.clone()).boxed(),
        touching().then(part.clone()).boxed(),
        spaced_part.boxed(),
    ));
    part.then(next.repeated()).try_map(|(first, rest), span| {
        let mut previous = &first;
        for (connector, part) in &rest {
            if connector.joiner.is_none() && !is_gloss(previous) && !is_gloss(part) {
                return Err(Simple::custom(span, "signs must be joined"));
            }
            if connector.space_before && !is_unknown_number_of_signs(previous) {
                return Err(Simple::custom(span, "only ... may precede a spaced joiner"));
            }
            previous = part;
        }
        let mut parts = vec![first.clone()];
        for (connector, part) in rest {
            parts.extend(connector.into_trees());
            parts.push(part);
        }
        Ok(parts)
    })
}

fn gloss() -> GrammarParser<Tree> {
    let inner = || joined_parts(sign_or_variant());
    let linguistic = inner()
        .delimited_by(just("{{"), just("}}"))
        .map(|parts| Tree::node(Rule::LinguisticGloss, parts));
    let phonetic = inner()
        .delimited_by(just("{+"), just('}'))
        .map(|parts| Tree::node(Rule::PhoneticGloss, parts));
    let determinative = inner()
        .delimited_by(just('{'), just('}'))
        .map(|parts| Tree::node(Rule::Determinative, parts));
    choice((linguistic, phonetic, determinative)).boxed()
}

/// `me-°e\li°-ku`: an erasure inside a word; either side may be empty
fn in_word_erasure() -> GrammarParser<Tree> {
    let part = gloss().or(sign_or_variant()).boxed();
    let side = move |rule| {
        joined_parts(part.clone())
            .or_not()
            .map(move |parts| Tree::node(rule, parts.unwrap_or_default()))
    };
    just('°')
        .ignore_then(side(Rule::Erased))
        .then_ignore(just('\\'))
        .then(side(Rule::OverErased))
        .then_ignore(just('°'))
        .map(|(erased, over_erased)| Tree::node(Rule::Erasure, vec![erased, over_erased]))
        .boxed()
}

/// Signs, glosses and erasures joined into one word
pub(crate) fn word() -> GrammarParser<Tree> {
    joined_parts(choice((gloss(), in_word_erasure(), sign_or_variant())).boxed())
        .map(|parts| Tree::node(Rule::Word, parts))
        .boxed()
}

const GREEK_LETTERS: &str = "ΑαΒβΓγΔδΕεΖζΗηΘθΙιΚκΛλΜμΝνΞξΟοΠπΡρΣσςΤτΥυΦφΧχΨψΩω";

/// Greek letters with their flags
fn greek_word() -> GrammarParser<Tree> {
    one_of(GREEK_LETTERS)
        .then(flags())
        .map(|(letter, flags)| {
            Tree::node(Rule::GreekLetter, vec![Tree::leaf(Terminal::Value, letter), flags])
        })
        .repeated()
        .at_least(1)
        .map(|letters| Tree::node(Rule::GreekWord, letters))
        .boxed()
}

fn divider() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    tags(Terminal::DividerSymbol, &DIVIDERS)
        .then(modifiers())
        .then(flags())
        .map(|((symbol, modifiers), flags)| Tree::node(Rule::Divider, vec![symbol, modifiers, flags]))
}

/// `|/:` or `:'/sal`: a variant with at least one divider stands on its own
fn divider_variant() -> GrammarParser<Tree> {
    let part = sign().or(divider().boxed());
    part.clone()
        .then(just('/').ignore_then(part).repeated().at_least(1))
        .try_map(|(first, rest), span| {
            let parts: Vec<Tree> = std::iter::once(first).chain(rest).collect();
            if parts.iter().any(|part| part.rule() == Some(Rule::Divider)) {
                Ok(Tree::node(Rule::Variant, parts))
            } else {
                Err(Simple::custom(span, "not a divider variant"))
            }
        })
        .boxed()
}

fn language_shift() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    just('%')
        .chain(
            filter(|c: &char| c.is_ascii_lowercase() || c.is_ascii_digit())
                .repeated()
                .at_least(1),
        )
        .collect::<String>()
        .map(|shift| Tree::leaf(Terminal::LanguageShift, shift))
}

/// `%grc`, `%akkgrc`, `%suxgrc`
fn is_greek_shift(shift: &Tree) -> bool {
    matches!(shift, Tree::Leaf(Terminal::LanguageShift, text) if text.ends_with("grc"))
}

fn core(greek: bool) -> GrammarParser<Tree> {
    let protocol = tags(Terminal::CommentaryProtocol, &["!qt", "!bs", "!cm", "!zz"]);
    let column = just('&')
        .chain(filter(|c: &char| c.is_ascii_digit()).repeated())
        .collect::<String>()
        .map(|column| Tree::leaf(Terminal::Column, column));
    let word = if greek {
        greek_word().or(word()).boxed()
    } else {
        word()
    };
    choice((protocol, column, divider_variant(), word, divider().boxed())).boxed()
}

/// Openers, a core and closers, any of which may be missing but not all
fn bracketed_segment(greek: bool) -> GrammarParser<Vec<Tree>> {
    opener()
        .repeated()
        .then(core(greek).or_not())
        .then(closer().repeated())
        .try_map(|((openers, core), closers), span| {
            if openers.is_empty() && core.is_none() && closers.is_empty() {
                Err(Simple::custom(span, "empty segment"))
            } else {
                Ok(openers.into_iter().chain(core).chain(closers).collect())
            }
        })
        .boxed()
}

fn segments(segment: GrammarParser<Vec<Tree>>) -> impl Parser<char, Vec<Tree>, Error = GrammarError> + Clone {
    segment
        .separated_by(spaces())
        .allow_trailing()
        .map(|segments| segments.into_iter().flatten().collect())
}

/// `°erased\over-erased°` standing between words
fn erasure(greek: bool) -> GrammarParser<Vec<Tree>> {
    let side = |rule| segments(plain_segment(greek)).map(move |items| Tree::node(rule, items));
    let word_follows = end().or(one_of("-.+:;–").not().ignored()).rewind();
    just('°')
        .ignore_then(side(Rule::Erased))
        .then_ignore(just('\\'))
        .then(side(Rule::OverErased))
        .then_ignore(just('°'))
        .then_ignore(word_follows)
        .map(|(erased, over_erased)| vec![Tree::node(Rule::Erasure, vec![erased, over_erased])])
        .boxed()
}

fn plain_segment(greek: bool) -> GrammarParser<Vec<Tree>> {
    tag(Terminal::Tabulation, atf::TABULATION)
        .map(|tabulation| vec![tabulation])
        .or(bracketed_segment(greek))
        .boxed()
}

/// Segments up to a language shift; the shift decides how the rest of the line is read
fn content_from(greek: bool) -> GrammarParser<Vec<Tree>> {
    let shifted = language_shift().then_with(|shift: Tree| {
        let greek = is_greek_shift(&shift);
        spaces()
            .ignore_then(content_from(greek))
            .or_not()
            .map(move |rest| {
                std::iter::once(shift.clone())
                    .chain(rest.into_iter().flatten())
                    .collect::<Vec<_>>()
            })
    });
    segments(choice((shifted.boxed(), erasure(greek), plain_segment(greek))).boxed()).boxed()
}

/// Space separated segments, as used by text lines and transliteration markup
pub(crate) fn content() -> GrammarParser<Tree> {
    content_from(false)
        .map(|items| Tree::node(Rule::Content, items))
        .boxed()
}

/// `<line number>. <content>`
pub(crate) fn text_line() -> GrammarParser<Tree> {
    line_number_or_range()
        .then_ignore(just('.'))
        .then_ignore(spaces())
        .then(content())
        .then_ignore(end())
        .try_map(|(line_number, content), span| {
            if content.children().is_empty() {
                Err(Simple::custom(span, "empty line"))
            } else {
                Ok(Tree::node(Rule::TextLine, vec![line_number, content]))
            }
        })
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_content(atf: &str) -> Vec<Tree> {
        content()
            .then_ignore(end())
            .parse(atf)
            .map(|content| content.children().to_vec())
            .unwrap_or_else(|errors| panic!("{:?} failed: {:?}", atf, errors))
    }

    fn reading(name: &str) -> Tree {
        Tree::node(
            Rule::Reading,
            vec![
                Tree::node(Rule::Name, vec![Tree::leaf(Terminal::Value, name)]),
                Tree::node(Rule::Modifiers, vec![]),
                Tree::node(Rule::Flags, vec![]),
            ],
        )
    }

    #[test]
    fn test_word_with_joiners() {
        assert_eq!(
            parse_content("ka-ra"),
            vec![Tree::node(
                Rule::Word,
                vec![reading("ka"), Tree::leaf(Terminal::Joiner, "-"), reading("ra")]
            )]
        );
    }

    #[test]
    fn test_segment_brackets() {
        let items = parse_content("[...]-ku");
        assert_eq!(items[0], Tree::leaf(Terminal::EnclosureOpen, "["));
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[1].children()[1],
            Tree::leaf(Terminal::EnclosureClose, "]")
        );
    }

    #[test]
    fn test_bracket_inside_name() {
        let items = parse_content("r]u");
        let name = items[0].children()[0].children()[0].clone();
        assert_eq!(
            name,
            Tree::node(
                Rule::Name,
                vec![
                    Tree::leaf(Terminal::Value, "r"),
                    Tree::leaf(Terminal::EnclosureClose, "]"),
                    Tree::leaf(Terminal::Value, "u"),
                ]
            )
        );
    }

    #[test]
    fn test_determinative_attaches() {
        let items = parse_content("{d}utu");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].children()[0].rule(), Some(Rule::Determinative));
        assert_eq!(items[0].children()[1].rule(), Some(Rule::Reading));
    }

    #[test]
    fn test_signs_need_joiners() {
        assert!(content().then_ignore(end()).parse("ku#ra").is_err());
    }

    #[test]
    fn test_divider_and_shift() {
        let items = parse_content("%sux kur | ra");
        assert_eq!(items[0], Tree::leaf(Terminal::LanguageShift, "%sux"));
        assert_eq!(items[2].rule(), Some(Rule::Divider));
    }

    #[test]
    fn test_divider_variants() {
        let items = parse_content("|/: :'/sal");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.rule() == Some(Rule::Variant)));
        assert_eq!(items[1].children()[1].rule(), Some(Rule::Reading));
    }

    #[test]
    fn test_erasure() {
        let items = parse_content("°ku\\ra°");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rule(), Some(Rule::Erasure));
    }

    #[test]
    fn test_unknown_sub_index() {
        let items = parse_content("kuₓ");
        assert_eq!(items[0].children()[0].find_leaf(Terminal::SubIndex), Some("ₓ"));
        assert!(content().then_ignore(end()).parse("kuₓ₂").is_err());
        assert!(content().then_ignore(end()).parse("ku₂ₓ").is_err());
    }

    #[test]
    fn test_erasure_inside_word() {
        let items = parse_content("me-°e\\li°-ku");
        assert_eq!(items.len(), 1);
        let erasure = items[0].find_node(Rule::Erasure).unwrap();
        assert_eq!(erasure.children()[0], Tree::node(Rule::Erased, vec![reading("e")]));
        assert_eq!(erasure.children()[1], Tree::node(Rule::OverErased, vec![reading("li")]));

        let items = parse_content("°me-e-li\\°-ku");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rule(), Some(Rule::Word));
        let erasure = items[0].find_node(Rule::Erasure).unwrap();
        assert_eq!(erasure.children()[1], Tree::node(Rule::OverErased, vec![]));
    }

    #[test]
    fn test_erasure_must_be_joined() {
        assert!(content().then_ignore(end()).parse("me°-e\\li°-ku").is_err());
        assert!(content().then_ignore(end()).parse("me-°e\\li-°ku").is_err());
    }

    #[test]
    fn test_unknown_number_of_signs_after_gloss() {
        let items = parse_content("kur{d}...");
        assert_eq!(items.len(), 1);
        let parts = items[0].children();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].rule(), Some(Rule::Determinative));
        assert_eq!(parts[2], Tree::leaf(Terminal::UnknownNumberOfSigns, "..."));

        let items = parse_content("[{iti}...]");
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].children().len(), 2);
    }

    #[test]
    fn test_spaced_joiner_next_to_unknown_number_of_signs() {
        let items = parse_content("... -ad ad- ... -ad");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].children().len(), 3);
        assert_eq!(items[1].children().len(), 5);
        assert!(content().then_ignore(end()).parse("ku - ra").is_err());
    }

    #[test]
    fn test_in_word_newline() {
        let items = parse_content("mu-un;-e₃ ;");
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].children()[3],
            Tree::leaf(Terminal::InWordNewline, ";")
        );
        assert_eq!(items[0].children()[4], Tree::leaf(Terminal::Joiner, "-"));
        assert_eq!(items[1].rule(), Some(Rule::Divider));
    }

    #[test]
    fn test_greek_after_shift() {
        let items = parse_content("%grc α#β %akk ku");
        assert_eq!(items[0], Tree::leaf(Terminal::LanguageShift, "%grc"));
        assert_eq!(items[1].rule(), Some(Rule::GreekWord));
        assert_eq!(items[1].children().len(), 2);
        assert_eq!(items[2], Tree::leaf(Terminal::LanguageShift, "%akk"));
        assert_eq!(items[3].rule(), Some(Rule::Word));

        let items = parse_content("αβ");
        assert_eq!(items[0].rule(), Some(Rule::Word));
    }

    #[test]
    fn test_text_line() {
        let tree = text_line().parse("1'. ku").unwrap();
        assert_eq!(tree.rule(), Some(Rule::TextLine));
        assert!(text_line().parse("1'.").is_err());
    }
}
