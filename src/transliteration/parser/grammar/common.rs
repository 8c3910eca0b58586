//! Building blocks shared by the line grammars

use chumsky::prelude::*;

use crate::transliteration::atf;
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

pub(crate) type GrammarError = Simple<char>;
pub(crate) type GrammarParser<O> = BoxedParser<'static, char, O, GrammarError>;

/// A literal, kept as a leaf of the given kind
pub(crate) fn tag(
    terminal: Terminal,
    text: &'static str,
) -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    just(text).map(move |matched: &str| Tree::leaf(terminal, matched))
}

fn fail<O: 'static>() -> GrammarParser<O> {
    empty()
        .try_map(|_, span| Err(Simple::custom(span, "no alternative matched")))
        .boxed()
}

/// The first literal that matches, tried in the given order
pub(crate) fn tags(terminal: Terminal, alternatives: &[&'static str]) -> GrammarParser<Tree> {
    alternatives
        .iter()
        .fold(fail(), |parser, &alternative| {
            parser.or(tag(terminal, alternative)).boxed()
        })
}

pub(crate) fn space() -> impl Parser<char, (), Error = GrammarError> + Clone {
    just(' ').ignored()
}

pub(crate) fn spaces() -> impl Parser<char, (), Error = GrammarError> + Clone {
    just(' ').repeated().at_least(1).ignored()
}

/// A space, or the end of the line
pub(crate) fn boundary() -> impl Parser<char, (), Error = GrammarError> + Clone {
    space().or(end())
}

pub(crate) fn rest_of_line() -> impl Parser<char, String, Error = GrammarError> + Clone {
    filter(|_: &char| true).repeated().collect::<String>()
}

pub(crate) fn number(terminal: Terminal) -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    chumsky::text::int(10).map(move |digits: String| Tree::leaf(terminal, digits))
}

/// Status marks of labels: `'`, `?`, `!` and `*`
pub(crate) fn status() -> impl Parser<char, Vec<Tree>, Error = GrammarError> + Clone {
    one_of("'?!*")
        .map(|mark: char| Tree::leaf(Terminal::Status, mark))
        .repeated()
}

fn is_legacy_prime(character: &char) -> bool {
    matches!(character, '′' | '’')
}

/// `[<prefix>+]<number>[']<suffix>`
pub(crate) fn line_number() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    let prefix = filter(|c: &char| c.is_ascii_alphabetic())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .then_ignore(just('+'))
        .map(|prefix| Tree::leaf(Terminal::PrefixModifier, prefix));
    let prime = just('\'')
        .map(|prime| Tree::leaf(Terminal::Prime, prime))
        .or(filter(is_legacy_prime).map(|prime| Tree::leaf(Terminal::LegacyPrime, prime)));
    let suffix = filter(|c: &char| c.is_ascii_alphabetic())
        .map(|suffix| Tree::leaf(Terminal::SuffixModifier, suffix));

    prefix
        .or_not()
        .then(number(Terminal::Number))
        .then(prime.or_not())
        .then(suffix.or_not())
        .map(|(((prefix, number), prime), suffix)| {
            let children = prefix
                .into_iter()
                .chain(Some(number))
                .chain(prime)
                .chain(suffix)
                .collect();
            Tree::node(Rule::LineNumber, children)
        })
}

/// A line number or `<line number>-<line number>`
pub(crate) fn line_number_or_range() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    line_number()
        .then(just('-').ignore_then(line_number()).or_not())
        .map(|(start, end)| match end {
            Some(end) => Tree::node(Rule::LineNumberRange, vec![start, end]),
            None => start,
        })
}

pub(crate) fn is_reading_character(character: &char) -> bool {
    *character == 'ʾ'
        || (character.is_lowercase() && *character != 'x' && !atf::is_subscript(*character))
}

pub(crate) fn is_logogram_character(character: &char) -> bool {
    *character == 'ʾ' || (character.is_uppercase() && *character != 'X')
}

/// Markup text with backslash escapes, unescaped
pub(crate) fn escaped_text() -> impl Parser<char, String, Error = GrammarError> + Clone {
    just('\\')
        .ignore_then(filter(|_: &char| true))
        .or(none_of("@{}\\\n"))
        .repeated()
        .collect::<String>()
}
