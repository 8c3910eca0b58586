//! Structural `@` lines

use chumsky::prelude::*;

use super::common::{number, rest_of_line, space, status, tags, GrammarError, GrammarParser};
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

const DISCOURSE: [&str; 7] = [
    "catchline",
    "colophon",
    "date",
    "signatures",
    "signature",
    "summary",
    "witnesses",
];
const SURFACES: [&str; 9] = [
    "obverse", "reverse", "bottom", "edge", "left", "right", "top", "surface", "face",
];
const OBJECTS: [&str; 6] = ["tablet", "envelope", "prism", "bulla", "fragment", "object"];

fn text() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(|text| Tree::leaf(Terminal::Text, text))
}

fn free_text() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    rest_of_line().map(|text| Tree::leaf(Terminal::Text, text))
}

/// `<keyword><status>[ <text>]`
fn labelled(rule: Rule, keywords: &[&'static str]) -> GrammarParser<Tree> {
    tags(Terminal::Keyword, keywords)
        .then(status())
        .then(space().ignore_then(free_text()).or_not())
        .map(move |((keyword, status), text)| {
            let children = std::iter::once(keyword).chain(status).chain(text).collect();
            Tree::node(rule, children)
        })
        .then_ignore(end())
        .boxed()
}

/// `<keyword> <text>[ <number>]`
fn numbered_text(rule: Rule, keyword: &'static str) -> GrammarParser<Tree> {
    just(keyword)
        .ignore_then(space())
        .ignore_then(text())
        .then(space().ignore_then(number(Terminal::Number)).or_not())
        .then_ignore(end())
        .map(move |(text, number)| Tree::node(rule, std::iter::once(text).chain(number).collect()))
        .boxed()
}

pub(crate) fn at_line() -> GrammarParser<Tree> {
    let seal = just("seal ")
        .ignore_then(number(Terminal::Number))
        .then_ignore(end())
        .map(|number| Tree::node(Rule::SealAtLine, vec![number]));
    let heading = just('h')
        .ignore_then(space().or_not())
        .ignore_then(number(Terminal::Number))
        .then_ignore(end())
        .map(|number| Tree::node(Rule::HeadingAtLine, vec![number]));
    let column = just("column ")
        .ignore_then(number(Terminal::Number))
        .then(status())
        .then_ignore(end())
        .map(|(number, status)| {
            Tree::node(
                Rule::ColumnAtLine,
                std::iter::once(number).chain(status).collect(),
            )
        });
    let discourse = tags(Terminal::Keyword, &DISCOURSE)
        .then_ignore(end())
        .map(|keyword| Tree::node(Rule::DiscourseAtLine, vec![keyword]));
    let end_of = just("end ")
        .ignore_then(free_text())
        .then_ignore(end())
        .map(|text| Tree::node(Rule::EndAtLine, vec![text]));
    let composite = just("composite")
        .then_ignore(end())
        .map(|_| Tree::node(Rule::CompositeAtLine, vec![]));
    let milestone = just("milestone ")
        .ignore_then(free_text())
        .then_ignore(end())
        .map(|text| Tree::node(Rule::MilestoneAtLine, vec![text]));

    just('@')
        .ignore_then(choice((
            seal.boxed(),
            heading.boxed(),
            column.boxed(),
            discourse.boxed(),
            labelled(Rule::SurfaceAtLine, &SURFACES),
            labelled(Rule::ObjectAtLine, &OBJECTS),
            numbered_text(Rule::DivisionAtLine, "m=division"),
            numbered_text(Rule::DivAtLine, "div"),
            end_of.boxed(),
            composite.boxed(),
            milestone.boxed(),
        )))
        .boxed()
}
