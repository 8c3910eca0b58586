//! `$` lines: rulings, seals, images, loose comments and states

use chumsky::prelude::*;

use super::common::{boundary, number, rest_of_line, space, tags, GrammarError, GrammarParser};
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

const QUALIFICATIONS: [&str; 3] = ["at least", "at most", "about"];
const EXTENTS: [&str; 7] = [
    "several",
    "some",
    "rest of",
    "start of",
    "beginning of",
    "middle of",
    "end of",
];
/// Longer keywords come first so that `columns` is not read as `column`
const SCOPES: [&str; 23] = [
    "obverse", "reverse", "bottom", "edge", "left", "right", "top", "surface", "face", "tablet",
    "envelope", "prism", "bulla", "fragment", "object", "columns", "column", "lines", "line",
    "cases", "case", "side", "excerpt",
];
/// Scopes that may name the part they refer to, as in `surface stone`
const NAMED_SCOPES: [&str; 5] = ["surface", "face", "edge", "object", "fragment"];
const STATES: [&str; 8] = [
    "blank",
    "broken",
    "effaced",
    "illegible",
    "missing",
    "traces",
    "omitted",
    "continues",
];
const STATUSES: [&str; 4] = ["!?", "*", "?", "!"];

/// Strip the closing parenthesis a loose or image line ends with
fn parenthesized(text: String, span: std::ops::Range<usize>) -> Result<String, GrammarError> {
    text.strip_suffix(')')
        .map(str::to_string)
        .ok_or_else(|| Simple::custom(span, "expected )"))
}

fn state_line() -> GrammarParser<Tree> {
    let extent_number = number(Terminal::Extent)
        .then(just('-').ignore_then(chumsky::text::int(10)).or_not())
        .map(|(start, end)| match (start, end) {
            (Tree::Leaf(terminal, start), Some(end)) => {
                Tree::Leaf(terminal, format!("{}-{}", start, end))
            }
            (start, _) => start,
        });
    let part = |parser: GrammarParser<Tree>| parser.then_ignore(boundary()).or_not();
    let scope_text = filter(|c: &char| *c != ' ')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|text, span| {
            if STATES.contains(&text.as_str()) || STATUSES.contains(&text.as_str()) {
                Err(Simple::custom(span, "expected the name of a scope"))
            } else {
                Ok(Tree::leaf(Terminal::Text, text))
            }
        });
    let scope = tags(Terminal::Scope, &NAMED_SCOPES)
        .then(space().ignore_then(scope_text).or_not())
        .map(|(scope, text)| std::iter::once(scope).chain(text).collect::<Vec<_>>())
        .or(tags(Terminal::Scope, &SCOPES).map(|scope| vec![scope]))
        .then_ignore(boundary())
        .or_not();

    part(tags(Terminal::Qualification, &QUALIFICATIONS))
        .then(part(extent_number.or(tags(Terminal::Extent, &EXTENTS)).boxed()))
        .then(scope)
        .then(part(tags(Terminal::State, &STATES)))
        .then(part(tags(Terminal::DollarStatus, &STATUSES)))
        .then_ignore(end())
        .try_map(|((((qualification, extent), scope), state), status), span| {
            let parts: Vec<Tree> = qualification
                .into_iter()
                .chain(extent)
                .chain(scope.into_iter().flatten())
                .chain(state)
                .chain(status)
                .collect();
            if parts.is_empty() {
                Err(Simple::custom(span, "empty state"))
            } else {
                Ok(Tree::node(Rule::StateDollarLine, parts))
            }
        })
        .boxed()
}

pub(crate) fn dollar_line() -> GrammarParser<Tree> {
    let image = just("(image ")
        .ignore_then(number(Terminal::Number))
        .then(
            filter(|c: &char| c.is_ascii_lowercase())
                .map(|letter| Tree::leaf(Terminal::Letter, letter))
                .or_not(),
        )
        .then_ignore(just(" = "))
        .then(rest_of_line().try_map(parenthesized))
        .then_ignore(end())
        .map(|((number, letter), text)| {
            let children = std::iter::once(number)
                .chain(letter)
                .chain(Some(Tree::leaf(Terminal::Text, text)))
                .collect();
            Tree::node(Rule::ImageDollarLine, children)
        });
    let loose = just('(')
        .ignore_then(rest_of_line().try_map(parenthesized))
        .then_ignore(end())
        .map(|text| Tree::node(Rule::LooseDollarLine, vec![Tree::leaf(Terminal::Text, text)]));
    let ruling = tags(Terminal::Keyword, &["single", "double", "triple"])
        .then_ignore(just(" ruling"))
        .then(space().ignore_then(tags(Terminal::DollarStatus, &STATUSES)).or_not())
        .then_ignore(end())
        .map(|(ruling, status)| {
            Tree::node(
                Rule::RulingDollarLine,
                std::iter::once(ruling).chain(status).collect(),
            )
        });
    let seal = just("seal ")
        .ignore_then(number(Terminal::Number))
        .then_ignore(end())
        .map(|number| Tree::node(Rule::SealDollarLine, vec![number]));

    just('$')
        .ignore_then(space().repeated())
        .ignore_then(choice((
            image.boxed(),
            loose.boxed(),
            ruling.boxed(),
            seal.boxed(),
            state_line(),
        )))
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_line() {
        assert_eq!(
            dollar_line().parse("$ at least 2-4 lines broken ?"),
            Ok(Tree::node(
                Rule::StateDollarLine,
                vec![
                    Tree::leaf(Terminal::Qualification, "at least"),
                    Tree::leaf(Terminal::Extent, "2-4"),
                    Tree::leaf(Terminal::Scope, "lines"),
                    Tree::leaf(Terminal::State, "broken"),
                    Tree::leaf(Terminal::DollarStatus, "?"),
                ]
            ))
        );
    }

    #[test]
    fn test_named_scope() {
        assert_eq!(
            dollar_line().parse("$ several surface stone blank *"),
            Ok(Tree::node(
                Rule::StateDollarLine,
                vec![
                    Tree::leaf(Terminal::Extent, "several"),
                    Tree::leaf(Terminal::Scope, "surface"),
                    Tree::leaf(Terminal::Text, "stone"),
                    Tree::leaf(Terminal::State, "blank"),
                    Tree::leaf(Terminal::DollarStatus, "*"),
                ]
            ))
        );
        let fragment = dollar_line().parse("$ at least 1 fragment a").unwrap();
        assert_eq!(fragment.find_leaf(Terminal::Scope), Some("fragment"));
        assert_eq!(fragment.find_leaf(Terminal::Text), Some("a"));
    }

    #[test]
    fn test_state_after_unnamed_scope() {
        let tree = dollar_line().parse("$ at least 1 surface missing").unwrap();
        assert_eq!(tree.find_leaf(Terminal::Text), None);
        assert_eq!(tree.find_leaf(Terminal::State), Some("missing"));
    }

    #[test]
    fn test_end_of_side() {
        let tree = dollar_line().parse("$ end of side").unwrap();
        assert_eq!(tree.find_leaf(Terminal::Extent), Some("end of"));
        assert_eq!(tree.find_leaf(Terminal::Scope), Some("side"));
    }

    #[test]
    fn test_image_and_loose() {
        let image = dollar_line().parse("$ (image 1a = great)").unwrap();
        assert_eq!(image.rule(), Some(Rule::ImageDollarLine));
        assert_eq!(image.find_leaf(Terminal::Letter), Some("a"));
        assert_eq!(image.find_leaf(Terminal::Text), Some("great"));

        let loose = dollar_line().parse("$ (end of side)").unwrap();
        assert_eq!(loose.find_leaf(Terminal::Text), Some("end of side"));
    }

    #[test]
    fn test_ruling_and_seal() {
        let ruling = dollar_line().parse("$ double ruling *").unwrap();
        assert_eq!(ruling.find_leaf(Terminal::DollarStatus), Some("*"));
        let seal = dollar_line().parse("$ seal 1").unwrap();
        assert_eq!(seal.rule(), Some(Rule::SealDollarLine));
    }

    #[test]
    fn test_empty_state_is_rejected() {
        assert!(dollar_line().parse("$ ").is_err());
        assert!(dollar_line().parse("$ lines lines").is_err());
    }
}
