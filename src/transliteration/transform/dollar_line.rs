//! `$` lines

use crate::transliteration::atf::{Object, Surface};
use crate::transliteration::error::LineError;
use crate::transliteration::line::{
    DollarLine, DollarStatus, Extent, Qualification, Ruling, Scope, ScopeContainer, State,
    StateDollarLine,
};
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

use super::{parse_number, required_leaf, unexpected};

fn extent(extent: &str) -> Result<Extent, LineError> {
    if let Some(keyword) = Extent::KEYWORDS.iter().find(|keyword| keyword.atf() == extent) {
        return Ok(*keyword);
    }
    match extent.split_once('-') {
        Some((start, end)) => Ok(Extent::Range(parse_number(start)?, parse_number(end)?)),
        None => Ok(Extent::Number(parse_number(extent)?)),
    }
}

fn scope(scope: &str) -> Option<ScopeContainer> {
    Surface::from_atf(scope)
        .map(|surface| ScopeContainer::Surface(surface, String::new()))
        .or_else(|| Object::from_atf(scope).map(|object| ScopeContainer::Object(object, String::new())))
        .or_else(|| {
            Scope::ALL
                .into_iter()
                .find(|candidate| candidate.atf() == scope)
                .map(ScopeContainer::Scope)
        })
}

fn state_line(tree: &Tree) -> Result<StateDollarLine, LineError> {
    let mut state = StateDollarLine::default();
    for part in tree.children() {
        match part {
            Tree::Leaf(Terminal::Qualification, text) => {
                state.qualification = Qualification::from_atf(text)
            }
            Tree::Leaf(Terminal::Extent, text) => state.extent = Some(extent(text)?),
            Tree::Leaf(Terminal::Scope, text) => state.scope = scope(text),
            Tree::Leaf(Terminal::Text, name) => match state.scope.as_mut() {
                Some(ScopeContainer::Surface(_, text)) | Some(ScopeContainer::Object(_, text)) => {
                    *text = name.clone()
                }
                _ => unexpected(part),
            },
            Tree::Leaf(Terminal::State, text) => {
                state.state = State::ALL.into_iter().find(|candidate| candidate.atf() == text.as_str())
            }
            Tree::Leaf(Terminal::DollarStatus, text) => state.status = DollarStatus::from_atf(text),
            _ => unexpected(part),
        }
    }
    Ok(state)
}

pub(super) fn dollar_line(tree: &Tree) -> Result<DollarLine, LineError> {
    let rule = tree.rule().unwrap_or_else(|| unexpected(tree));
    Ok(match rule {
        Rule::LooseDollarLine => DollarLine::Loose(required_leaf(tree, Terminal::Text).to_string()),
        Rule::ImageDollarLine => DollarLine::Image {
            number: parse_number(required_leaf(tree, Terminal::Number))?,
            letter: tree
                .find_leaf(Terminal::Letter)
                .and_then(|letter| letter.chars().next()),
            text: required_leaf(tree, Terminal::Text).to_string(),
        },
        Rule::RulingDollarLine => DollarLine::Ruling {
            number: Ruling::from_atf(required_leaf(tree, Terminal::Keyword))
                .unwrap_or_else(|| unexpected(tree)),
            status: tree
                .find_leaf(Terminal::DollarStatus)
                .and_then(DollarStatus::from_atf),
        },
        Rule::SealDollarLine => DollarLine::Seal(parse_number(required_leaf(tree, Terminal::Number))?),
        Rule::StateDollarLine => DollarLine::State(state_line(tree)?),
        _ => unexpected(tree),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_line() {
        let tree = Tree::node(
            Rule::StateDollarLine,
            vec![
                Tree::leaf(Terminal::Extent, "2-4"),
                Tree::leaf(Terminal::Scope, "columns"),
                Tree::leaf(Terminal::State, "broken"),
            ],
        );
        assert_eq!(
            dollar_line(&tree),
            Ok(DollarLine::State(StateDollarLine {
                extent: Some(Extent::Range(2, 4)),
                scope: Some(ScopeContainer::Scope(Scope::Columns)),
                state: Some(State::Broken),
                ..StateDollarLine::default()
            }))
        );
    }

    #[test]
    fn test_surface_scope() {
        let tree = Tree::node(
            Rule::StateDollarLine,
            vec![
                Tree::leaf(Terminal::Extent, "end of"),
                Tree::leaf(Terminal::Scope, "obverse"),
            ],
        );
        let line = dollar_line(&tree).unwrap();
        assert_eq!(line.atf(), "$ end of obverse");
        assert!(line.is_end_of());
    }

    #[test]
    fn test_named_scope() {
        let tree = Tree::node(
            Rule::StateDollarLine,
            vec![
                Tree::leaf(Terminal::Qualification, "at least"),
                Tree::leaf(Terminal::Extent, "1"),
                Tree::leaf(Terminal::Scope, "fragment"),
                Tree::leaf(Terminal::Text, "a"),
            ],
        );
        let line = dollar_line(&tree).unwrap();
        assert_eq!(
            line,
            DollarLine::State(StateDollarLine {
                qualification: Some(Qualification::AtLeast),
                extent: Some(Extent::Number(1)),
                scope: Some(ScopeContainer::Object(Object::Fragment, "a".into())),
                ..StateDollarLine::default()
            })
        );
        assert_eq!(line.atf(), "$ at least 1 fragment a");
    }

    #[test]
    fn test_image() {
        let tree = Tree::node(
            Rule::ImageDollarLine,
            vec![
                Tree::leaf(Terminal::Number, "1"),
                Tree::leaf(Terminal::Letter, "a"),
                Tree::leaf(Terminal::Text, "great"),
            ],
        );
        assert_eq!(dollar_line(&tree).unwrap().atf(), "$ (image 1a = great)");
    }
}
