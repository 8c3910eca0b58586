//! Structural `@` lines

use crate::transliteration::atf::{Discourse, Object, Surface};
use crate::transliteration::error::LineError;
use crate::transliteration::labels::{ColumnLabel, ObjectLabel, SurfaceLabel};
use crate::transliteration::line::{AtLine, CompositeAtLine};
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

use super::{parse_number, required_leaf, statuses, unexpected};

fn number(tree: &Tree) -> Result<u32, LineError> {
    parse_number(required_leaf(tree, Terminal::Number))
}

fn optional_number(tree: &Tree) -> Result<Option<u32>, LineError> {
    tree.find_leaf(Terminal::Number).map(parse_number).transpose()
}

fn text(tree: &Tree) -> String {
    required_leaf(tree, Terminal::Text).to_string()
}

/// Surfaces and objects that have no name of their own must be given one
fn label_text(tree: &Tree, keyword: &str, required: bool) -> Result<String, LineError> {
    match tree.find_leaf(Terminal::Text) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ if required => Err(LineError::Invalid(format!("@{} requires a text.", keyword))),
        _ => Ok(String::new()),
    }
}

pub(super) fn at_line(tree: &Tree) -> Result<AtLine, LineError> {
    let rule = tree.rule().unwrap_or_else(|| unexpected(tree));
    Ok(match rule {
        Rule::SealAtLine => AtLine::Seal(number(tree)?),
        Rule::HeadingAtLine => AtLine::Heading(number(tree)?),
        Rule::ColumnAtLine => AtLine::Column(ColumnLabel::new(number(tree)?, statuses(tree))?),
        Rule::DiscourseAtLine => {
            let keyword = required_leaf(tree, Terminal::Keyword);
            AtLine::Discourse(Discourse::from_atf(keyword).unwrap_or_else(|| unexpected(tree)))
        }
        Rule::SurfaceAtLine => {
            let keyword = required_leaf(tree, Terminal::Keyword);
            let surface = Surface::from_atf(keyword).unwrap_or_else(|| unexpected(tree));
            let required = matches!(surface, Surface::Surface | Surface::Face);
            let text = label_text(tree, keyword, required)?;
            AtLine::Surface(SurfaceLabel::new(surface, statuses(tree), &text)?)
        }
        Rule::ObjectAtLine => {
            let keyword = required_leaf(tree, Terminal::Keyword);
            let object = Object::from_atf(keyword).unwrap_or_else(|| unexpected(tree));
            let required = matches!(object, Object::Fragment | Object::Object);
            let text = label_text(tree, keyword, required)?;
            AtLine::Object(ObjectLabel::new(object, statuses(tree), &text)?)
        }
        Rule::DivisionAtLine => AtLine::Division {
            text: text(tree),
            number: optional_number(tree)?,
        },
        Rule::DivAtLine => AtLine::Composite(CompositeAtLine::Div {
            text: text(tree),
            number: optional_number(tree)?,
        }),
        Rule::EndAtLine => AtLine::Composite(CompositeAtLine::End { text: text(tree) }),
        Rule::CompositeAtLine => AtLine::Composite(CompositeAtLine::Composite),
        Rule::MilestoneAtLine => AtLine::Composite(CompositeAtLine::Milestone { text: text(tree) }),
        _ => unexpected(tree),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::atf::Status;

    #[test]
    fn test_surface() {
        let tree = Tree::node(
            Rule::SurfaceAtLine,
            vec![
                Tree::leaf(Terminal::Keyword, "obverse"),
                Tree::leaf(Terminal::Status, "'"),
            ],
        );
        assert_eq!(
            at_line(&tree),
            Ok(AtLine::Surface(
                SurfaceLabel::new(Surface::Obverse, vec![Status::Prime], "").unwrap()
            ))
        );
    }

    #[test]
    fn test_face_requires_text() {
        let tree = Tree::node(Rule::SurfaceAtLine, vec![Tree::leaf(Terminal::Keyword, "face")]);
        assert!(matches!(at_line(&tree), Err(LineError::Invalid(_))));
    }

    #[test]
    fn test_duplicate_column_status() {
        let tree = Tree::node(
            Rule::ColumnAtLine,
            vec![
                Tree::leaf(Terminal::Number, "2"),
                Tree::leaf(Terminal::Status, "?"),
                Tree::leaf(Terminal::Status, "?"),
            ],
        );
        assert!(at_line(&tree).is_err());
    }
}
