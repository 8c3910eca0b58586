//! `//` parallel lines

use crate::transliteration::error::{LabelError, LineError};
use crate::transliteration::labels::{
    self, AbstractLineNumber, ColumnLabel, Label, ObjectLabel, SurfaceLabel,
};
use crate::transliteration::line::{ChapterName, ParallelLine};
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

use super::{abstract_line_number, parse_number, required_leaf, unexpected};

fn label(tree: &Tree, terminal: Terminal) -> Result<Option<Label>, LineError> {
    match tree.find_leaf(terminal) {
        Some(text) => Ok(labels::parse_labels(text)?.into_iter().next()),
        None => Ok(None),
    }
}

fn object(tree: &Tree) -> Result<Option<ObjectLabel>, LineError> {
    Ok(match label(tree, Terminal::ObjectLabel)? {
        Some(Label::Object(object)) => Some(object),
        Some(_) => unexpected(tree),
        None => None,
    })
}

fn category(category: &str) -> Result<u32, LineError> {
    if category == "0" {
        return Ok(0);
    }
    labels::from_roman(category)
        .ok_or_else(|| LabelError::InvalidRoman(category.to_string()).into())
}

fn surface(tree: &Tree) -> Result<Option<SurfaceLabel>, LineError> {
    Ok(match label(tree, Terminal::SurfaceLabel)? {
        Some(Label::Surface(surface)) => Some(surface),
        Some(_) => unexpected(tree),
        None => None,
    })
}

fn column(tree: &Tree) -> Result<Option<ColumnLabel>, LineError> {
    Ok(match label(tree, Terminal::ColumnLabel)? {
        Some(Label::Column(column)) => Some(column),
        Some(_) => unexpected(tree),
        None => None,
    })
}

fn line_number(tree: &Tree) -> Result<AbstractLineNumber, LineError> {
    tree.children()
        .iter()
        .find(|child| matches!(child.rule(), Some(Rule::LineNumber | Rule::LineNumberRange)))
        .map(abstract_line_number)
        .unwrap_or_else(|| unexpected(tree))
}

fn chapter(tree: &Tree) -> ChapterName {
    ChapterName {
        stage: required_leaf(tree, Terminal::Stage).to_string(),
        version: tree.find_leaf(Terminal::Version).unwrap_or_default().to_string(),
        name: required_leaf(tree, Terminal::Name).to_string(),
    }
}

pub(super) fn parallel_line(tree: &Tree) -> Result<ParallelLine, LineError> {
    let has_cf = tree.find_leaf(Terminal::Cf).is_some();
    Ok(match tree.rule() {
        Some(Rule::ParallelFragment) => ParallelLine::Fragment {
            has_cf,
            museum_number: required_leaf(tree, Terminal::MuseumNumber).to_string(),
            has_duplicates: tree.find_leaf(Terminal::Duplicates).is_some(),
            object: object(tree)?,
            surface: surface(tree)?,
            column: column(tree)?,
            line_number: line_number(tree)?,
        },
        Some(Rule::ParallelText) => ParallelLine::Text {
            has_cf,
            genre: required_leaf(tree, Terminal::Genre).to_string(),
            category: category(required_leaf(tree, Terminal::Category))?,
            index: parse_number(required_leaf(tree, Terminal::Number))?,
            chapter: tree.find_node(Rule::ChapterName).map(chapter),
            line_number: line_number(tree)?,
        },
        Some(Rule::ParallelComposition) => ParallelLine::Composition {
            has_cf,
            name: required_leaf(tree, Terminal::Name).to_string(),
            line_number: line_number(tree)?,
        },
        _ => unexpected(tree),
    })
}
