//! Folding parse trees into lines
//!
//! One reducer per line family. Trees come from the grammar, so a shape the reducers do
//! not know is a bug and panics; notation the model rejects (leftover legacy spellings,
//! illegal variants, bad labels) is returned as a [`LineError`].

mod at_line;
mod dollar_line;
mod note_line;
mod parallel_line;
mod text_line;

pub(crate) use note_line::markup;
pub(crate) use text_line::word;

use super::atf::Status;
use super::error::LineError;
use super::labels::{AbstractLineNumber, LineNumber, LineNumberRange};
use super::line::{ControlLine, Line};
use super::parser::tree::{Rule, Terminal, Tree};

pub(crate) fn transform_line(tree: &Tree) -> Result<Line, LineError> {
    match tree.rule() {
        Some(Rule::EmptyLine) => Ok(Line::Empty),
        Some(Rule::ControlLine) => Ok(Line::Control(control_line(tree))),
        Some(Rule::TextLine) => text_line::text_line(tree).map(Line::Text),
        Some(
            Rule::SealAtLine
            | Rule::HeadingAtLine
            | Rule::ColumnAtLine
            | Rule::DiscourseAtLine
            | Rule::SurfaceAtLine
            | Rule::ObjectAtLine
            | Rule::DivisionAtLine
            | Rule::DivAtLine
            | Rule::EndAtLine
            | Rule::CompositeAtLine
            | Rule::MilestoneAtLine,
        ) => at_line::at_line(tree).map(Line::At),
        Some(
            Rule::LooseDollarLine
            | Rule::ImageDollarLine
            | Rule::RulingDollarLine
            | Rule::SealDollarLine
            | Rule::StateDollarLine,
        ) => dollar_line::dollar_line(tree).map(Line::Dollar),
        Some(Rule::NoteLine) => note_line::note_line(tree).map(Line::Note),
        Some(Rule::TranslationLine) => note_line::translation_line(tree).map(Line::Translation),
        Some(Rule::ParallelFragment | Rule::ParallelText | Rule::ParallelComposition) => {
            parallel_line::parallel_line(tree).map(Line::Parallel)
        }
        _ => unexpected(tree),
    }
}

fn control_line(tree: &Tree) -> ControlLine {
    match (tree.find_leaf(Terminal::Prefix), tree.find_leaf(Terminal::Text)) {
        (Some(prefix), Some(content)) => ControlLine::new(prefix, content),
        _ => unexpected(tree),
    }
}

pub(crate) fn unexpected(tree: &Tree) -> ! {
    panic!("unexpected parse tree {}", tree)
}

/// Notation that only an enabled legacy pass would have accepted
pub(crate) fn legacy(notation: &str) -> LineError {
    LineError::Invalid(format!("Legacy notation \"{}\" is not accepted.", notation))
}

pub(crate) fn required_leaf(tree: &Tree, terminal: Terminal) -> &str {
    tree.find_leaf(terminal).unwrap_or_else(|| unexpected(tree))
}

pub(crate) fn parse_number(number: &str) -> Result<u32, LineError> {
    number
        .parse()
        .map_err(|_| LineError::Invalid(format!("Number {} is too large.", number)))
}

pub(crate) fn statuses(tree: &Tree) -> Vec<Status> {
    tree.leaves(Terminal::Status)
        .into_iter()
        .filter_map(Status::from_atf)
        .collect()
}

pub(crate) fn line_number(tree: &Tree) -> Result<LineNumber, LineError> {
    if tree.rule() != Some(Rule::LineNumber) {
        unexpected(tree);
    }
    let mut line_number = LineNumber::new(0);
    for child in tree.children() {
        match child {
            Tree::Leaf(Terminal::PrefixModifier, prefix) => {
                line_number.prefix_modifier = Some(prefix.clone())
            }
            Tree::Leaf(Terminal::Number, number) => line_number.number = parse_number(number)?,
            Tree::Leaf(Terminal::Prime, _) => line_number.has_prime = true,
            Tree::Leaf(Terminal::LegacyPrime, prime) => return Err(legacy(prime)),
            Tree::Leaf(Terminal::SuffixModifier, suffix) => {
                line_number.suffix_modifier = suffix.chars().next()
            }
            _ => unexpected(child),
        }
    }
    Ok(line_number)
}

pub(crate) fn abstract_line_number(tree: &Tree) -> Result<AbstractLineNumber, LineError> {
    match tree.rule() {
        Some(Rule::LineNumber) => line_number(tree).map(AbstractLineNumber::Single),
        Some(Rule::LineNumberRange) => match tree.children() {
            [start, end] => Ok(AbstractLineNumber::Range(LineNumberRange {
                start: line_number(start)?,
                end: line_number(end)?,
            })),
            _ => unexpected(tree),
        },
        _ => unexpected(tree),
    }
}
