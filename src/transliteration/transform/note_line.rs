//! Notes, translations and markup

use crate::transliteration::error::LineError;
use crate::transliteration::language::Language;
use crate::transliteration::line::{NoteLine, TranslationLine, DEFAULT_TRANSLATION_LANGUAGE};
use crate::transliteration::markup::MarkupPart;
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

use super::text_line::tokens;
use super::{abstract_line_number, required_leaf, unexpected};

fn markup_part(part: &Tree) -> Result<MarkupPart, LineError> {
    Ok(match part {
        Tree::Leaf(Terminal::MarkupString, text) => MarkupPart::String(text.clone()),
        Tree::Leaf(Terminal::Emphasis, text) => MarkupPart::Emphasis(text.clone()),
        Tree::Leaf(Terminal::Bold, text) => MarkupPart::Bold(text.clone()),
        Tree::Leaf(Terminal::Superscript, text) => MarkupPart::Superscript(text.clone()),
        Tree::Leaf(Terminal::Subscript, text) => MarkupPart::Subscript(text.clone()),
        Tree::Leaf(Terminal::Paragraph, _) => MarkupPart::Paragraph,
        Tree::Node(Rule::Bibliography, _) => MarkupPart::Bibliography {
            id: required_leaf(part, Terminal::BibliographyId).to_string(),
            pages: part
                .find_leaf(Terminal::BibliographyPages)
                .unwrap_or_default()
                .to_string(),
        },
        Tree::Node(Rule::UrlLink, _) => MarkupPart::Url {
            url: required_leaf(part, Terminal::Url).to_string(),
            text: part.find_leaf(Terminal::UrlText).unwrap_or_default().to_string(),
        },
        Tree::Node(Rule::LanguagePart, _) => {
            let language = Language::from_markup_code(required_leaf(part, Terminal::Language))
                .unwrap_or_else(|| unexpected(part));
            let content = part.find_node(Rule::Content).unwrap_or_else(|| unexpected(part));
            MarkupPart::language(language, &tokens(content)?)
        }
        _ => unexpected(part),
    })
}

pub(crate) fn markup(tree: &Tree) -> Result<Vec<MarkupPart>, LineError> {
    if tree.rule() != Some(Rule::Markup) {
        unexpected(tree);
    }
    tree.children().iter().map(markup_part).collect()
}

fn line_markup(tree: &Tree) -> Result<Vec<MarkupPart>, LineError> {
    markup(tree.find_node(Rule::Markup).unwrap_or_else(|| unexpected(tree)))
}

pub(super) fn note_line(tree: &Tree) -> Result<NoteLine, LineError> {
    line_markup(tree).map(NoteLine::new)
}

pub(super) fn translation_line(tree: &Tree) -> Result<TranslationLine, LineError> {
    let language = tree
        .find_leaf(Terminal::Language)
        .unwrap_or(DEFAULT_TRANSLATION_LANGUAGE);
    let extent = tree
        .children()
        .iter()
        .find(|child| matches!(child.rule(), Some(Rule::LineNumber | Rule::LineNumberRange)))
        .map(abstract_line_number)
        .transpose()?;
    Ok(TranslationLine::new(line_markup(tree)?, language, extent))
}
