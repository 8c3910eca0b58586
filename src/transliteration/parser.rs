//! The ATF parser context
//!
//! [`AtfParser`] turns raw ATF into lines and documents. A line is classified by its
//! sigil, parsed by the matching grammar, rewritten by the configured legacy passes and
//! folded into a [`Line`]. Text lines are then checked for balanced enclosures.
//!
//! The grammar is built on first use and kept for the lifetime of the context, so one
//! parser should be reused for many lines. Contexts are not shared between threads;
//! each worker builds its own.
//!
//! # Examples
//!
//! ```
//! use atf::transliteration::AtfParser;
//!
//! let parser = AtfParser::default();
//! let text = parser.parse_atf("1. šu gid₂\n2. %sux kur").unwrap();
//! assert_eq!(text.atf(), "1. šu gid₂\n2. %sux kur");
//! ```

pub mod tree;

mod grammar;
mod sigil;

use chumsky::Parser;
use log::{debug, info, warn};
use once_cell::unsync::OnceCell;

use super::atf::ATF_PARSER_VERSION;
use super::config::ParserConfig;
use super::enclosure;
use super::error::{
    DuplicateLabelError, ErrorEntry, LineError, ParseError, SyntaxError, TransliterationError,
};
use super::legacy::apply_legacy_passes;
use super::line::Line;
use super::markup::MarkupPart;
use super::text::Text;
use super::tokens::Token;
use super::transform;
use grammar::{Grammar, GrammarError, GrammarParser};
use sigil::{classify, LineKind};
use tree::Tree;

const SYNTAX_ERROR_PREFIX: &str = "Invalid line: ";
const CONTEXT_WIDTH: usize = 6;

/// A parsed line together with whether a legacy pass had to rewrite it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub line: Line,
    pub legacy_found: bool,
}

/// Long-lived parsing context
pub struct AtfParser {
    config: ParserConfig,
    grammar: OnceCell<Grammar>,
}

impl AtfParser {
    pub fn new(config: ParserConfig) -> Self {
        AtfParser {
            config,
            grammar: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn grammar(&self) -> &Grammar {
        self.grammar.get_or_init(|| {
            debug!("building the ATF grammar for config {}", self.config.name);
            Grammar::new()
        })
    }

    fn parse_tree(&self, parser: &GrammarParser<Tree>, input: &str) -> Result<Tree, LineError> {
        let tree = parser
            .parse(input)
            .map_err(|errors| syntax_error(input, &errors))?;
        Ok(tree)
    }

    /// Parse one line, reporting whether legacy notation was rewritten
    pub fn parse_line_report(&self, line: &str) -> Result<ParsedLine, LineError> {
        let kind = classify(line);
        debug!("line {:?} classified as {:?}", line, kind);
        let grammar = self.grammar();
        let parser = match kind {
            LineKind::Empty => {
                return Ok(ParsedLine {
                    line: Line::Empty,
                    legacy_found: false,
                })
            }
            LineKind::Text => &grammar.text_line,
            LineKind::At => &grammar.at_line,
            LineKind::Dollar => &grammar.dollar_line,
            LineKind::Note => &grammar.note_line,
            LineKind::Translation => &grammar.translation_line,
            LineKind::Parallel => &grammar.parallel_line,
            LineKind::Control => &grammar.control_line,
        };
        let tree = self.parse_tree(parser, line)?;
        let (tree, legacy_found) = apply_legacy_passes(&self.config.legacy, tree);
        let line = transform::transform_line(&tree)?;
        if let Line::Text(text_line) = &line {
            enclosure::validate(text_line.content())?;
        }
        Ok(ParsedLine { line, legacy_found })
    }

    pub fn parse_line(&self, line: &str) -> Result<Line, LineError> {
        self.parse_line_report(line).map(|parsed| parsed.line)
    }

    /// Parse a whole document, collecting the errors of every line
    pub fn parse_atf(&self, atf: &str) -> Result<Text, ParseError> {
        let mut lines: Vec<&str> = atf.split('\n').collect();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }

        let mut parsed = Vec::with_capacity(lines.len());
        let mut errors = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            match self.parse_line_report(line) {
                Ok(ParsedLine { line, legacy_found }) => {
                    if legacy_found {
                        info!("line {} uses legacy notation", index + 1);
                    }
                    parsed.push(line);
                }
                Err(error) => errors.push(ErrorEntry::new(error.to_string(), index + 1)),
            }
        }
        if !errors.is_empty() {
            warn!("transliteration rejected with {} error(s)", errors.len());
            return Err(TransliterationError { errors }.into());
        }

        let text = Text::new(parsed, ATF_PARSER_VERSION);
        let duplicates = text.duplicate_labels();
        if !duplicates.is_empty() {
            warn!("transliteration rejected with duplicate labels");
            return Err(DuplicateLabelError {
                duplicates: duplicates.iter().map(|label| label.describe()).collect(),
            }
            .into());
        }
        info!(
            "parsed {} line(s) with parser version {}",
            text.lines().len(),
            text.parser_version()
        );
        Ok(text)
    }

    /// Parse a single word as written inside a text line
    pub fn parse_word(&self, atf: &str) -> Result<Token, LineError> {
        let tree = self.parse_tree(&self.grammar().word, atf)?;
        let (tree, _) = apply_legacy_passes(&self.config.legacy, tree);
        transform::word(&tree)
    }

    /// Parse free standing markup, paragraph breaks included
    pub fn parse_markup(&self, markup: &str) -> Result<Vec<MarkupPart>, LineError> {
        let tree = self.parse_tree(&self.grammar().markup, markup)?;
        let (tree, _) = apply_legacy_passes(&self.config.legacy, tree);
        transform::markup(&tree)
    }
}

impl Default for AtfParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl Clone for AtfParser {
    fn clone(&self) -> Self {
        Self::new(self.config.clone())
    }
}

/// Describe the furthest failure with a context window and a caret under it
fn syntax_error(input: &str, errors: &[GrammarError]) -> SyntaxError {
    let position = errors
        .iter()
        .map(|error| error.span().start)
        .max()
        .unwrap_or(0);
    let characters: Vec<char> = input.chars().collect();
    let position = position.min(characters.len());
    let before: String = characters[position.saturating_sub(CONTEXT_WIDTH)..position]
        .iter()
        .collect();
    let after: String = characters[position..(position + CONTEXT_WIDTH).min(characters.len())]
        .iter()
        .collect();
    let indent = " ".repeat(SYNTAX_ERROR_PREFIX.chars().count() + before.chars().count());
    SyntaxError {
        description: format!("{}{}{}\n{}^\n", SYNTAX_ERROR_PREFIX, before, after, indent),
        position,
    }
}
