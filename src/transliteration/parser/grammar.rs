//! Line grammars
//!
//! One chumsky parser per line kind. Each parser takes a whole line, sigil included, and
//! produces a [`Tree`]. Building them is not free, so [`Grammar::new`] is called once per
//! parser context and the result reused for every line.

mod at_line;
mod common;
mod dollar_line;
mod note_line;
mod parallel_line;
mod text_line;

use chumsky::prelude::*;

pub(crate) use common::{GrammarError, GrammarParser};

use super::tree::{Rule, Terminal, Tree};
use common::{rest_of_line, tags};

/// `#`, `=:` or `&` followed by anything
fn control_line() -> GrammarParser<Tree> {
    tags(Terminal::Prefix, &["=:", "#", "&"])
        .then(rest_of_line())
        .map(|(prefix, content)| {
            Tree::node(Rule::ControlLine, vec![prefix, Tree::leaf(Terminal::Text, content)])
        })
        .boxed()
}

pub(crate) struct Grammar {
    pub text_line: GrammarParser<Tree>,
    pub at_line: GrammarParser<Tree>,
    pub dollar_line: GrammarParser<Tree>,
    pub note_line: GrammarParser<Tree>,
    pub translation_line: GrammarParser<Tree>,
    pub parallel_line: GrammarParser<Tree>,
    pub control_line: GrammarParser<Tree>,
    /// A single word, for annotation payloads
    pub word: GrammarParser<Tree>,
    /// Free standing markup, paragraphs allowed
    pub markup: GrammarParser<Tree>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar {
            text_line: text_line::text_line(),
            at_line: at_line::at_line(),
            dollar_line: dollar_line::dollar_line(),
            note_line: note_line::note_line(),
            translation_line: note_line::translation_line(),
            parallel_line: parallel_line::parallel_line(),
            control_line: control_line(),
            word: text_line::word().then_ignore(end()).boxed(),
            markup: note_line::markup(),
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
