//! Notes, translations and the markup they are written in

use chumsky::prelude::*;

use super::common::{escaped_text, line_number_or_range, space, GrammarError, GrammarParser};
use super::text_line::content;
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

fn styled(
    terminal: Terminal,
    opening: &'static str,
) -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    escaped_text()
        .delimited_by(just(opening), just('}'))
        .map(move |text| Tree::leaf(terminal, text))
}

fn bibliography() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    let id = escaped_text().map(|id| Tree::leaf(Terminal::BibliographyId, id));
    let pages = just('@')
        .ignore_then(escaped_text())
        .map(|pages| Tree::leaf(Terminal::BibliographyPages, pages));
    id.then(pages.or_not())
        .delimited_by(just("@bib{"), just('}'))
        .map(|(id, pages)| Tree::node(Rule::Bibliography, std::iter::once(id).chain(pages).collect()))
}

fn url() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    let address = none_of("}")
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just("@url{"), just('}'))
        .map(|url| Tree::leaf(Terminal::Url, url));
    let text = escaped_text()
        .delimited_by(just('{'), just('}'))
        .map(|text| Tree::leaf(Terminal::UrlText, text));
    address
        .then(text.or_not())
        .map(|(url, text)| Tree::node(Rule::UrlLink, std::iter::once(url).chain(text).collect()))
}

fn language_part() -> GrammarParser<Tree> {
    let opening = choice((just("@akk{"), just("@sux{"), just("@es{")))
        .map(|opening: &str| Tree::leaf(Terminal::Language, opening.trim_matches(|c: char| c == '@' || c == '{')));
    opening
        .then(content())
        .then_ignore(just('}'))
        .map(|(language, content)| Tree::node(Rule::LanguagePart, vec![language, content]))
        .boxed()
}

fn plain_string() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    escaped_text().try_map(|text, span| {
        if text.is_empty() {
            Err(Simple::custom(span, "empty string"))
        } else {
            Ok(Tree::leaf(Terminal::MarkupString, text))
        }
    })
}

fn markup_part() -> GrammarParser<Tree> {
    choice((
        styled(Terminal::Emphasis, "@i{").boxed(),
        styled(Terminal::Bold, "@b{").boxed(),
        styled(Terminal::Superscript, "@sup{").boxed(),
        styled(Terminal::Subscript, "@sub{").boxed(),
        bibliography().boxed(),
        url().boxed(),
        language_part(),
        plain_string().boxed(),
    ))
    .boxed()
}

/// Markup as written in note and translation lines
fn line_markup() -> GrammarParser<Tree> {
    markup_part()
        .repeated()
        .map(|parts| Tree::node(Rule::Markup, parts))
        .boxed()
}

/// Markup that may span paragraphs separated by a blank line
pub(crate) fn markup() -> GrammarParser<Tree> {
    markup_part()
        .or(just("\n\n").map(|paragraph: &str| Tree::leaf(Terminal::Paragraph, paragraph)))
        .repeated()
        .then_ignore(end())
        .map(|parts| Tree::node(Rule::Markup, parts))
        .boxed()
}

pub(crate) fn note_line() -> GrammarParser<Tree> {
    just("#note:")
        .ignore_then(space().or_not())
        .ignore_then(line_markup())
        .then_ignore(end())
        .map(|markup| Tree::node(Rule::NoteLine, vec![markup]))
        .boxed()
}

/// `#tr[.<language>][.(<line number>)]: <markup>`
pub(crate) fn translation_line() -> GrammarParser<Tree> {
    let language = just('.')
        .ignore_then(
            filter(|c: &char| c.is_ascii_lowercase())
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .map(|language| Tree::leaf(Terminal::Language, language));
    let extent = line_number_or_range().delimited_by(just(".("), just(')'));

    just("#tr")
        .ignore_then(language.or_not())
        .then(extent.or_not())
        .then_ignore(just(':'))
        .then_ignore(space().or_not())
        .then(line_markup())
        .then_ignore(end())
        .map(|((language, extent), markup)| {
            let children = language.into_iter().chain(extent).chain(Some(markup)).collect();
            Tree::node(Rule::TranslationLine, children)
        })
        .boxed()
}
