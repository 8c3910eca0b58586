//! `//` parallel lines

use chumsky::prelude::*;

use super::common::{line_number, number, space, tag, tags, GrammarError, GrammarParser};
use crate::transliteration::parser::tree::{Rule, Terminal, Tree};

const OBJECT_LABELS: [&str; 6] = ["tablet", "envelope", "prism", "bulla", "fragment", "object"];
const SURFACE_LABELS: [&str; 7] = ["b.e.", "l.e.", "r.e.", "t.e.", "e.", "o", "r"];
const GENRES: [&str; 5] = ["Lex", "Mag", "Med", "L", "D"];

fn label_status() -> impl Parser<char, Vec<char>, Error = GrammarError> + Clone {
    one_of("'?!*").repeated()
}

/// A keyword label followed by its status marks
fn keyword_label(
    terminal: Terminal,
    keywords: &[&'static str],
) -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    tags(terminal, keywords)
        .then(label_status())
        .map(|(label, status)| match label {
            Tree::Leaf(terminal, text) => {
                Tree::Leaf(terminal, text.chars().chain(status).collect())
            }
            node => node,
        })
}

fn surface_label() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    keyword_label(Terminal::SurfaceLabel, &SURFACE_LABELS)
}

fn column_label() -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    one_of("ivxlcdm")
        .repeated()
        .at_least(1)
        .chain::<char, Vec<char>, _>(label_status())
        .collect::<String>()
        .map(|label| Tree::leaf(Terminal::ColumnLabel, label))
}

/// The line number closing a reference
fn tail() -> impl Parser<char, Vec<Tree>, Error = GrammarError> + Clone {
    line_number().then_ignore(end()).map(|line_number| vec![line_number])
}

/// `F <museum number> [&d ][<object> ][<surface> ][<column> ]<line number>`
fn fragment() -> GrammarParser<Vec<Tree>> {
    let museum_number = filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(|number| Tree::leaf(Terminal::MuseumNumber, number));
    let duplicates = tag(Terminal::Duplicates, "&d").then_ignore(space());
    let object = keyword_label(Terminal::ObjectLabel, &OBJECT_LABELS).then_ignore(space());
    let labels_and_line = choice((
        surface_label()
            .then_ignore(space())
            .then(column_label())
            .then_ignore(space())
            .then(tail())
            .map(|((surface, column), tail)| [vec![surface, column], tail].concat())
            .boxed(),
        surface_label()
            .then_ignore(space())
            .then(tail())
            .map(|(surface, tail)| [vec![surface], tail].concat())
            .boxed(),
        column_label()
            .then_ignore(space())
            .then(tail())
            .map(|(column, tail)| [vec![column], tail].concat())
            .boxed(),
        tail().boxed(),
    ));

    just("F ")
        .ignore_then(museum_number)
        .then_ignore(space())
        .then(duplicates.or_not())
        .then(object.or_not())
        .then(labels_and_line)
        .map(|(((museum_number, duplicates), object), rest)| {
            std::iter::once(museum_number)
                .chain(duplicates)
                .chain(object)
                .chain(rest)
                .collect()
        })
        .boxed()
}

fn quoted(terminal: Terminal) -> impl Parser<char, Tree, Error = GrammarError> + Clone {
    none_of("\"")
        .repeated()
        .collect::<String>()
        .delimited_by(just('"'), just('"'))
        .map(move |text| Tree::leaf(terminal, text))
}

/// `<genre> <category>.<index> [<stage> ["<version>" ]"<name>" ]<line number>`
///
/// The category is a roman numeral, or `0` for texts outside the numbered categories.
fn text() -> GrammarParser<Vec<Tree>> {
    let category = just('0')
        .map(|zero| vec![zero])
        .or(one_of("IVXLCDM").repeated().at_least(1))
        .collect::<String>()
        .map(|category| Tree::leaf(Terminal::Category, category));
    let stage = filter(|c: &char| c.is_ascii_alphanumeric())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(|stage| Tree::leaf(Terminal::Stage, stage));
    let versioned = stage
        .clone()
        .then_ignore(space())
        .then(quoted(Terminal::Version))
        .then_ignore(space())
        .then(quoted(Terminal::Name))
        .map(|((stage, version), name)| vec![stage, version, name]);
    let unversioned = stage
        .then_ignore(space())
        .then(quoted(Terminal::Name))
        .map(|(stage, name)| vec![stage, name]);
    let chapter = versioned
        .or(unversioned)
        .then_ignore(space())
        .map(|parts| Tree::node(Rule::ChapterName, parts));

    tags(Terminal::Genre, &GENRES)
        .then_ignore(space())
        .then(category)
        .then_ignore(just('.'))
        .then(number(Terminal::Number))
        .then_ignore(space())
        .then(chapter.or_not())
        .then(tail())
        .map(|((((genre, category), index), chapter), tail)| {
            [genre, category, index]
                .into_iter()
                .chain(chapter)
                .chain(tail)
                .collect()
        })
        .boxed()
}

/// `(<name> <line number>)`
fn composition() -> GrammarParser<Vec<Tree>> {
    let line_number_at_end = space()
        .ignore_then(line_number())
        .then_ignore(just(')'))
        .then_ignore(end());
    just('(')
        .ignore_then(take_until(line_number_at_end))
        .try_map(|(name, line_number), span| {
            if name.is_empty() {
                Err(Simple::custom(span, "missing composition name"))
            } else {
                let name = Tree::leaf(Terminal::Name, name.into_iter().collect::<String>());
                Ok(vec![name, line_number])
            }
        })
        .boxed()
}

pub(crate) fn parallel_line() -> GrammarParser<Tree> {
    let cf = tag(Terminal::Cf, "cf. ");
    let reference = choice((
        fragment().map(|children| (Rule::ParallelFragment, children)),
        text().map(|children| (Rule::ParallelText, children)),
        composition().map(|children| (Rule::ParallelComposition, children)),
    ));
    just("// ")
        .ignore_then(cf.or_not())
        .then(reference)
        .map(|(cf, (rule, children))| {
            Tree::node(rule, cf.into_iter().chain(children).collect())
        })
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment() {
        let tree = parallel_line()
            .parse("// cf. F K.1 &d o iii' 1")
            .unwrap();
        assert_eq!(tree.rule(), Some(Rule::ParallelFragment));
        assert_eq!(tree.find_leaf(Terminal::Cf), Some("cf. "));
        assert_eq!(tree.find_leaf(Terminal::MuseumNumber), Some("K.1"));
        assert_eq!(tree.find_leaf(Terminal::SurfaceLabel), Some("o"));
        assert_eq!(tree.find_leaf(Terminal::ColumnLabel), Some("iii'"));
    }

    #[test]
    fn test_fragment_with_object() {
        let tree = parallel_line()
            .parse("// cf. F K.1 &d tablet* o! iii? 1")
            .unwrap();
        assert_eq!(tree.find_leaf(Terminal::ObjectLabel), Some("tablet*"));
        assert_eq!(tree.find_leaf(Terminal::SurfaceLabel), Some("o!"));
        assert_eq!(tree.find_leaf(Terminal::ColumnLabel), Some("iii?"));
    }

    #[test]
    fn test_fragment_without_labels() {
        let tree = parallel_line().parse("// F K.1 2'").unwrap();
        assert_eq!(tree.children().len(), 2);
    }

    #[test]
    fn test_text() {
        let tree = parallel_line()
            .parse("// L I.1 OB \"my name\" 2")
            .unwrap();
        assert_eq!(tree.rule(), Some(Rule::ParallelText));
        let chapter = tree.find_node(Rule::ChapterName).unwrap();
        assert_eq!(chapter.find_leaf(Terminal::Name), Some("my name"));
        assert_eq!(chapter.find_leaf(Terminal::Version), None);
    }

    #[test]
    fn test_zero_category_and_magic() {
        let zero = parallel_line().parse("// L 0.0 1").unwrap();
        assert_eq!(zero.find_leaf(Terminal::Category), Some("0"));
        assert_eq!(zero.find_leaf(Terminal::Number), Some("0"));

        let magic = parallel_line().parse("// Mag III.1 2").unwrap();
        assert_eq!(magic.find_leaf(Terminal::Genre), Some("Mag"));
        assert_eq!(magic.find_leaf(Terminal::Category), Some("III"));
    }

    #[test]
    fn test_composition() {
        let tree = parallel_line().parse("// (Great Hymn 1)").unwrap();
        assert_eq!(tree.rule(), Some(Rule::ParallelComposition));
        assert_eq!(tree.find_leaf(Terminal::Name), Some("Great Hymn"));
    }
}
