//! Parse trees
//!
//! The grammar produces a generic tree of named rules and typed terminals. Legacy passes
//! rewrite it in place; the transformers fold it into lines and tokens.

use std::fmt;

/// Interior nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    EmptyLine,
    ControlLine,
    TextLine,
    LineNumber,
    LineNumberRange,
    Content,
    Erasure,
    Erased,
    OverErased,
    Word,
    LoneDeterminative,
    GreekWord,
    GreekLetter,
    Determinative,
    PhoneticGloss,
    LinguisticGloss,
    Variant,
    Reading,
    Logogram,
    Number,
    Name,
    Modifiers,
    Flags,
    SignOverride,
    UnclearSign,
    UnidentifiedSign,
    Grapheme,
    CompoundGrapheme,
    Divider,
    SealAtLine,
    HeadingAtLine,
    ColumnAtLine,
    DiscourseAtLine,
    SurfaceAtLine,
    ObjectAtLine,
    DivisionAtLine,
    DivAtLine,
    EndAtLine,
    CompositeAtLine,
    MilestoneAtLine,
    LooseDollarLine,
    ImageDollarLine,
    RulingDollarLine,
    SealDollarLine,
    StateDollarLine,
    NoteLine,
    TranslationLine,
    Markup,
    LanguagePart,
    Bibliography,
    UrlLink,
    ParallelFragment,
    ParallelText,
    ParallelComposition,
    ChapterName,
}

/// Leaves, each carrying the text it matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Prefix,
    Text,
    PrefixModifier,
    Number,
    Prime,
    LegacyPrime,
    SuffixModifier,
    EnclosureOpen,
    EnclosureClose,
    HalfBracketOpen,
    HalfBracketClose,
    DividerSymbol,
    Modifier,
    LegacyModifier,
    Flag,
    CommentaryProtocol,
    LanguageShift,
    Tabulation,
    Column,
    UnknownNumberOfSigns,
    Joiner,
    LegacyJoiner,
    InWordNewline,
    Value,
    LegacyAleph,
    SubIndex,
    LegacySubIndex,
    Keyword,
    Status,
    Letter,
    Qualification,
    Extent,
    Scope,
    State,
    DollarStatus,
    Language,
    Cf,
    Duplicates,
    MuseumNumber,
    Genre,
    Category,
    Stage,
    Version,
    Name,
    ObjectLabel,
    SurfaceLabel,
    ColumnLabel,
    MarkupString,
    Emphasis,
    Bold,
    Superscript,
    Subscript,
    BibliographyId,
    BibliographyPages,
    Url,
    UrlText,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    Node(Rule, Vec<Tree>),
    Leaf(Terminal, String),
}

impl Tree {
    pub fn node(rule: Rule, children: Vec<Tree>) -> Self {
        Tree::Node(rule, children)
    }

    pub fn leaf(terminal: Terminal, text: impl Into<String>) -> Self {
        Tree::Leaf(terminal, text.into())
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            Tree::Node(rule, _) => Some(*rule),
            Tree::Leaf(..) => None,
        }
    }

    pub fn terminal(&self) -> Option<Terminal> {
        match self {
            Tree::Leaf(terminal, _) => Some(*terminal),
            Tree::Node(..) => None,
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node(_, children) => children,
            Tree::Leaf(..) => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Tree>> {
        match self {
            Tree::Node(_, children) => Some(children),
            Tree::Leaf(..) => None,
        }
    }

    /// Text of the first direct leaf of the given kind
    pub fn find_leaf(&self, terminal: Terminal) -> Option<&str> {
        self.children().iter().find_map(|child| match child {
            Tree::Leaf(kind, text) if *kind == terminal => Some(text.as_str()),
            _ => None,
        })
    }

    /// Texts of all direct leaves of the given kind
    pub fn leaves(&self, terminal: Terminal) -> Vec<&str> {
        self.children()
            .iter()
            .filter_map(|child| match child {
                Tree::Leaf(kind, text) if *kind == terminal => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// First direct child node with the given rule
    pub fn find_node(&self, rule: Rule) -> Option<&Tree> {
        self.children()
            .iter()
            .find(|child| child.rule() == Some(rule))
    }

    /// Visit every leaf, depth first, allowing it to be rewritten
    pub fn for_each_leaf_mut(&mut self, f: &mut dyn FnMut(&mut Terminal, &mut String)) {
        match self {
            Tree::Leaf(terminal, text) => f(terminal, text),
            Tree::Node(_, children) => {
                for child in children {
                    child.for_each_leaf_mut(f);
                }
            }
        }
    }

    /// Visit every node, depth first, parents before children
    pub fn for_each_node_mut(&mut self, f: &mut dyn FnMut(Rule, &mut Vec<Tree>)) {
        if let Tree::Node(rule, children) = self {
            f(*rule, children);
            for child in children.iter_mut() {
                child.for_each_node_mut(f);
            }
        }
    }

    /// Whether any leaf, at any depth, is of the given kind
    pub fn contains_terminal(&self, terminal: Terminal) -> bool {
        match self {
            Tree::Leaf(kind, _) => *kind == terminal,
            Tree::Node(_, children) => children
                .iter()
                .any(|child| child.contains_terminal(terminal)),
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(terminal, text) => write!(f, "{:?}({:?})", terminal, text),
            Tree::Node(rule, children) => {
                write!(f, "{:?}[", rule)?;
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}
