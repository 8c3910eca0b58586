//! Legacy notation passes
//!
//! Older transliterations use conventions the current notation has replaced. Each pass
//! rewrites one of them in the parse tree before it is transformed, and remembers whether
//! it found anything. Notation no enabled pass handles is rejected by the transformer.

use log::debug;
use serde::{Deserialize, Serialize};

use super::atf::{self, Flag};
use super::parser::tree::{Rule, Terminal, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegacyPass {
    /// `ú` for `u₂`, `ù` for `u₃`, and ASCII digit sub-indices
    AccentedIndex,
    /// `–` for the hyphen joiner
    OraccJoiner,
    /// `⸢ ⸣` around damaged signs
    HalfBrackets,
    /// `~` for the `@` modifier prefix
    ModifierPrefix,
    /// `′` or `’` for the prime in line numbers
    LegacyPrime,
    /// `'` for aleph inside readings
    LegacyAleph,
}

impl LegacyPass {
    /// Every pass, in the order they are applied
    pub const ALL: [LegacyPass; 6] = [
        LegacyPass::AccentedIndex,
        LegacyPass::OraccJoiner,
        LegacyPass::HalfBrackets,
        LegacyPass::ModifierPrefix,
        LegacyPass::LegacyPrime,
        LegacyPass::LegacyAleph,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LegacyPass::AccentedIndex => "accented-index",
            LegacyPass::OraccJoiner => "oracc-joiner",
            LegacyPass::HalfBrackets => "half-brackets",
            LegacyPass::ModifierPrefix => "modifier-prefix",
            LegacyPass::LegacyPrime => "legacy-prime",
            LegacyPass::LegacyAleph => "legacy-aleph",
        }
    }
}

/// One pass together with whether it has fired
#[derive(Debug, Clone)]
pub struct LegacyTransformer {
    pass: LegacyPass,
    legacy_found: bool,
}

impl LegacyTransformer {
    pub fn new(pass: LegacyPass) -> Self {
        Self {
            pass,
            legacy_found: false,
        }
    }

    pub fn pass(&self) -> LegacyPass {
        self.pass
    }

    pub fn legacy_found(&self) -> bool {
        self.legacy_found
    }

    pub fn transform(&mut self, mut tree: Tree) -> Tree {
        let found = match self.pass {
            LegacyPass::AccentedIndex => accented_index(&mut tree),
            LegacyPass::OraccJoiner => replace_leaves(&mut tree, Terminal::LegacyJoiner, |_| {
                (Terminal::Joiner, "-".to_string())
            }),
            LegacyPass::HalfBrackets => half_brackets(&mut tree),
            LegacyPass::ModifierPrefix => {
                replace_leaves(&mut tree, Terminal::LegacyModifier, |text| {
                    (Terminal::Modifier, format!("@{}", text.trim_start_matches('~')))
                })
            }
            LegacyPass::LegacyPrime => replace_leaves(&mut tree, Terminal::LegacyPrime, |_| {
                (Terminal::Prime, "'".to_string())
            }),
            LegacyPass::LegacyAleph => replace_leaves(&mut tree, Terminal::LegacyAleph, |_| {
                (Terminal::Value, "ʾ".to_string())
            }),
        };
        if found {
            debug!("legacy pass {} rewrote the line", self.pass.name());
        }
        self.legacy_found |= found;
        tree
    }
}

/// Apply passes in order; returns the tree and whether any of them fired
pub fn apply_legacy_passes(passes: &[LegacyPass], tree: Tree) -> (Tree, bool) {
    passes.iter().fold((tree, false), |(tree, found), pass| {
        let mut transformer = LegacyTransformer::new(*pass);
        let tree = transformer.transform(tree);
        (tree, found || transformer.legacy_found())
    })
}

fn replace_leaves(
    tree: &mut Tree,
    legacy: Terminal,
    replace: impl Fn(&str) -> (Terminal, String),
) -> bool {
    let mut found = false;
    tree.for_each_leaf_mut(&mut |terminal, text| {
        if *terminal == legacy {
            let (canonical, replacement) = replace(text);
            *terminal = canonical;
            *text = replacement;
            found = true;
        }
    });
    found
}

const ACCENTED_SECOND: [(char, char); 8] = [
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ú', 'u'),
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ú', 'U'),
];
const ACCENTED_THIRD: [(char, char); 8] = [
    ('à', 'a'),
    ('è', 'e'),
    ('ì', 'i'),
    ('ù', 'u'),
    ('À', 'A'),
    ('È', 'E'),
    ('Ì', 'I'),
    ('Ù', 'U'),
];

/// The plain vowel and the sub-index an accented vowel stands for
pub fn accented_vowel(character: char) -> Option<(char, u32)> {
    ACCENTED_SECOND
        .iter()
        .find(|(accented, _)| *accented == character)
        .map(|(_, plain)| (*plain, 2))
        .or_else(|| {
            ACCENTED_THIRD
                .iter()
                .find(|(accented, _)| *accented == character)
                .map(|(_, plain)| (*plain, 3))
        })
}

fn accented_index(tree: &mut Tree) -> bool {
    let mut found = false;
    tree.for_each_node_mut(&mut |rule, children| {
        if !matches!(rule, Rule::Reading | Rule::Logogram) {
            return;
        }
        for child in children.iter_mut() {
            if let Tree::Leaf(terminal @ Terminal::LegacySubIndex, text) = child {
                *text = text.chars().filter_map(atf::digit_to_subscript).collect();
                *terminal = Terminal::SubIndex;
                found = true;
            }
        }
        let mut sub_index = None;
        if let Some(Tree::Node(Rule::Name, name_parts)) = children.first_mut() {
            for part in name_parts.iter_mut() {
                if let Tree::Leaf(Terminal::Value, text) = part {
                    if sub_index.is_none() {
                        if let Some((index, plain)) = text
                            .chars()
                            .find_map(|c| accented_vowel(c).map(|(plain, index)| (index, plain)))
                        {
                            *text = text
                                .chars()
                                .map(|c| match accented_vowel(c) {
                                    Some((plain_vowel, _)) if plain_vowel == plain => plain_vowel,
                                    _ => c,
                                })
                                .collect();
                            sub_index = Some(index);
                        }
                    }
                }
            }
        }
        if let Some(index) = sub_index {
            found = true;
            let has_sub_index = children
                .iter()
                .any(|child| child.terminal() == Some(Terminal::SubIndex));
            if !has_sub_index {
                children.insert(1, Tree::leaf(Terminal::SubIndex, atf::sub_index_atf(Some(index))));
            }
        }
    });
    found
}

fn is_flaggable(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::Reading
            | Rule::Logogram
            | Rule::Number
            | Rule::UnclearSign
            | Rule::UnidentifiedSign
            | Rule::CompoundGrapheme
    )
}

fn add_damage_flag(children: &mut Vec<Tree>) {
    let damage = Flag::Damage.atf();
    match children
        .iter_mut()
        .find(|child| child.rule() == Some(Rule::Flags))
    {
        Some(Tree::Node(_, flags)) => {
            if !flags
                .iter()
                .any(|flag| matches!(flag, Tree::Leaf(Terminal::Flag, text) if text == damage))
            {
                flags.insert(0, Tree::leaf(Terminal::Flag, damage));
            }
        }
        _ => children.push(Tree::node(
            Rule::Flags,
            vec![Tree::leaf(Terminal::Flag, damage)],
        )),
    }
}

fn mark_damaged(children: &mut Vec<Tree>, inside: &mut bool, found: &mut bool) {
    let mut index = 0;
    while index < children.len() {
        match &mut children[index] {
            Tree::Leaf(Terminal::HalfBracketOpen, _) => {
                *inside = true;
                *found = true;
                children.remove(index);
                continue;
            }
            Tree::Leaf(Terminal::HalfBracketClose, _) => {
                *inside = false;
                *found = true;
                children.remove(index);
                continue;
            }
            Tree::Node(rule, grandchildren) if is_flaggable(*rule) => {
                if *inside {
                    add_damage_flag(grandchildren);
                }
            }
            Tree::Node(_, grandchildren) => mark_damaged(grandchildren, inside, found),
            Tree::Leaf(..) => {}
        }
        index += 1;
    }
}

fn half_brackets(tree: &mut Tree) -> bool {
    let mut inside = false;
    let mut found = false;
    if let Some(children) = tree.children_mut() {
        mark_damaged(children, &mut inside, &mut found);
    }
    found
}
