//! Markup used by note and translation lines

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::atf_visitor::convert_to_atf;
use super::enclosure::tag_enclosures;
use super::language::{set_fixed_language, Language};
use super::tokens::Token;

static SPECIAL_CHARACTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@{}\\]").unwrap());
static TITLE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+([\[\]'’]\w+)?").unwrap());

const PUNCTUATION: &[char] = &[';', ',', ':', '.', '-', '–', '—'];

/// Backslash-escape the characters markup gives meaning to
pub fn escape(unescaped: &str) -> String {
    SPECIAL_CHARACTERS
        .replace_all(unescaped, |captures: &regex::Captures| format!("\\{}", &captures[0]))
        .into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MarkupPart {
    String(String),
    Emphasis(String),
    Bold(String),
    Superscript(String),
    Subscript(String),
    Language {
        language: Language,
        tokens: Vec<Token>,
    },
    Bibliography {
        id: String,
        pages: String,
    },
    Url {
        url: String,
        text: String,
    },
    Paragraph,
}

impl MarkupPart {
    /// Transliteration span; the tokens get enclosures and the span's language
    pub fn language(language: Language, tokens: &[Token]) -> Self {
        let tagged = tag_enclosures(tokens);
        MarkupPart::Language {
            language,
            tokens: set_fixed_language(&tagged, language),
        }
    }

    pub fn value(&self) -> String {
        match self {
            MarkupPart::String(text) => escape(text),
            MarkupPart::Emphasis(text) => format!("@i{{{}}}", escape(text)),
            MarkupPart::Bold(text) => format!("@b{{{}}}", escape(text)),
            MarkupPart::Superscript(text) => format!("@sup{{{}}}", escape(text)),
            MarkupPart::Subscript(text) => format!("@sub{{{}}}", escape(text)),
            MarkupPart::Language { language, tokens } => format!(
                "@{}{{{}}}",
                language.markup_code().unwrap_or("akk"),
                convert_to_atf(None, tokens)
            ),
            MarkupPart::Bibliography { id, pages } => {
                if pages.is_empty() {
                    format!("@bib{{{}}}", escape(id))
                } else {
                    format!("@bib{{{}@{}}}", escape(id), escape(pages))
                }
            }
            MarkupPart::Url { url, text } => {
                if text.is_empty() {
                    format!("@url{{{}}}", url)
                } else {
                    format!("@url{{{}}}{{{}}}", url, escape(text))
                }
            }
            MarkupPart::Paragraph => "\n\n".to_string(),
        }
    }

    pub fn key(&self) -> String {
        match self {
            MarkupPart::Language { language, tokens } => {
                let keys: Vec<String> = tokens.iter().map(Token::key).collect();
                format!(
                    "@{}⟨{}⟩",
                    language.markup_code().unwrap_or("akk"),
                    keys.join("⁚")
                )
            }
            _ => self.value(),
        }
    }

    fn map_text(&self, f: impl Fn(&str) -> String) -> Self {
        match self {
            MarkupPart::String(text) => MarkupPart::String(f(text)),
            MarkupPart::Emphasis(text) => MarkupPart::Emphasis(f(text)),
            MarkupPart::Bold(text) => MarkupPart::Bold(f(text)),
            MarkupPart::Superscript(text) => MarkupPart::Superscript(f(text)),
            MarkupPart::Subscript(text) => MarkupPart::Subscript(f(text)),
            MarkupPart::Url { url, text } => MarkupPart::Url {
                url: url.clone(),
                text: f(text),
            },
            other => other.clone(),
        }
    }

    pub fn rstrip(&self) -> Self {
        self.map_text(|text| text.trim_end_matches(PUNCTUATION).to_string())
    }

    pub fn title_case(&self) -> Self {
        self.map_text(titlecase)
    }
}

fn titlecase(text: &str) -> String {
    TITLE_WORD
        .replace_all(text, |captures: &regex::Captures| {
            let word = &captures[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .into_owned()
}

pub fn markup_atf(parts: &[MarkupPart]) -> String {
    parts.iter().map(MarkupPart::value).collect()
}

/// Title form: trailing punctuation removed, words capitalised
pub fn to_title(parts: &[MarkupPart]) -> Vec<MarkupPart> {
    let count = parts.len();
    parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            if index + 1 == count {
                part.rstrip().title_case()
            } else {
                part.title_case()
            }
        })
        .collect()
}
