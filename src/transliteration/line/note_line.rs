use serde::Serialize;

use crate::transliteration::labels::AbstractLineNumber;
use crate::transliteration::markup::{markup_atf, MarkupPart};

pub const DEFAULT_TRANSLATION_LANGUAGE: &str = "en";

/// `#note: ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteLine {
    pub parts: Vec<MarkupPart>,
}

impl NoteLine {
    pub fn new(parts: Vec<MarkupPart>) -> Self {
        Self { parts }
    }

    pub fn atf(&self) -> String {
        format!("#note: {}", markup_atf(&self.parts))
    }
}

/// `#tr.<language>[.(<line number>)]: ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationLine {
    pub parts: Vec<MarkupPart>,
    pub language: String,
    pub extent: Option<AbstractLineNumber>,
}

impl TranslationLine {
    pub fn new(parts: Vec<MarkupPart>, language: &str, extent: Option<AbstractLineNumber>) -> Self {
        Self {
            parts,
            language: language.to_string(),
            extent,
        }
    }

    pub fn atf(&self) -> String {
        let extent = self
            .extent
            .as_ref()
            .map(|extent| format!(".({})", extent.label()))
            .unwrap_or_default();
        format!("#tr.{}{}: {}", self.language, extent, markup_atf(&self.parts))
    }
}
