//! Lines of edited chapters
//!
//! A chapter line has one or more variants. Each variant pairs a reconstruction with the
//! manuscript lines that witness it; manuscript words are aligned to reconstruction words
//! by index, so editing the reconstruction has to remap those alignments.

use serde::Serialize;

use super::enclosure::{self, tag_enclosures};
use super::error::EnclosureError;
use super::labels::{AbstractLineNumber, Label};
use super::language::set_language;
use super::line::Line;
use super::merger::{create_alignment_map, merge_by, merge_tokens};
use super::tokens::Token;

/// One manuscript's witness of a chapter line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManuscriptLine {
    pub manuscript_id: u32,
    pub labels: Vec<Label>,
    /// A text line, or an empty line when the manuscript has nothing here
    pub line: Line,
    /// Dollar and note lines following the line
    pub paratext: Vec<Line>,
    /// Reconstruction indices of words this manuscript leaves out
    pub omitted_words: Vec<usize>,
}

impl ManuscriptLine {
    pub fn new(manuscript_id: u32, labels: Vec<Label>, line: Line) -> Self {
        Self {
            manuscript_id,
            labels,
            line,
            paratext: Vec::new(),
            omitted_words: Vec::new(),
        }
    }

    /// Manuscript, labels and line number; text lines only
    pub fn label(&self) -> Option<(u32, &[Label], &AbstractLineNumber)> {
        self.line
            .as_text_line()
            .map(|line| (self.manuscript_id, self.labels.as_slice(), line.line_number()))
    }

    pub fn is_beginning_of_side(&self) -> bool {
        self.line
            .as_text_line()
            .map_or(false, |line| line.line_number().is_beginning_of_side())
    }

    pub fn is_end_of_side(&self) -> bool {
        self.paratext.iter().any(|line| match line {
            Line::Dollar(dollar) => dollar.is_end_of(),
            _ => false,
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.line, Line::Empty)
    }

    fn key(&self) -> String {
        let labels: Vec<String> = self.labels.iter().map(Label::to_value).collect();
        let paratext: Vec<String> = self.paratext.iter().map(Line::key).collect();
        format!(
            "{}⁞{}⁞{}⁞{}⁞{:?}",
            self.manuscript_id,
            labels.join(" "),
            self.line.key(),
            paratext.join("⁚"),
            self.omitted_words
        )
    }

    /// Take everything from `new`, merging the line itself
    pub fn merge(&self, new: &ManuscriptLine) -> ManuscriptLine {
        ManuscriptLine {
            line: self.line.merge(&new.line),
            ..new.clone()
        }
    }

    /// Follow an edit of the reconstruction; omitted words without a counterpart go away
    pub fn update_alignments(&self, alignment_map: &[Option<usize>]) -> ManuscriptLine {
        ManuscriptLine {
            line: self.line.update_alignments(alignment_map),
            omitted_words: self
                .omitted_words
                .iter()
                .filter_map(|index| alignment_map.get(*index).copied().flatten())
                .collect(),
            ..self.clone()
        }
    }
}

/// A reconstruction with the manuscripts witnessing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineVariant {
    reconstruction: Vec<Token>,
    manuscripts: Vec<ManuscriptLine>,
}

impl LineVariant {
    /// Tag the reconstruction and check its brackets
    pub fn new(
        reconstruction: Vec<Token>,
        manuscripts: Vec<ManuscriptLine>,
    ) -> Result<Self, EnclosureError> {
        let reconstruction = set_language(&tag_enclosures(&reconstruction));
        enclosure::validate(&reconstruction)?;
        Ok(Self {
            reconstruction,
            manuscripts,
        })
    }

    pub fn reconstruction(&self) -> &[Token] {
        &self.reconstruction
    }

    pub fn manuscripts(&self) -> &[ManuscriptLine] {
        &self.manuscripts
    }

    pub fn manuscript_ids(&self) -> Vec<u32> {
        self.manuscripts
            .iter()
            .map(|manuscript| manuscript.manuscript_id)
            .collect()
    }

    pub fn manuscript_line(&self, manuscript_id: u32) -> Option<&ManuscriptLine> {
        self.manuscripts
            .iter()
            .find(|manuscript| manuscript.manuscript_id == manuscript_id)
    }

    /// Merge `self` (old) into `new`, remapping manuscript alignments to the merged
    /// reconstruction
    pub fn merge(&self, new: &LineVariant) -> LineVariant {
        let reconstruction = merge_tokens(&self.reconstruction, &new.reconstruction);
        let alignment_map = create_alignment_map(&self.reconstruction, &reconstruction);
        let manuscripts = merge_by(
            &self.manuscripts,
            &new.manuscripts,
            ManuscriptLine::key,
            |old, new| old.merge(new).update_alignments(&alignment_map),
        );
        LineVariant {
            reconstruction: set_language(&tag_enclosures(&reconstruction)),
            manuscripts,
        }
    }
}
