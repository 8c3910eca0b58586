use serde::Serialize;

use crate::transliteration::labels::{
    self, AbstractLineNumber, ColumnLabel, ObjectLabel, SurfaceLabel,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterName {
    pub stage: String,
    pub version: String,
    pub name: String,
}

impl ChapterName {
    pub fn atf(&self) -> String {
        if self.version.is_empty() {
            format!("{} \"{}\"", self.stage, self.name)
        } else {
            format!("{} \"{}\" \"{}\"", self.stage, self.version, self.name)
        }
    }
}

/// Cross reference written after `//`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParallelLine {
    Fragment {
        has_cf: bool,
        museum_number: String,
        has_duplicates: bool,
        object: Option<ObjectLabel>,
        surface: Option<SurfaceLabel>,
        column: Option<ColumnLabel>,
        line_number: AbstractLineNumber,
    },
    Text {
        has_cf: bool,
        genre: String,
        category: u32,
        index: u32,
        chapter: Option<ChapterName>,
        line_number: AbstractLineNumber,
    },
    Composition {
        has_cf: bool,
        name: String,
        line_number: AbstractLineNumber,
    },
}

impl ParallelLine {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParallelLine::Fragment { .. } => "ParallelFragment",
            ParallelLine::Text { .. } => "ParallelText",
            ParallelLine::Composition { .. } => "ParallelComposition",
        }
    }

    pub fn has_cf(&self) -> bool {
        match self {
            ParallelLine::Fragment { has_cf, .. }
            | ParallelLine::Text { has_cf, .. }
            | ParallelLine::Composition { has_cf, .. } => *has_cf,
        }
    }

    pub fn display_value(&self) -> String {
        let cf = if self.has_cf() { "cf. " } else { "" };
        let reference = match self {
            ParallelLine::Fragment {
                museum_number,
                has_duplicates,
                object,
                surface,
                column,
                line_number,
                ..
            } => {
                let mut parts = vec![format!("F {}", museum_number)];
                if *has_duplicates {
                    parts.push("&d".to_string());
                }
                parts.extend(object.as_ref().map(ObjectLabel::to_value));
                parts.extend(surface.as_ref().map(SurfaceLabel::to_value));
                parts.extend(column.as_ref().map(ColumnLabel::to_value));
                parts.push(line_number.label());
                parts.join(" ")
            }
            ParallelLine::Text {
                genre,
                category,
                index,
                chapter,
                line_number,
                ..
            } => {
                let chapter = chapter
                    .as_ref()
                    .map(|chapter| format!("{} ", chapter.atf()))
                    .unwrap_or_default();
                let category = match category {
                    0 => "0".to_string(),
                    category => labels::to_roman(*category),
                };
                format!(
                    "{} {}.{} {}{}",
                    genre,
                    category,
                    index,
                    chapter,
                    line_number.label()
                )
            }
            ParallelLine::Composition {
                name, line_number, ..
            } => format!("({} {})", name, line_number.label()),
        };
        format!("{}{}", cf, reference)
    }

    pub fn atf(&self) -> String {
        format!("// {}", self.display_value())
    }
}
