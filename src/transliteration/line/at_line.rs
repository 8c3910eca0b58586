use serde::Serialize;

use crate::transliteration::atf::Discourse;
use crate::transliteration::labels::{ColumnLabel, ObjectLabel, SurfaceLabel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CompositeAtLine {
    Div { text: String, number: Option<u32> },
    End { text: String },
    Composite,
    Milestone { text: String },
}

/// Structural `@` lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AtLine {
    Seal(u32),
    Heading(u32),
    Column(ColumnLabel),
    Discourse(Discourse),
    Surface(SurfaceLabel),
    Object(ObjectLabel),
    Division { text: String, number: Option<u32> },
    Composite(CompositeAtLine),
}

fn with_number(text: &str, number: Option<u32>) -> String {
    match number {
        Some(number) => format!("{} {}", text, number),
        None => text.to_string(),
    }
}

impl AtLine {
    pub fn type_name(&self) -> &'static str {
        match self {
            AtLine::Seal(_) => "SealAtLine",
            AtLine::Heading(_) => "HeadingAtLine",
            AtLine::Column(_) => "ColumnAtLine",
            AtLine::Discourse(_) => "DiscourseAtLine",
            AtLine::Surface(_) => "SurfaceAtLine",
            AtLine::Object(_) => "ObjectAtLine",
            AtLine::Division { .. } => "DivisionAtLine",
            AtLine::Composite(_) => "CompositeAtLine",
        }
    }

    pub fn atf(&self) -> String {
        match self {
            AtLine::Seal(number) => format!("@seal {}", number),
            AtLine::Heading(number) => format!("@h{}", number),
            AtLine::Column(label) => label.to_atf(),
            AtLine::Discourse(discourse) => format!("@{}", discourse.atf()),
            AtLine::Surface(label) => label.to_atf(),
            AtLine::Object(label) => label.to_atf(),
            AtLine::Division { text, number } => {
                format!("@m=division {}", with_number(text, *number))
            }
            AtLine::Composite(CompositeAtLine::Div { text, number }) => {
                format!("@div {}", with_number(text, *number))
            }
            AtLine::Composite(CompositeAtLine::End { text }) => format!("@end {}", text),
            AtLine::Composite(CompositeAtLine::Composite) => "@composite".to_string(),
            AtLine::Composite(CompositeAtLine::Milestone { text }) => {
                format!("@milestone {}", text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::atf::{Object, Status, Surface};

    #[test]
    fn test_at_line_atf() {
        assert_eq!(AtLine::Seal(1).atf(), "@seal 1");
        assert_eq!(AtLine::Heading(2).atf(), "@h2");
        assert_eq!(AtLine::Discourse(Discourse::Colophon).atf(), "@colophon");
        assert_eq!(
            AtLine::Column(ColumnLabel::new(3, vec![Status::Prime]).unwrap()).atf(),
            "@column 3'"
        );
        assert_eq!(
            AtLine::Surface(SurfaceLabel::new(Surface::Reverse, vec![Status::Uncertain], "").unwrap())
                .atf(),
            "@reverse?"
        );
        assert_eq!(
            AtLine::Object(ObjectLabel::new(Object::Fragment, vec![], "a").unwrap()).atf(),
            "@fragment a"
        );
        assert_eq!(
            AtLine::Division {
                text: "paragraph".into(),
                number: Some(5)
            }
            .atf(),
            "@m=division paragraph 5"
        );
        assert_eq!(
            AtLine::Composite(CompositeAtLine::Div {
                text: "part".into(),
                number: None
            })
            .atf(),
            "@div part"
        );
    }
}
