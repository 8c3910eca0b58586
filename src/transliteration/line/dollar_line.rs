use serde::Serialize;

use crate::transliteration::atf::{Object, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ruling {
    Single,
    Double,
    Triple,
}

impl Ruling {
    pub fn atf(self) -> &'static str {
        match self {
            Ruling::Single => "single",
            Ruling::Double => "double",
            Ruling::Triple => "triple",
        }
    }

    pub fn from_atf(ruling: &str) -> Option<Ruling> {
        match ruling {
            "single" => Some(Ruling::Single),
            "double" => Some(Ruling::Double),
            "triple" => Some(Ruling::Triple),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Qualification {
    AtLeast,
    AtMost,
    About,
}

impl Qualification {
    pub fn atf(self) -> &'static str {
        match self {
            Qualification::AtLeast => "at least",
            Qualification::AtMost => "at most",
            Qualification::About => "about",
        }
    }

    pub fn from_atf(qualification: &str) -> Option<Qualification> {
        match qualification {
            "at least" => Some(Qualification::AtLeast),
            "at most" => Some(Qualification::AtMost),
            "about" => Some(Qualification::About),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Extent {
    Number(u32),
    Range(u32, u32),
    Several,
    Some,
    RestOf,
    StartOf,
    BeginningOf,
    MiddleOf,
    EndOf,
}

impl Extent {
    pub const KEYWORDS: [Extent; 7] = [
        Extent::Several,
        Extent::Some,
        Extent::RestOf,
        Extent::StartOf,
        Extent::BeginningOf,
        Extent::MiddleOf,
        Extent::EndOf,
    ];

    pub fn atf(self) -> String {
        match self {
            Extent::Number(number) => number.to_string(),
            Extent::Range(start, end) => format!("{}-{}", start, end),
            Extent::Several => "several".to_string(),
            Extent::Some => "some".to_string(),
            Extent::RestOf => "rest of".to_string(),
            Extent::StartOf => "start of".to_string(),
            Extent::BeginningOf => "beginning of".to_string(),
            Extent::MiddleOf => "middle of".to_string(),
            Extent::EndOf => "end of".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scope {
    Columns,
    Column,
    Lines,
    Line,
    Cases,
    Case,
    Side,
    Excerpt,
}

impl Scope {
    pub const ALL: [Scope; 8] = [
        Scope::Columns,
        Scope::Column,
        Scope::Lines,
        Scope::Line,
        Scope::Cases,
        Scope::Case,
        Scope::Side,
        Scope::Excerpt,
    ];

    pub fn atf(self) -> &'static str {
        match self {
            Scope::Columns => "columns",
            Scope::Column => "column",
            Scope::Lines => "lines",
            Scope::Line => "line",
            Scope::Cases => "cases",
            Scope::Case => "case",
            Scope::Side => "side",
            Scope::Excerpt => "excerpt",
        }
    }
}

/// What a state line talks about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScopeContainer {
    Surface(Surface, String),
    Object(Object, String),
    Scope(Scope),
}

impl ScopeContainer {
    pub fn atf(&self) -> String {
        let (keyword, text) = match self {
            ScopeContainer::Surface(surface, text) => (surface.atf(), text.as_str()),
            ScopeContainer::Object(object, text) => (object.atf(), text.as_str()),
            ScopeContainer::Scope(scope) => (scope.atf(), ""),
        };
        if text.is_empty() {
            keyword.to_string()
        } else {
            format!("{} {}", keyword, text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum State {
    Blank,
    Broken,
    Effaced,
    Illegible,
    Missing,
    Traces,
    Omitted,
    Continues,
}

impl State {
    pub const ALL: [State; 8] = [
        State::Blank,
        State::Broken,
        State::Effaced,
        State::Illegible,
        State::Missing,
        State::Traces,
        State::Omitted,
        State::Continues,
    ];

    pub fn atf(self) -> &'static str {
        match self {
            State::Blank => "blank",
            State::Broken => "broken",
            State::Effaced => "effaced",
            State::Illegible => "illegible",
            State::Missing => "missing",
            State::Traces => "traces",
            State::Omitted => "omitted",
            State::Continues => "continues",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DollarStatus {
    Collated,
    Uncertain,
    Emended,
    EmendedNotCollated,
}

impl DollarStatus {
    pub fn atf(self) -> &'static str {
        match self {
            DollarStatus::Collated => "*",
            DollarStatus::Uncertain => "?",
            DollarStatus::Emended => "!",
            DollarStatus::EmendedNotCollated => "!?",
        }
    }

    pub fn from_atf(status: &str) -> Option<DollarStatus> {
        match status {
            "*" => Some(DollarStatus::Collated),
            "?" => Some(DollarStatus::Uncertain),
            "!" => Some(DollarStatus::Emended),
            "!?" => Some(DollarStatus::EmendedNotCollated),
            _ => None,
        }
    }
}

/// `$ [qualification] [extent] [scope] [state] [status]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateDollarLine {
    pub qualification: Option<Qualification>,
    pub extent: Option<Extent>,
    pub scope: Option<ScopeContainer>,
    pub state: Option<State>,
    pub status: Option<DollarStatus>,
}

impl StateDollarLine {
    fn atf(&self) -> String {
        let parts: Vec<String> = [
            self.qualification.map(|qualification| qualification.atf().to_string()),
            self.extent.map(Extent::atf),
            self.scope.as_ref().map(ScopeContainer::atf),
            self.state.map(|state| state.atf().to_string()),
            self.status.map(|status| status.atf().to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DollarLine {
    Loose(String),
    Image {
        number: u32,
        letter: Option<char>,
        text: String,
    },
    Ruling {
        number: Ruling,
        status: Option<DollarStatus>,
    },
    Seal(u32),
    State(StateDollarLine),
}

impl DollarLine {
    pub fn type_name(&self) -> &'static str {
        match self {
            DollarLine::Loose(_) => "LooseDollarLine",
            DollarLine::Image { .. } => "ImageDollarLine",
            DollarLine::Ruling { .. } => "RulingDollarLine",
            DollarLine::Seal(_) => "SealDollarLine",
            DollarLine::State(_) => "StateDollarLine",
        }
    }

    pub fn atf(&self) -> String {
        let content = match self {
            DollarLine::Loose(text) => format!("({})", text),
            DollarLine::Image {
                number,
                letter,
                text,
            } => format!(
                "(image {}{} = {})",
                number,
                letter.map(String::from).unwrap_or_default(),
                text
            ),
            DollarLine::Ruling { number, status } => match status {
                Some(status) => format!("{} ruling {}", number.atf(), status.atf()),
                None => format!("{} ruling", number.atf()),
            },
            DollarLine::Seal(number) => format!("seal {}", number),
            DollarLine::State(state) => state.atf(),
        };
        format!("$ {}", content)
    }

    /// A state line saying that the rest of a side is gone
    pub fn is_end_of(&self) -> bool {
        matches!(
            self,
            DollarLine::State(StateDollarLine {
                extent: Some(Extent::EndOf),
                ..
            })
        )
    }
}
