//! Cell values as delivered by a tabular host.
//!
//! A host cell may hold plain text, a number, a boolean, nothing, or rich text
//! made of runs that each carry their own optional hyperlink. Rows and columns
//! are addressed 1-based, the way a spreadsheet user counts them.

/// Literal value that arms a row for processing.
pub const TRIGGER_ARMED: &str = "Yes";
/// Literal value written once a row has been processed.
pub const TRIGGER_DONE: &str = "DONE";

/// One styled span of rich text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    pub text: String,
    pub link: Option<String>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn linked(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
        }
    }

    /// Link target, ignoring links that are present but empty.
    pub fn link_target(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

/// Rich text: ordered runs (visual left-to-right) plus an optional link for the
/// cell as a whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    pub runs: Vec<TextRun>,
    pub link: Option<String>,
}

impl RichText {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs, link: None }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Display text: all runs concatenated.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
    RichText(RichText),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Scalar rendered as the user would see it in the cell.
    pub fn plain_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Boolean(true) => "TRUE".to_string(),
            CellValue::Boolean(false) => "FALSE".to_string(),
            CellValue::RichText(rt) => rt.text(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// State of a row's trigger cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerState {
    Empty,
    /// Holds exactly [`TRIGGER_ARMED`].
    Armed,
    /// Holds exactly [`TRIGGER_DONE`]; terminal until the user re-arms.
    Done,
    /// Anything else; ignored.
    Other(String),
}

impl TriggerState {
    /// Exact, case-sensitive classification of a raw cell string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => TriggerState::Empty,
            TRIGGER_ARMED => TriggerState::Armed,
            TRIGGER_DONE => TriggerState::Done,
            other => TriggerState::Other(other.to_string()),
        }
    }

    pub fn from_cell(cell: &CellValue) -> Self {
        match cell {
            CellValue::Text(s) => Self::parse(s),
            CellValue::Empty => TriggerState::Empty,
            other => TriggerState::Other(other.plain_text()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TriggerState::Empty => "",
            TriggerState::Armed => TRIGGER_ARMED,
            TriggerState::Done => TRIGGER_DONE,
            TriggerState::Other(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_renders_scalars() {
        assert_eq!(CellValue::Empty.plain_text(), "");
        assert_eq!(CellValue::text("abc").plain_text(), "abc");
        assert_eq!(CellValue::Number(2024.0).plain_text(), "2024");
        assert_eq!(CellValue::Number(1.5).plain_text(), "1.5");
        assert_eq!(CellValue::Boolean(true).plain_text(), "TRUE");
        let rt = RichText::new(vec![TextRun::plain("see "), TextRun::linked("here", "https://x")]);
        assert_eq!(CellValue::RichText(rt).plain_text(), "see here");
    }

    #[test]
    fn trigger_state_is_case_sensitive() {
        assert_eq!(TriggerState::parse("Yes"), TriggerState::Armed);
        assert_eq!(TriggerState::parse("DONE"), TriggerState::Done);
        assert_eq!(TriggerState::parse(""), TriggerState::Empty);
        assert_eq!(TriggerState::parse("yes"), TriggerState::Other("yes".into()));
        assert_eq!(TriggerState::parse("YES"), TriggerState::Other("YES".into()));
        assert_eq!(TriggerState::parse("Y"), TriggerState::Other("Y".into()));
    }

    #[test]
    fn trigger_state_from_non_text_cell() {
        assert_eq!(
            TriggerState::from_cell(&CellValue::Boolean(true)),
            TriggerState::Other("TRUE".into())
        );
        assert_eq!(TriggerState::from_cell(&CellValue::Empty), TriggerState::Empty);
    }

    #[test]
    fn empty_link_on_run_is_no_link() {
        assert_eq!(TextRun::linked("x", "").link_target(), None);
        assert_eq!(TextRun::linked("x", "https://a").link_target(), Some("https://a"));
    }
}
