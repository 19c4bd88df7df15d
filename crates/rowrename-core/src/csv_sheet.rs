//! CSV file as a sheet.
//!
//! Every record is a row (row 1 is the first line, headers included). Cells are
//! stored as raw text and typed on read:
//!
//! - `=HYPERLINK("url", "label")` is rich text with a whole-cell link (`""`
//!   inside a literal is a quote);
//! - text with markdown links `[label](url)` is rich text, one run per span;
//! - `TRUE` / `FALSE` are booleans, numeric text is a number;
//! - anything else is text.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::cell::{CellValue, RichText, TextRun};
use crate::host::{Sheet, SheetError};

/// How far past the last row a write may extend the sheet.
const MAX_ROW_GROWTH: usize = 10_000;
/// Column `ZZZ`.
const MAX_COLUMNS: usize = 18_278;

pub struct CsvSheet {
    path: PathBuf,
    name: String,
    rows: Vec<Vec<String>>,
}

impl CsvSheet {
    /// Loads `path`; the sheet is named after the file stem.
    pub fn open(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("open sheet: {}", path.display()))?;

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.with_context(|| format!("read sheet: {}", path.display()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), rows = rows.len(), "sheet loaded");
        Ok(Self {
            path: path.to_path_buf(),
            name,
            rows,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Raw text of a cell, "" outside the used range.
    pub fn raw(&self, row: usize, column: usize) -> &str {
        row.checked_sub(1)
            .and_then(|r| self.rows.get(r))
            .and_then(|cells| column.checked_sub(1).and_then(|c| cells.get(c)))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Writes the sheet back to its file; short rows are padded.
    pub fn save(&self) -> Result<()> {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut writer = csv::WriterBuilder::new()
            .from_path(&self.path)
            .with_context(|| format!("create sheet: {}", self.path.display()))?;
        for row in &self.rows {
            let padded = row
                .iter()
                .map(String::as_str)
                .chain(std::iter::repeat("").take(width - row.len()));
            writer
                .write_record(padded)
                .with_context(|| format!("write sheet: {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flush sheet: {}", self.path.display()))?;
        Ok(())
    }
}

impl Sheet for CsvSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self, row: usize, column: usize) -> CellValue {
        parse_cell(self.raw(row, column))
    }

    fn write(&mut self, row: usize, column: usize, value: &str) -> Result<(), SheetError> {
        if row == 0
            || column == 0
            || column > MAX_COLUMNS
            || row > self.rows.len().saturating_add(MAX_ROW_GROWTH)
        {
            return Err(SheetError::OutOfRange { row, column });
        }
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < column {
            cells.resize(column, String::new());
        }
        cells[column - 1] = value.to_string();
        Ok(())
    }
}

fn hyperlink_formula() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)^=HYPERLINK\(\s*"((?:[^"]|"")*)"\s*(?:[,;]\s*"((?:[^"]|"")*)"\s*)?\)$"#)
            .expect("hyperlink pattern")
    })
}

/// Formula string literals escape `"` as `""`.
fn unescape_literal(s: &str) -> String {
    s.replace("\"\"", "\"")
}

fn markdown_link() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)\s]*)\)").expect("markdown link pattern"))
}

/// Types a raw cell string.
pub fn parse_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Empty;
    }

    if let Some(caps) = hyperlink_formula().captures(raw.trim()) {
        let url = caps.get(1).map_or_else(String::new, |m| unescape_literal(m.as_str()));
        let label = caps
            .get(2)
            .map_or_else(|| url.clone(), |m| unescape_literal(m.as_str()));
        return CellValue::RichText(RichText::new(vec![TextRun::plain(label)]).with_link(url));
    }

    if markdown_link().is_match(raw) {
        let mut runs = Vec::new();
        let mut last = 0;
        for caps in markdown_link().captures_iter(raw) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                continue;
            };
            if whole.start() > last {
                runs.push(TextRun::plain(&raw[last..whole.start()]));
            }
            runs.push(TextRun::linked(label.as_str(), url.as_str()));
            last = whole.end();
        }
        if last < raw.len() {
            runs.push(TextRun::plain(&raw[last..]));
        }
        return CellValue::RichText(RichText::new(runs));
    }

    match raw.trim() {
        "TRUE" => return CellValue::Boolean(true),
        "FALSE" => return CellValue::Boolean(false),
        _ => {}
    }
    if let Ok(n) = raw.trim().parse::<f64>() {
        if n.is_finite() {
            return CellValue::Number(n);
        }
    }
    CellValue::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_scalars() {
        assert_eq!(parse_cell(""), CellValue::Empty);
        assert_eq!(parse_cell("hello"), CellValue::text("hello"));
        assert_eq!(parse_cell("42"), CellValue::Number(42.0));
        assert_eq!(parse_cell("TRUE"), CellValue::Boolean(true));
        assert_eq!(parse_cell("Yes"), CellValue::text("Yes"));
        assert_eq!(parse_cell("inf"), CellValue::text("inf"));
        assert_eq!(
            parse_cell("https://x.example/a"),
            CellValue::text("https://x.example/a")
        );
    }

    #[test]
    fn parse_hyperlink_formula() {
        let cell = parse_cell(r#"=hyperlink("https://x.example/f", "My file")"#);
        let expected = RichText::new(vec![TextRun::plain("My file")]).with_link("https://x.example/f");
        assert_eq!(cell, CellValue::RichText(expected));

        let cell = parse_cell(r#"=HYPERLINK("https://x.example/f")"#);
        let expected =
            RichText::new(vec![TextRun::plain("https://x.example/f")]).with_link("https://x.example/f");
        assert_eq!(cell, CellValue::RichText(expected));
    }

    #[test]
    fn parse_hyperlink_with_doubled_quotes() {
        let cell = parse_cell(r#"=HYPERLINK("https://x.example/f?q=""a""", "The ""big"" one")"#);
        let expected =
            RichText::new(vec![TextRun::plain(r#"The "big" one"#)]).with_link(r#"https://x.example/f?q="a""#);
        assert_eq!(cell, CellValue::RichText(expected));
    }

    #[test]
    fn parse_markdown_runs() {
        let cell = parse_cell("see [one](https://a/1) and [two](https://a/2).");
        let expected = RichText::new(vec![
            TextRun::plain("see "),
            TextRun::linked("one", "https://a/1"),
            TextRun::plain(" and "),
            TextRun::linked("two", "https://a/2"),
            TextRun::plain("."),
        ]);
        assert_eq!(cell, CellValue::RichText(expected));
    }

    #[test]
    fn open_write_save_roundtrip() {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(f, "link,name,go,status").unwrap();
        writeln!(f, "https://x/a,report").unwrap();
        f.flush().unwrap();

        let mut sheet = CsvSheet::open(f.path()).unwrap();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.read(2, 2), CellValue::text("report"));
        assert_eq!(sheet.read(2, 3), CellValue::Empty);
        assert_eq!(sheet.read(9, 9), CellValue::Empty);

        sheet.write(2, 4, "ERROR: x, y").unwrap();
        sheet.write(3, 1, "new").unwrap();
        sheet.save().unwrap();

        let reopened = CsvSheet::open(f.path()).unwrap();
        assert_eq!(reopened.row_count(), 3);
        assert_eq!(reopened.raw(2, 4), "ERROR: x, y");
        assert_eq!(reopened.raw(2, 3), "");
        assert_eq!(reopened.raw(3, 1), "new");
    }

    #[test]
    fn name_is_file_stem() {
        let f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let sheet = CsvSheet::open(f.path()).unwrap();
        let stem = f.path().file_stem().unwrap().to_string_lossy().into_owned();
        assert_eq!(sheet.name(), stem);
        assert_eq!(sheet.with_name("Sheet1").name(), "Sheet1");
    }

    #[test]
    fn write_rejects_zero_index() {
        let f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let mut sheet = CsvSheet::open(f.path()).unwrap();
        assert!(sheet.write(0, 1, "x").is_err());
    }

    #[test]
    fn write_rejects_runaway_index() {
        let f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let mut sheet = CsvSheet::open(f.path()).unwrap();
        assert!(matches!(
            sheet.write(usize::MAX, 1, "Yes"),
            Err(SheetError::OutOfRange { .. })
        ));
        assert!(matches!(
            sheet.write(1, usize::MAX, "Yes"),
            Err(SheetError::OutOfRange { .. })
        ));
        assert!(sheet.write(MAX_ROW_GROWTH + 1, 1, "x").is_err());
        assert_eq!(sheet.row_count(), 0);

        sheet.write(MAX_ROW_GROWTH, MAX_COLUMNS, "x").unwrap();
        assert_eq!(sheet.row_count(), MAX_ROW_GROWTH);
        assert_eq!(sheet.raw(MAX_ROW_GROWTH, MAX_COLUMNS), "x");
    }
}
