//! Pick the best candidate URL out of a cell.

use crate::cell::CellValue;

/// Resolves a cell to a single URL string; empty when the cell carries none.
///
/// Priority:
/// 1. the link of the first rich-text run that has one (left to right),
/// 2. the rich text's whole-cell link,
/// 3. the plain value, only when it is text-typed.
pub fn resolve_link(cell: &CellValue) -> String {
    match cell {
        CellValue::RichText(rt) => {
            if let Some(link) = rt.runs.iter().find_map(|run| run.link_target()) {
                return link.to_string();
            }
            if let Some(link) = rt.link.as_deref().filter(|l| !l.is_empty()) {
                return link.to_string();
            }
            rt.text()
        }
        CellValue::Text(s) => s.clone(),
        CellValue::Empty | CellValue::Number(_) | CellValue::Boolean(_) => String::new(),
    }
}
