//! File identifier extraction from URLs.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Shortest token accepted as a file identifier.
pub const MIN_FILE_ID_LEN: usize = 25;

/// Opaque token addressing one external file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    pub fn new(id: impl Into<String>) -> Self {
        FileId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn file_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("[A-Za-z0-9_-]{{{},}}", MIN_FILE_ID_LEN)).expect("file id pattern")
    })
}

/// Returns the first run of at least [`MIN_FILE_ID_LEN`] characters from
/// `[A-Za-z0-9_-]` in `url`, or `None`.
///
/// No URL shape is parsed, so open/view/edit/download/shortcut links all work.
/// When a URL carries two qualifying runs (e.g. a redirect wrapper), the first
/// one wins even if it is not the file.
pub fn extract_file_id(url: &str) -> Option<FileId> {
    file_id_pattern()
        .find(url)
        .map(|m| FileId::new(m.as_str()))
}
