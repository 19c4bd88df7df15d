//! Link resolution and file identifier extraction.
//!
//! A link cell can hold a plain URL, rich text whose display label differs from
//! its hyperlink target, several links in one cell, or a whole-cell hyperlink.
//! [`resolve_link`] picks the single best candidate URL; [`extract_file_id`]
//! pulls the opaque file token out of whatever URL shape it is.

mod file_id;
mod resolve;

pub use file_id::{extract_file_id, FileId, MIN_FILE_ID_LEN};
pub use resolve::resolve_link;
