//! Extension-preserving name composition.

/// Extension of `name`: everything from the last `.` on, or "" when there is
/// no `.`. A leading-dot name such as `.env` is all extension.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// New file name: `new_base` followed by the extension of `current`.
pub fn final_name(current: &str, new_base: &str) -> String {
    format!("{}{}", new_base, extension_of(current))
}
