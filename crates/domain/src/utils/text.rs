//! Text helpers for comma lists, form choices and upload filenames

/// Split a comma-delimited string into trimmed, non-empty tokens.
///
/// Order and duplicates are preserved.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|token| !token.is_empty()).map(str::to_string).collect()
}

/// Resolve a select-field value against its free-text `other` companion.
///
/// Selecting [`OTHER_CHOICE`](crate::constants::OTHER_CHOICE) takes the
/// trimmed `other` text instead; blank results become `None`.
pub fn resolve_choice(selected: Option<&str>, other: Option<&str>) -> Option<String> {
    let selected = selected.map(str::trim).filter(|s| !s.is_empty())?;
    if selected == crate::constants::OTHER_CHOICE {
        other.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
    } else {
        Some(selected.to_string())
    }
}

/// Reduce an uploaded filename to a safe ASCII basename.
///
/// Path separators become word breaks, whitespace runs become `_`, and
/// anything outside `[A-Za-z0-9_.-]` is dropped. Leading/trailing `.` and
/// `_` are stripped so the result can never be `..` or a dotfile. Returns
/// an empty string when nothing survives.
pub fn sanitize_filename(name: &str) -> String {
    let spaced: String =
        name.chars().filter(char::is_ascii).map(|c| if c == '/' || c == '\\' { ' ' } else { c }).collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Lower-cased extension of a filename, without the dot
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// True for references that point outside the blob store (seeded URLs)
pub fn is_external_reference(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
