//! Client filename sanitizing.
//!
//! Uploaded filenames are attacker-controlled; only a conservative character
//! set survives into storage keys.

/// Reduce a client-supplied filename to a safe basename.
///
/// Path components (both separator styles) are dropped, whitespace becomes
/// `_`, anything outside `[A-Za-z0-9._-]` is removed, and leading dots are
/// stripped so the result can never be a hidden file or a traversal step.
/// Returns an empty string when nothing safe remains.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut out = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('_');
        }
        // everything else is dropped
    }

    out.trim_start_matches('.').trim_matches('_').to_string()
}
