//! Free-text search helpers shared by the storage backends.
//!
//! Search is a substring match that folds ASCII case only. The in-memory
//! backend calls [`matches_any`] directly; the PostgreSQL backend binds
//! [`ilike_pattern`] into `ILIKE` predicates evaluated under `COLLATE "C"`,
//! which folds exactly the same characters whatever the database locale.

/// Normalise a raw search term.
///
/// NUL characters (which PostgreSQL text cannot hold) and surrounding
/// whitespace are dropped. Returns `None` when nothing is left, meaning the
/// search imposes no restriction.
pub fn normalize_search(raw: Option<&str>) -> Option<String> {
    let cleaned = raw?.replace('\0', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// ASCII case-insensitive substring check against any of `haystacks`.
///
/// Non-ASCII letters must match exactly, as they do under `ILIKE` with the
/// `C` collation.
pub fn matches_any<'a, I>(needle: &str, haystacks: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = needle.to_ascii_lowercase();
    haystacks
        .into_iter()
        .any(|hay| hay.to_ascii_lowercase().contains(&needle))
}

/// Build an `ILIKE` pattern that matches `term` anywhere in a value.
///
/// `%`, `_` and `\` in the term are escaped so they match literally.
pub fn ilike_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
