//! Slug Utilities
//!
//! URL slugs derived from dream titles.

/// Lower-case `text` and collapse every run of whitespace or punctuation into
/// a single hyphen. Leading and trailing hyphens are dropped.
///
/// Lower-case mappings that expand into marks (`İ` → `i\u{307}`) keep only
/// their alphanumeric part, so slugifying a slug returns it unchanged.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if !ch.is_alphanumeric() {
            pending_hyphen = true;
            continue;
        }
        for lower in ch.to_lowercase().filter(|c| c.is_alphanumeric()) {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(lower);
        }
    }

    slug
}
