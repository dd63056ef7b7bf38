//! Slug generation for note filenames.

/// Converts an identifier to a filesystem-safe slug.
///
/// - Keeps only alphanumeric characters, underscores, whitespace, and
///   hyphens
/// - Trims surrounding whitespace
/// - Collapses internal whitespace/hyphen runs to a single hyphen
/// - Converts to lowercase
///
/// # Examples
///
/// ```
/// use warren::infra::slugify;
///
/// assert_eq!(slugify("Meeting Log"), "meeting-log");
/// assert_eq!(slugify("API: Design Notes!"), "api-design-notes");
/// ```
pub fn slugify(identifier: &str) -> String {
    let kept: String = identifier
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut slug = String::new();
    let mut pending_hyphen = false;
    for c in kept.trim().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        }
    }
    slug
}

/// Derives a display title from a filename stem: hyphens become spaces
/// and each word is capitalized.
///
/// # Examples
///
/// ```
/// use warren::infra::titleize;
///
/// assert_eq!(titleize("meeting-notes"), "Meeting Notes");
/// ```
pub fn titleize(stem: &str) -> String {
    stem.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
