//! Wikilink extraction from note body text.

use regex::Regex;
use std::collections::BTreeSet;

/// Extracts the set of distinct `[[wikilink]]` targets from body text.
///
/// Matches are non-overlapping, left to right. The inner pattern
/// excludes bracket characters, so nested or malformed brackets yield
/// only the innermost pair's content. Inner text is trimmed of
/// surrounding whitespace; repeats collapse into one entry. No
/// normalization is applied: tokens are compared case-sensitively by
/// callers.
pub fn extract_wikilinks(body: &str) -> BTreeSet<String> {
    let link_re = Regex::new(r"\[\[([^\[\]]+)\]\]").unwrap();
    link_re
        .captures_iter(body)
        .map(|cap| cap[1].trim().to_string())
        .filter(|target| !target.is_empty())
        .collect()
}

/// Renders a target as a reference token, for substring checks and
/// rewrites.
pub fn wikilink(target: &str) -> String {
    format!("[[{}]]", target)
}
