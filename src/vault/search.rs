//! Linear full-text search across note files.

use super::{Vault, VaultError};
use crate::infra::read_text;
use std::path::PathBuf;

/// One matching line with its surrounding context.
#[derive(Debug, Clone)]
pub struct SearchMatch {
    /// Vault-relative path of the matching note.
    pub path: PathBuf,
    /// 1-based line number of the match.
    pub line: usize,
    /// The matching line with up to `context` lines on either side.
    pub context: String,
}

impl Vault {
    /// Case-insensitive substring search over every non-archived note,
    /// headers included. A linear scan by design: there is no
    /// persistent index to go stale when notes are edited externally.
    pub fn search(&self, query: &str, context: usize) -> Result<Vec<SearchMatch>, VaultError> {
        let needle = query.to_lowercase();
        let mut results = Vec::new();

        for rel in self.scan()? {
            let content = read_text(&self.note_path(&rel))?;
            let lines: Vec<&str> = content.split('\n').collect();

            for (i, line) in lines.iter().enumerate() {
                if line.to_lowercase().contains(&needle) {
                    let start = i.saturating_sub(context);
                    let end = (i + context + 1).min(lines.len());
                    results.push(SearchMatch {
                        path: rel.clone(),
                        line: i + 1,
                        context: lines[start..end].join("\n"),
                    });
                }
            }
        }

        Ok(results)
    }
}
