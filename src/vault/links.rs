//! Link graph: reverse-reference ("backlink") computation.

use super::{NoteSummary, Vault, VaultError};
use crate::domain::{decode, extract_wikilinks};
use crate::infra::{read_text, titleize};

impl Vault {
    /// Returns the notes whose bodies reference the target.
    ///
    /// The target's canonical reference forms are its filename stem and
    /// its title; a note is a backlink source when its wikilink set
    /// contains either, matched case-sensitively. The target itself is
    /// excluded by path identity, so self-references never count.
    ///
    /// Every call rescans the vault: notes may be edited externally
    /// between calls, so no cache is kept. Cost is O(notes x body
    /// length).
    pub fn backlinks(&self, identifier: &str) -> Result<Vec<NoteSummary>, VaultError> {
        let target = self.find_note(identifier)?;
        let content = read_text(&self.note_path(&target))?;
        let (meta, _) = decode(&content);

        let stem = target
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
        let title = meta.title.unwrap_or_else(|| titleize(&stem));

        let mut sources = Vec::new();
        for rel in self.scan()? {
            if rel == target {
                continue;
            }

            let content = read_text(&self.note_path(&rel))?;
            let (_, body) = decode(&content);
            let references = extract_wikilinks(body);

            if references.contains(&stem) || references.contains(&title) {
                sources.push(self.summarize(&rel, &content)?);
            }
        }

        Ok(sources)
    }
}
