//! Mutating vault operations: note creation, rename with link
//! propagation, and the archive move.

use super::{ARCHIVE_DIR, NOTE_EXTENSION, Vault, VaultError};
use crate::domain::{NoteMetadata, decode, serialize, wikilink};
use crate::infra::{FsError, read_text, slugify, write_text_atomic};
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;

/// Result of a rename operation.
#[derive(Debug)]
pub struct RenameOutcome {
    /// Vault-relative path of the renamed note.
    pub new_path: PathBuf,
    /// Number of other notes whose links were rewritten.
    pub links_updated: usize,
}

impl Vault {
    /// Creates a new note at the vault root.
    ///
    /// The filename is the slugified title; the header carries the
    /// title, the current UTC timestamp, and any tags and aliases; the
    /// body is a single top-level heading. Header and body go to disk
    /// in one atomic write.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` when a file already occupies the target path.
    pub fn create_note(
        &self,
        title: &str,
        tags: Vec<String>,
        aliases: Vec<String>,
    ) -> Result<PathBuf, VaultError> {
        let rel = PathBuf::from(format!("{}.{}", slugify(title), NOTE_EXTENSION));
        let abs = self.note_path(&rel);
        if abs.exists() {
            return Err(VaultError::Conflict { path: rel });
        }

        let meta = NoteMetadata {
            title: Some(title.to_string()),
            created: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            tags,
            aliases,
            extra: Vec::new(),
        };
        let body = format!("\n# {}\n\n", title);
        write_text_atomic(&abs, &serialize(&meta, &body))?;

        self.record_change(&format!("Create note: {}", title));
        Ok(rel)
    }

    /// Renames a note and rewrites references to it across the vault.
    ///
    /// The transaction, in order:
    /// 1. resolve `old_identifier` (`NotFound` aborts before any write);
    /// 2. derive the new path from the slugified `new_identifier`
    ///    (`Conflict` aborts before any write);
    /// 3. rewrite the note's title to `new_identifier`, preserving every
    ///    other header field, and write the result to the new path;
    /// 4. for every other non-archived note containing a reference to
    ///    the old stem or the old identifier, rewrite both forms and
    ///    persist;
    /// 5. delete the old file last.
    ///
    /// All propagation reads are staged before the first write, so any
    /// read failure aborts with the vault untouched. Individual writes
    /// are atomic, but there is no rollback across files: a write
    /// failure mid-propagation leaves both old and new files present
    /// with some links rewritten.
    pub fn rename_note(
        &self,
        old_identifier: &str,
        new_identifier: &str,
    ) -> Result<RenameOutcome, VaultError> {
        let old_rel = self.find_note(old_identifier)?;
        let old_abs = self.note_path(&old_rel);

        let new_stem = slugify(new_identifier);
        let new_rel = PathBuf::from(format!("{}.{}", new_stem, NOTE_EXTENSION));
        let new_abs = self.note_path(&new_rel);
        if new_abs.exists() {
            return Err(VaultError::Conflict { path: new_rel });
        }

        let old_content = read_text(&old_abs)?;
        let (mut meta, body) = decode(&old_content);
        meta.title = Some(new_identifier.to_string());
        let new_content = serialize(&meta, body);

        let old_stem = old_rel
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();

        // Stage the propagation rewrites before touching the vault. The
        // old stem form is substituted before the identifier form, so a
        // token matching both is rewritten once, to the new stem.
        let old_stem_token = wikilink(&old_stem);
        let old_name_token = wikilink(old_identifier.trim());
        let new_stem_token = wikilink(&new_stem);
        let new_name_token = wikilink(new_identifier);

        let mut staged: Vec<(PathBuf, String)> = Vec::new();
        for rel in self.scan()? {
            if rel == new_rel {
                continue;
            }
            let content = read_text(&self.note_path(&rel))?;
            if content.contains(&old_stem_token) || content.contains(&old_name_token) {
                let rewritten = content
                    .replace(&old_stem_token, &new_stem_token)
                    .replace(&old_name_token, &new_name_token);
                staged.push((self.note_path(&rel), rewritten));
            }
        }

        // Commit phase.
        write_text_atomic(&new_abs, &new_content)?;
        let mut links_updated = 0;
        for (path, content) in &staged {
            write_text_atomic(path, content)?;
            links_updated += 1;
        }
        std::fs::remove_file(&old_abs).map_err(|e| FsError::from_io(&old_abs, e))?;

        self.record_change(&format!(
            "Rename: {} -> {}",
            old_identifier, new_identifier
        ));
        Ok(RenameOutcome {
            new_path: new_rel,
            links_updated,
        })
    }

    /// Moves a note into the archive subtree.
    ///
    /// The note keeps its filename only; any subdirectory structure is
    /// discarded. Links pointing at it are left dangling by design:
    /// archived notes are excluded from all future resolution and
    /// backlink scans.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` when the archive already holds a file with
    /// the same name.
    pub fn archive_note(&self, identifier: &str) -> Result<PathBuf, VaultError> {
        let rel = self.find_note(identifier)?;
        let abs = self.note_path(&rel);

        let archive_dir = self.root().join(ARCHIVE_DIR);
        std::fs::create_dir_all(&archive_dir).map_err(|e| FsError::from_io(&archive_dir, e))?;

        let filename = rel
            .file_name()
            .expect("a resolved note path has a filename");
        let dest_rel = PathBuf::from(ARCHIVE_DIR).join(filename);
        let dest_abs = self.root().join(&dest_rel);
        if dest_abs.exists() {
            return Err(VaultError::Conflict { path: dest_rel });
        }

        std::fs::rename(&abs, &dest_abs).map_err(|e| FsError::from_io(&abs, e))?;

        let stem = rel
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        self.record_change(&format!("Archive: {}", stem));
        Ok(dest_rel)
    }
}
