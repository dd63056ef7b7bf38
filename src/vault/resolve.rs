//! Note resolution: locating a note file from a human-supplied
//! identifier.

use super::{NOTE_EXTENSION, Vault, VaultError, is_visible};
use crate::domain::decode;
use crate::infra::{read_text, slugify, titleize};
use std::path::{Path, PathBuf};

impl Vault {
    /// Resolves an identifier to a vault-relative note path.
    ///
    /// Strategies in order, first match wins:
    /// 1. exact relative path with extension under the root;
    /// 2. the slugified identifier matched against note filenames;
    /// 3. linear scan comparing against each note's title,
    ///    case-insensitively;
    /// 4. linear scan comparing against each note's aliases,
    ///    case-insensitively.
    ///
    /// Archived and hidden notes are invisible to every strategy. Cost
    /// is O(number of notes) in the worst case; callers doing repeated
    /// lookups should batch via [`Vault::enumerate`] instead of calling
    /// this in a loop.
    pub fn find_note(&self, identifier: &str) -> Result<PathBuf, VaultError> {
        let identifier = identifier.trim();

        // 1. Exact relative path.
        let rel = Path::new(identifier);
        if is_visible(rel) && self.note_path(rel).is_file() {
            return Ok(rel.to_path_buf());
        }

        let notes = self.scan()?;

        // 2. Slugified identifier against filenames.
        let slug_name = format!("{}.{}", slugify(identifier), NOTE_EXTENSION);
        for rel in &notes {
            if rel.file_name().and_then(|name| name.to_str()) == Some(slug_name.as_str()) {
                return Ok(rel.clone());
            }
        }

        // 3 and 4 need headers; read each note once and reuse.
        let lowered = identifier.to_lowercase();
        let mut headers = Vec::with_capacity(notes.len());
        for rel in &notes {
            let content = read_text(&self.note_path(rel))?;
            let (meta, _) = decode(&content);
            headers.push((rel, meta));
        }

        // 3. Title match.
        for (rel, meta) in &headers {
            let stem = rel
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let title = meta
                .title
                .clone()
                .unwrap_or_else(|| titleize(stem));
            if title.to_lowercase() == lowered {
                return Ok((*rel).clone());
            }
        }

        // 4. Alias match.
        for (rel, meta) in &headers {
            if meta
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == lowered)
            {
                return Ok((*rel).clone());
            }
        }

        Err(VaultError::NotFound {
            identifier: identifier.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn vault_with(notes: &[(&str, &str)]) -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        for (rel, content) in notes {
            let path = dir.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, content).unwrap();
        }
        let vault = Vault::open(dir.path());
        (dir, vault)
    }

    const PLAIN: &str = "body only\n";

    // ===========================================
    // Strategy 1: exact path
    // ===========================================

    #[test]
    fn finds_by_exact_filename() {
        let (_dir, vault) = vault_with(&[("meeting-notes.md", PLAIN)]);

        let found = vault.find_note("meeting-notes.md").unwrap();
        assert_eq!(found, PathBuf::from("meeting-notes.md"));
    }

    #[test]
    fn finds_by_relative_path_in_subdirectory() {
        let (_dir, vault) = vault_with(&[("projects/plan.md", PLAIN)]);

        let found = vault.find_note("projects/plan.md").unwrap();
        assert_eq!(found, PathBuf::from("projects/plan.md"));
    }

    #[test]
    fn exact_path_into_archive_rejected() {
        let (_dir, vault) = vault_with(&[("archive/old.md", PLAIN)]);

        assert!(matches!(
            vault.find_note("archive/old.md"),
            Err(VaultError::NotFound { .. })
        ));
    }

    // ===========================================
    // Strategy 2: slug
    // ===========================================

    #[test]
    fn finds_by_stem_without_extension() {
        let (_dir, vault) = vault_with(&[("meeting-notes.md", PLAIN)]);

        let found = vault.find_note("meeting-notes").unwrap();
        assert_eq!(found, PathBuf::from("meeting-notes.md"));
    }

    #[test]
    fn finds_by_slugified_identifier() {
        let (_dir, vault) = vault_with(&[("meeting-notes.md", PLAIN)]);

        let found = vault.find_note("Meeting Notes!").unwrap();
        assert_eq!(found, PathBuf::from("meeting-notes.md"));
    }

    #[test]
    fn slug_match_reaches_subdirectories() {
        let (_dir, vault) = vault_with(&[("projects/weekly-plan.md", PLAIN)]);

        let found = vault.find_note("Weekly Plan").unwrap();
        assert_eq!(found, PathBuf::from("projects/weekly-plan.md"));
    }

    // ===========================================
    // Strategy 3: title
    // ===========================================

    #[test]
    fn finds_by_title_case_insensitively() {
        let (_dir, vault) = vault_with(&[(
            "q3-retro.md",
            "---\ntitle: Quarterly Retrospective\n---\n",
        )]);

        let found = vault.find_note("quarterly retrospective").unwrap();
        assert_eq!(found, PathBuf::from("q3-retro.md"));
    }

    #[test]
    fn finds_by_fallback_title_when_header_absent() {
        let (_dir, vault) = vault_with(&[("shopping-list.md", PLAIN)]);

        let found = vault.find_note("Shopping List").unwrap();
        assert_eq!(found, PathBuf::from("shopping-list.md"));
    }

    // ===========================================
    // Strategy 4: alias
    // ===========================================

    #[test]
    fn finds_by_alias_case_insensitively() {
        let (_dir, vault) = vault_with(&[(
            "kubernetes.md",
            "---\ntitle: Kubernetes\naliases:\n  - k8s\n---\n",
        )]);

        let found = vault.find_note("K8S").unwrap();
        assert_eq!(found, PathBuf::from("kubernetes.md"));
    }

    // ===========================================
    // Precedence and failure
    // ===========================================

    #[test]
    fn filename_match_wins_over_title_match() {
        let (_dir, vault) = vault_with(&[
            ("alpha.md", "---\ntitle: Beta\n---\n"),
            ("beta.md", PLAIN),
        ]);

        // "beta" slugifies to beta.md before any title scan happens.
        let found = vault.find_note("beta").unwrap();
        assert_eq!(found, PathBuf::from("beta.md"));
    }

    #[test]
    fn title_match_wins_over_alias_match() {
        let (_dir, vault) = vault_with(&[
            ("one.md", "---\ntitle: X\naliases:\n  - shared\n---\n"),
            ("two.md", "---\ntitle: Shared\n---\n"),
        ]);

        let found = vault.find_note("shared").unwrap();
        assert_eq!(found, PathBuf::from("two.md"));
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        let (_dir, vault) = vault_with(&[("note.md", PLAIN)]);

        assert!(matches!(
            vault.find_note("no-such-note"),
            Err(VaultError::NotFound { .. })
        ));
    }

    #[test]
    fn archived_notes_invisible_to_all_strategies() {
        let (_dir, vault) = vault_with(&[(
            "archive/secret-plan.md",
            "---\ntitle: Secret Plan\naliases:\n  - sp\n---\n",
        )]);

        assert!(vault.find_note("secret-plan").is_err());
        assert!(vault.find_note("Secret Plan").is_err());
        assert!(vault.find_note("sp").is_err());
    }

    #[test]
    fn identifier_is_trimmed() {
        let (_dir, vault) = vault_with(&[("note.md", PLAIN)]);

        let found = vault.find_note("  note  ").unwrap();
        assert_eq!(found, PathBuf::from("note.md"));
    }

    // ===========================================
    // Idempotent re-resolution
    // ===========================================

    #[test]
    fn resolving_a_resolved_title_is_stable() {
        let (_dir, vault) = vault_with(&[(
            "api-design.md",
            "---\ntitle: API Design\n---\n\nbody\n",
        )]);

        let first = vault.find_note("api-design").unwrap();
        let summary = vault.load_summary(&first).unwrap();
        let second = vault.find_note(&summary.title).unwrap();
        assert_eq!(first, second);
    }
}
