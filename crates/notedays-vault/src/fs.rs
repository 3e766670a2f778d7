use std::path::{Path, PathBuf};

use notedays_types::{NoteRef, Result};
use walkdir::WalkDir;

use crate::traits::NoteSource;

/// Filesystem-backed vault
///
/// Walks a root directory for Markdown files. Unreadable directory entries
/// are skipped during the walk; the registry of notes is best-effort and a
/// later `read_text` reports any file-level failure.
pub struct FsVault {
    root: PathBuf,
    name: String,
}

impl FsVault {
    /// Open a vault at `root`, named after the root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "vault".to_string());
        Self { root, name }
    }

    /// Open a vault at `root` with an explicit name
    pub fn with_name(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_note(path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("md")
    }

    /// Vault-relative path with forward slashes, for links and display
    fn relative_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl NoteSource for FsVault {
    fn vault_name(&self) -> &str {
        &self.name
    }

    fn list_notes(&self) -> Result<Vec<NoteRef>> {
        let mut notes = Vec::new();

        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !Self::is_note(path) {
                continue;
            }

            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            notes.push(NoteRef::new(name, self.relative_path(path), self.name.clone()));
        }

        Ok(notes)
    }

    fn read_text(&self, note: &NoteRef) -> Result<String> {
        let text = std::fs::read_to_string(self.root.join(&note.path))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vault_with_files(files: &[(&str, &str)]) -> (TempDir, FsVault) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (rel, content) in files {
            let path = dir.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        let vault = FsVault::with_name(dir.path(), "test-vault");
        (dir, vault)
    }

    #[test]
    fn test_lists_markdown_files_recursively() {
        let (_dir, vault) = vault_with_files(&[
            ("daily.md", ""),
            ("work/meeting.md", ""),
            ("work/deep/notes.md", ""),
        ]);

        let mut paths: Vec<String> = vault
            .list_notes()
            .unwrap()
            .into_iter()
            .map(|n| n.path)
            .collect();
        paths.sort();

        assert_eq!(paths, vec!["daily.md", "work/deep/notes.md", "work/meeting.md"]);
    }

    #[test]
    fn test_ignores_non_markdown_files() {
        let (_dir, vault) = vault_with_files(&[("note.md", ""), ("image.png", ""), ("data.txt", "")]);

        let notes = vault.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].name, "note");
        assert_eq!(notes[0].vault, "test-vault");
    }

    #[test]
    fn test_read_text_returns_content() {
        let (_dir, vault) = vault_with_files(&[("a.md", "hello 2024-01-01")]);

        let notes = vault.list_notes().unwrap();
        let text = vault.read_text(&notes[0]).unwrap();
        assert_eq!(text, "hello 2024-01-01");
    }

    #[test]
    fn test_read_text_fails_for_missing_note() {
        let (_dir, vault) = vault_with_files(&[]);

        let ghost = NoteRef::new("ghost", "ghost.md", "test-vault");
        assert!(vault.read_text(&ghost).is_err());
    }
}
