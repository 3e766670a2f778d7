//! Fixtures for building throwaway vaults.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Tempdir-backed vault for tests.
///
/// Dropped together with its directory; keep the fixture alive for the
/// duration of the test.
pub struct VaultFixture {
    temp_dir: TempDir,
}

impl Default for VaultFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Vault root directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a note at a vault-relative path, creating parent directories.
    pub fn write_note(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create note parent dir");
        }
        fs::write(&path, content).expect("Failed to write note");
        path
    }

    /// Write raw bytes at a vault-relative path.
    ///
    /// Invalid UTF-8 makes a note that enumerates but fails to read as
    /// text, which is how tests provoke per-note skip handling.
    pub fn write_note_bytes(&self, rel_path: &str, bytes: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create note parent dir");
        }
        fs::write(&path, bytes).expect("Failed to write note");
        path
    }

    /// Remove a previously written note.
    pub fn remove_note(&self, rel_path: &str) {
        fs::remove_file(self.temp_dir.path().join(rel_path)).expect("Failed to remove note");
    }
}
