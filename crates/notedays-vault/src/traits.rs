use notedays_types::{NoteRef, Result};

/// Note discovery and content access
///
/// Responsibilities:
/// - Enumerate the notes of a vault
/// - Read note text on demand
/// - Expose the vault name used when building navigation links
///
/// Implementations are injected as `Box<dyn NoteSource>` so the collector
/// never touches the filesystem directly.
pub trait NoteSource: Send + Sync {
    /// Vault name (e.g., the vault's directory name)
    fn vault_name(&self) -> &str;

    /// Enumerate all notes currently in the vault
    ///
    /// Enumeration order is unspecified; callers must not rely on it.
    fn list_notes(&self) -> Result<Vec<NoteRef>>;

    /// Read the full text of a note
    ///
    /// Fails with `Error::Io` when the note is unreadable. Whether that
    /// aborts a batch is the caller's policy, not the source's.
    fn read_text(&self, note: &NoteRef) -> Result<String>;
}
