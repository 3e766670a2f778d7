use serde::{Deserialize, Serialize};

// NOTE: Schema Design Goals
//
// 1. Verbatim capture: date/time fields hold exactly the matched text.
//    No calendar validation happens anywhere in the pipeline - "2024-13-40"
//    is a legal value and flows through grouping and rendering untouched.
//
// 2. Snapshot semantics: a NoteRef identifies a note as it existed at scan
//    time. The note may be renamed or deleted afterward; dereferencing a
//    stale link is the navigating application's problem, not ours.
//
// 3. Replaceability: the whole event list is rebuilt per collect run.
//    Records carry no ids and no run metadata, so two runs over an unchanged
//    vault produce equal multisets.

/// Reference to a note inside a vault
///
/// `path` is vault-relative with forward slashes, suitable for embedding in
/// a navigation link. `name` is the display label (file stem).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteRef {
    pub name: String,
    pub path: String,
    pub vault: String,
}

impl NoteRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>, vault: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            vault: vault.into(),
        }
    }
}

/// One extracted date occurrence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRecord {
    /// Matched date, always `YYYY-MM-DD` lexically
    pub date: String,

    /// Matched time (`HH:MM`), absent when the pattern matched date-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Note the match came from
    pub note: NoteRef,
}

impl EventRecord {
    pub fn new(date: impl Into<String>, time: Option<String>, note: NoteRef) -> Self {
        Self {
            date: date.into(),
            time,
            note,
        }
    }
}
