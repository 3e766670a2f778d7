use std::sync::Mutex;

use anyhow::{Context, Result};
use notedays_engine::scan_text;
use notedays_types::EventRecord;
use notedays_vault::NoteSource;
use serde::Serialize;

/// Outcome of one collect run
#[derive(Debug, Clone, Serialize)]
pub struct CollectSummary {
    /// Notes enumerated by the source, including skipped ones
    pub notes_scanned: usize,
    pub events_found: usize,
    pub skipped: Vec<SkippedNote>,
    /// RFC 3339 UTC timestamp of run completion
    pub completed_at: String,
}

/// A note that could not be read during a collect run
#[derive(Debug, Clone, Serialize)]
pub struct SkippedNote {
    pub path: String,
    pub error: String,
}

/// Owner of the process-wide event list
///
/// The mutex is held for the whole collect run: overlapping refreshes run
/// strictly one after another, and `events()` can never observe a half-built
/// list. A run replaces the list wholesale; nothing is merged across runs.
pub struct Collector {
    source: Box<dyn NoteSource>,
    state: Mutex<Vec<EventRecord>>,
}

impl Collector {
    pub fn new(source: Box<dyn NoteSource>) -> Self {
        Self {
            source,
            state: Mutex::new(Vec::new()),
        }
    }

    pub fn vault_name(&self) -> &str {
        self.source.vault_name()
    }

    /// Scan every note and rebuild the event list
    ///
    /// An unreadable note is skipped and recorded in the summary; the rest
    /// of the batch still contributes events. Only a failure to enumerate
    /// the vault itself aborts the run, leaving the previous list intact.
    pub fn collect(&self) -> Result<CollectSummary> {
        let mut state = self.state.lock().unwrap();

        let notes = self
            .source
            .list_notes()
            .with_context(|| format!("Failed to list notes in vault '{}'", self.vault_name()))?;

        let mut events = Vec::new();
        let mut skipped = Vec::new();

        for note in &notes {
            match self.source.read_text(note) {
                Ok(text) => events.extend(scan_text(&text, note)),
                Err(err) => skipped.push(SkippedNote {
                    path: note.path.clone(),
                    error: err.to_string(),
                }),
            }
        }

        let summary = CollectSummary {
            notes_scanned: notes.len(),
            events_found: events.len(),
            skipped,
            completed_at: chrono::Utc::now().to_rfc3339(),
        };

        *state = events;
        Ok(summary)
    }

    /// Snapshot of the current event list
    pub fn events(&self) -> Vec<EventRecord> {
        self.state.lock().unwrap().clone()
    }
}
