//! Collector behavior against an in-memory note source.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notedays_runtime::Collector;
use notedays_types::{NoteRef, Result};
use notedays_vault::NoteSource;

/// In-memory vault; a `None` body marks a note that fails to read.
struct StubVault {
    notes: Mutex<BTreeMap<String, Option<String>>>,
    read_delay: Duration,
    active_reads: AtomicUsize,
    max_concurrent_reads: AtomicUsize,
}

impl StubVault {
    fn new(notes: &[(&str, Option<&str>)]) -> Self {
        let notes = notes
            .iter()
            .map(|(path, body)| (path.to_string(), body.map(|b| b.to_string())))
            .collect();
        Self {
            notes: Mutex::new(notes),
            read_delay: Duration::ZERO,
            active_reads: AtomicUsize::new(0),
            max_concurrent_reads: AtomicUsize::new(0),
        }
    }

    fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    fn replace_notes(&self, notes: &[(&str, Option<&str>)]) {
        *self.notes.lock().unwrap() = notes
            .iter()
            .map(|(path, body)| (path.to_string(), body.map(|b| b.to_string())))
            .collect();
    }
}

impl NoteSource for StubVault {
    fn vault_name(&self) -> &str {
        "stub"
    }

    fn list_notes(&self) -> Result<Vec<NoteRef>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .keys()
            .map(|path| {
                let name = path.trim_end_matches(".md").to_string();
                NoteRef::new(name, path.clone(), "stub")
            })
            .collect())
    }

    fn read_text(&self, note: &NoteRef) -> Result<String> {
        let active = self.active_reads.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent_reads.fetch_max(active, Ordering::SeqCst);
        if !self.read_delay.is_zero() {
            std::thread::sleep(self.read_delay);
        }

        let result = match self.notes.lock().unwrap().get(&note.path) {
            Some(Some(body)) => Ok(body.clone()),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("cannot read {}", note.path),
            )
            .into()),
        };

        self.active_reads.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

fn sorted_triples(collector: &Collector) -> Vec<(String, Option<String>, String)> {
    let mut triples: Vec<_> = collector
        .events()
        .into_iter()
        .map(|e| (e.date, e.time, e.note.path))
        .collect();
    triples.sort();
    triples
}

#[test]
fn test_collect_gathers_events_across_notes() {
    let vault = StubVault::new(&[
        ("a.md", Some("party 2024-01-01")),
        ("b.md", Some("standup 2024-01-01 09:00")),
    ]);
    let collector = Collector::new(Box::new(vault));

    let summary = collector.collect().unwrap();

    assert_eq!(summary.notes_scanned, 2);
    assert_eq!(summary.events_found, 2);
    assert!(summary.skipped.is_empty());
    assert_eq!(
        sorted_triples(&collector),
        vec![
            ("2024-01-01".to_string(), None, "a.md".to_string()),
            ("2024-01-01".to_string(), Some("09:00".to_string()), "b.md".to_string()),
        ]
    );
}

#[test]
fn test_unreadable_note_is_skipped_not_fatal() {
    let vault = StubVault::new(&[
        ("a.md", Some("2024-05-01")),
        ("broken.md", None),
        ("c.md", Some("2024-05-02")),
    ]);
    let collector = Collector::new(Box::new(vault));

    let summary = collector.collect().unwrap();

    assert_eq!(summary.notes_scanned, 3);
    assert_eq!(summary.events_found, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].path, "broken.md");

    let dates: Vec<String> = sorted_triples(&collector).into_iter().map(|t| t.0).collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-05-02"]);
}

#[test]
fn test_events_empty_before_first_collect() {
    let vault = StubVault::new(&[("a.md", Some("2024-01-01"))]);
    let collector = Collector::new(Box::new(vault));

    assert!(collector.events().is_empty());
}

#[test]
fn test_state_is_replaced_not_merged() {
    let vault = Arc::new(StubVault::new(&[("a.md", Some("2024-01-01 and 2024-01-02"))]));
    let handle = Arc::clone(&vault);
    let collector = Collector::new(Box::new(ArcSource(vault)));

    collector.collect().unwrap();
    assert_eq!(collector.events().len(), 2);

    handle.replace_notes(&[("z.md", Some("2030-12-31"))]);
    collector.collect().unwrap();

    let triples = sorted_triples(&collector);
    assert_eq!(triples, vec![("2030-12-31".to_string(), None, "z.md".to_string())]);
}

#[test]
fn test_repeated_collect_is_idempotent() {
    let vault = StubVault::new(&[
        ("a.md", Some("2024-01-01 then 2024-01-01 again")),
        ("b.md", Some("2024-02-02 15:45")),
    ]);
    let collector = Collector::new(Box::new(vault));

    collector.collect().unwrap();
    let first = sorted_triples(&collector);
    collector.collect().unwrap();
    let second = sorted_triples(&collector);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3); // duplicate match kept
}

#[test]
fn test_concurrent_collects_serialize() {
    let vault = Arc::new(
        StubVault::new(&[
            ("a.md", Some("2024-01-01")),
            ("b.md", Some("2024-01-02")),
            ("c.md", Some("2024-01-03")),
        ])
        .with_read_delay(Duration::from_millis(2)),
    );
    let probe = Arc::clone(&vault);
    let collector = Arc::new(Collector::new(Box::new(ArcSource(vault))));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let collector = Arc::clone(&collector);
            std::thread::spawn(move || collector.collect().unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Reads from different runs never overlapped
    assert_eq!(probe.max_concurrent_reads.load(Ordering::SeqCst), 1);
    assert_eq!(collector.events().len(), 3);
}

/// Adapter so a test can keep a handle to the vault it hands the collector.
struct ArcSource(Arc<StubVault>);

impl NoteSource for ArcSource {
    fn vault_name(&self) -> &str {
        self.0.vault_name()
    }

    fn list_notes(&self) -> Result<Vec<NoteRef>> {
        self.0.list_notes()
    }

    fn read_text(&self, note: &NoteRef) -> Result<String> {
        self.0.read_text(note)
    }
}
