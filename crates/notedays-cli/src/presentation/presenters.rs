use notedays_engine::DayBucket;
use notedays_runtime::CollectSummary;
use notedays_vault::note_url;

use super::view_models::{
    AgendaViewModel, CollectViewModel, DayViewModel, EntryViewModel, SkippedViewModel,
};

/// Convert day buckets into the agenda view model
///
/// Bucket order is taken as given - ordering policy is decided upstream
/// (faithful first-appearance order, or chronological via `sort_buckets`).
pub fn present_agenda(buckets: &[DayBucket], vault: &str) -> AgendaViewModel {
    let days = buckets
        .iter()
        .map(|bucket| DayViewModel {
            date: bucket.date.clone(),
            entries: bucket
                .events
                .iter()
                .map(|event| EntryViewModel {
                    label: event.note.name.clone(),
                    href: note_url(&event.note.vault, &event.note.path),
                    time: event.time.clone(),
                })
                .collect(),
        })
        .collect();

    AgendaViewModel {
        title: "Note calendar".to_string(),
        vault: vault.to_string(),
        days,
    }
}

/// Convert a collect-run summary into its report view model
pub fn present_collect(summary: &CollectSummary, vault: &str) -> CollectViewModel {
    CollectViewModel {
        vault: vault.to_string(),
        notes_scanned: summary.notes_scanned,
        events_found: summary.events_found,
        skipped: summary
            .skipped
            .iter()
            .map(|s| SkippedViewModel {
                path: s.path.clone(),
                error: s.error.clone(),
            })
            .collect(),
        completed_at: summary.completed_at.clone(),
    }
}
