use anyhow::Result;
use notedays_engine::{group_by_day, sort_buckets};
use notedays_runtime::Collector;

use crate::presentation::{present_agenda, AgendaDialog};
use crate::types::SortOrder;

/// Rescan, then show the agenda.
///
/// The host application collects on load and renders from memory on
/// demand; a fresh CLI process reproduces that sequence. A render failure
/// leaves the collected state intact, so the action is safe to retry.
pub fn handle(collector: &Collector, dialog: &dyn AgendaDialog, sort: SortOrder) -> Result<()> {
    let summary = collector.collect()?;
    for skipped in &summary.skipped {
        eprintln!("Warning: skipped {}: {}", skipped.path, skipped.error);
    }

    let events = collector.events();
    let mut buckets = group_by_day(&events);
    if sort == SortOrder::Date {
        sort_buckets(&mut buckets);
    }

    let agenda = present_agenda(&buckets, collector.vault_name());
    dialog.open(&agenda)
}
