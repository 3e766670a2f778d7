use std::collections::HashMap;

use notedays_types::EventRecord;

/// All events sharing one date string
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: String,
    pub events: Vec<EventRecord>,
}

/// Partition a flat event list into per-date buckets
///
/// Bucket order is first-appearance order of each date in the input; events
/// inside a bucket keep their input order. The union of all buckets is
/// exactly the input list.
pub fn group_by_day(events: &[EventRecord]) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for event in events {
        let slot = *index.entry(event.date.clone()).or_insert_with(|| {
            buckets.push(DayBucket {
                date: event.date.clone(),
                events: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].events.push(event.clone());
    }

    buckets
}

/// Order buckets chronologically
///
/// Lexicographic order of `YYYY-MM-DD` strings coincides with chronological
/// order, so no date parsing is needed.
pub fn sort_buckets(buckets: &mut [DayBucket]) {
    buckets.sort_by(|a, b| a.date.cmp(&b.date));
}
