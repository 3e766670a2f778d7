use notedays_types::{EventRecord, NoteRef};
use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM-DD`, optionally followed by ` HH:MM` or `THH:MM`
///
/// Matching is purely lexical. Digits are not range-checked, so a string
/// like `2024-13-40` is a valid capture.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4}-\d{2}-\d{2})(?:[ T](\d{2}:\d{2}))?\b").expect("date pattern compiles")
});

/// Scan note text for date occurrences, left to right
///
/// Non-overlapping, leftmost-first. Emits one record per match in order of
/// occurrence; repeated identical matches are all kept.
pub fn scan_text(text: &str, note: &NoteRef) -> Vec<EventRecord> {
    DATE_PATTERN
        .captures_iter(text)
        .map(|caps| {
            EventRecord::new(
                caps[1].to_string(),
                caps.get(2).map(|m| m.as_str().to_string()),
                note.clone(),
            )
        })
        .collect()
}
