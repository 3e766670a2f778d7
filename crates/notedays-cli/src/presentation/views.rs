use std::fmt;

use owo_colors::OwoColorize;

use super::formatters::{escape_html, time_suffix};
use super::view_models::{AgendaViewModel, CollectViewModel};

/// Text layout of the agenda
pub struct AgendaTextView<'a> {
    pub data: &'a AgendaViewModel,
    pub color: bool,
}

impl fmt::Display for AgendaTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.days.is_empty() {
            writeln!(f, "No dates found in vault '{}'.", self.data.vault)?;
            return Ok(());
        }

        if self.color {
            writeln!(f, "{}", self.data.title.bold())?;
        } else {
            writeln!(f, "{}", self.data.title)?;
        }

        for day in &self.data.days {
            writeln!(f)?;
            if self.color {
                writeln!(f, "{}", day.date.cyan())?;
            } else {
                writeln!(f, "{}", day.date)?;
            }
            for entry in &day.entries {
                writeln!(
                    f,
                    "  {}{}  <{}>",
                    entry.label,
                    time_suffix(entry.time.as_deref()),
                    entry.href
                )?;
            }
        }
        Ok(())
    }
}

/// HTML listing of the agenda, matching the popup markup of the host app:
/// a heading, one `<h3>` per day, `<li><a>` entries with a time suffix
pub struct AgendaHtmlView<'a> {
    pub data: &'a AgendaViewModel,
}

impl fmt::Display for AgendaHtmlView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<h2>{}</h2>", escape_html(&self.data.title))?;
        for day in &self.data.days {
            writeln!(f, "<h3>{}</h3>", escape_html(&day.date))?;
            writeln!(f, "<ul>")?;
            for entry in &day.entries {
                writeln!(
                    f,
                    "<li><a href=\"{}\">{}</a>{}</li>",
                    escape_html(&entry.href),
                    escape_html(&entry.label),
                    escape_html(&time_suffix(entry.time.as_deref()))
                )?;
            }
            writeln!(f, "</ul>")?;
        }
        Ok(())
    }
}

/// Text layout of the collect-run report
pub struct CollectTextView<'a> {
    pub data: &'a CollectViewModel,
    pub verbose: bool,
}

impl fmt::Display for CollectTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collect complete: {} event(s) from {} note(s) in vault '{}'",
            self.data.events_found, self.data.notes_scanned, self.data.vault
        )?;
        if self.data.skipped.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, " ({} skipped)", self.data.skipped.len())?;
        }

        if self.verbose {
            writeln!(f, "Completed at: {}", self.data.completed_at)?;
        }
        Ok(())
    }
}
