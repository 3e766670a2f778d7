use anyhow::Result;
use is_terminal::IsTerminal;
use notedays_types::Error;

use super::view_models::{AgendaViewModel, CollectViewModel};
use super::views::{AgendaHtmlView, AgendaTextView, CollectTextView};
use crate::types::OutputFormat;

/// Capability to display the grouped agenda
///
/// Implemented once by the console renderer and injected into handlers, so
/// extraction and grouping stay independent of any display machinery. A
/// failed `open` is fatal only to that one action.
pub trait AgendaDialog {
    fn open(&self, agenda: &AgendaViewModel) -> Result<()>;
}

/// Output driver: picks the serialization for the requested format
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn render_collect(&self, vm: &CollectViewModel, verbose: bool) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", to_json(vm)?),
            // The run report has no HTML shape; fall back to text
            OutputFormat::Plain | OutputFormat::Html => print!(
                "{}",
                CollectTextView { data: vm, verbose }
            ),
        }
        Ok(())
    }
}

impl AgendaDialog for ConsoleRenderer {
    fn open(&self, agenda: &AgendaViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", to_json(agenda)?),
            OutputFormat::Html => print!("{}", AgendaHtmlView { data: agenda }),
            OutputFormat::Plain => print!(
                "{}",
                AgendaTextView {
                    data: agenda,
                    color: self.color,
                }
            ),
        }
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| Error::Render(err.to_string()).into())
}
