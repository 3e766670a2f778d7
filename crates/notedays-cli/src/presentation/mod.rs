//! # Presentation Layer
//!
//! User interface logic for the CLI, a small MVVM cut:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                  (Converter)        (Data)           (Driver)   ==(Text/HTML)==> [ View ]
//! ```
//!
//! Rules of the layer:
//!
//! - **ViewModels hold raw data, not formatted strings.** The `" – HH:MM"`
//!   suffix is view formatting; the view model carries `time: Option<String>`.
//!   JSON output is an API and always dumps the complete view model.
//! - **Presenters are pure functions** from domain data (day buckets, run
//!   summaries) to view models. No I/O, no formatting.
//! - **Views implement `fmt::Display`** and own layout, styling, and the
//!   text/HTML serializations.
//! - **The renderer is the driver**: it picks the serialization for the
//!   requested output format and owns the terminal. It is also the one
//!   implementation of the [`AgendaDialog`] capability that handlers render
//!   through.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use presenters::{present_agenda, present_collect};
pub use renderers::{AgendaDialog, ConsoleRenderer};
pub use view_models::{AgendaViewModel, CollectViewModel, DayViewModel, EntryViewModel};
