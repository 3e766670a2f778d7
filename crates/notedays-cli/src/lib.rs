// NOTE: notedays Architecture Rationale
//
// Why collect-then-view in one process (not a persisted index)?
// - The event list is process-memory only; nothing is written anywhere
// - A fresh run over the vault is cheap (one regex pass per note)
// - The host application this mirrors collects on load and on manual
//   refresh, then renders from memory - `view` reproduces that sequence
//
// Why skip-and-continue on unreadable notes?
// - One broken note must not blank the whole agenda
// - Skips are recorded in the run summary and warned on stderr, so they
//   are visible without being fatal

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
