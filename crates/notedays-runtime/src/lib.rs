mod collector;

pub use collector::{CollectSummary, Collector, SkippedNote};
