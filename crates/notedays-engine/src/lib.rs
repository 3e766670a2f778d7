// Engine module - core processing logic (extraction, grouping)
// This layer sits between vault reads (source) and CLI presentation

mod extract;
mod group;

pub use extract::scan_text;
pub use group::{group_by_day, sort_buckets, DayBucket};
