use anyhow::Result;
use notedays_runtime::Collector;

use crate::presentation::{present_collect, ConsoleRenderer};

pub fn handle(collector: &Collector, renderer: &ConsoleRenderer, verbose: bool) -> Result<()> {
    let summary = collector.collect()?;

    for skipped in &summary.skipped {
        eprintln!("Warning: skipped {}: {}", skipped.path, skipped.error);
    }

    let vm = present_collect(&summary, collector.vault_name());
    renderer.render_collect(&vm, verbose)
}
