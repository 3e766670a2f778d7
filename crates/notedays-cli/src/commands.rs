use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notedays_runtime::Collector;
use notedays_vault::FsVault;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::presentation::ConsoleRenderer;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref().map(Path::new))?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let vault_root = match cli.vault.map(PathBuf::from).or_else(|| config.vault.root.clone()) {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let vault = match cli.vault_name.or(config.vault.name) {
        Some(name) => FsVault::with_name(vault_root, name),
        None => FsVault::new(vault_root),
    };

    let collector = Collector::new(Box::new(vault));
    let renderer = ConsoleRenderer::new(cli.format);

    match command {
        Commands::Collect { verbose } => handlers::collect::handle(&collector, &renderer, verbose),
        Commands::View { sort } => handlers::view::handle(&collector, &renderer, sort),
    }
}

fn show_guidance() {
    println!("notedays - date collector for Markdown notes\n");
    println!("Quick commands:");
    println!("  notedays collect              # Rescan the vault for dates");
    println!("  notedays view                 # Show the day-grouped agenda");
    println!("  notedays view --sort date     # Same, sorted chronologically");
    println!("\nFor more commands:");
    println!("  notedays --help");
}
