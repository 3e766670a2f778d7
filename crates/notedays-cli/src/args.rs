use crate::types::{OutputFormat, SortOrder};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "notedays")]
#[command(about = "Collect dates from your notes and view them as a day-grouped agenda", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Vault root directory (falls back to config, then the current dir)
    #[arg(long, global = true)]
    pub vault: Option<String>,

    /// Vault name used in navigation links (defaults to the root dir name)
    #[arg(long, global = true)]
    pub vault_name: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rescan the vault for dates and report what was found
    Collect {
        /// Also print the run timestamp and full skip details
        #[arg(long)]
        verbose: bool,
    },

    /// Rescan, group by day, and show the agenda
    View {
        /// Day section ordering
        #[arg(long, default_value = "found")]
        sort: SortOrder,
    },
}
