use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checklist")]
#[command(about = "A terminal checklist that remembers what you ticked off", long_about = None)]
pub struct Cli {
    /// SQLite file holding the list (default: ./list.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item, checked, dated today
    Add { label: String },
    /// Print the list and exit
    Show,
    /// Flip the checked state of an item
    Toggle { label: String },
    /// Delete an item
    Remove { label: String },
    /// Write a config file with the default settings
    InitConfig,
}
