//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "people")]
#[command(about = "Query the fixed person repository", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print records as JSON (overrides PEOPLE_OUTPUT). For `demo`, section headers stay plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every person in store order, optionally filtered by first name.
    List {
        #[arg(short, long)]
        first_name: Option<String>,
        /// Print first names only.
        #[arg(long)]
        names_only: bool,
    },
    /// Look up one person by id.
    Get {
        id: i32,
        /// Fail unless exactly one person has this id.
        #[arg(long)]
        strict: bool,
    },
    /// Print the first person in store order.
    First,
    /// Run every stream demonstration against the repository.
    Demo,
}
