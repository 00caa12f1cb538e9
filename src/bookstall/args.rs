use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookstall")]
#[command(about = "Command-line inventory manager for a bookstore", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the persisted inventory (defaults to the platform
    /// data dir, or $BOOKSTALL_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Skip seeding an empty inventory from the bundled bootstrap CSV
    #[arg(long, global = true)]
    pub no_bootstrap: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the front of the inventory
    #[command(alias = "a")]
    Add {
        /// Book title
        name: String,

        /// Price in KHR (free-form; "4,000 KHR" is fine)
        #[arg(long)]
        khr: Option<String>,

        /// Price in USD (overrides the rate-derived value)
        #[arg(long)]
        usd: Option<String>,
    },

    /// List the inventory
    #[command(alias = "ls")]
    List {
        /// Only show records matching this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search the inventory
    Search { term: String },

    /// Edit the record at a position (as shown by `list`)
    #[command(alias = "e")]
    Edit {
        /// 1-based position from the last listing
        position: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        khr: Option<String>,

        /// Explicit USD; omit it to re-derive USD when --khr is given
        #[arg(long)]
        usd: Option<String>,
    },

    /// Delete the record at a position
    #[command(alias = "rm")]
    Delete {
        /// 1-based position from the last listing
        position: usize,
    },

    /// Replace the inventory with a CSV or spreadsheet file
    Import {
        /// .csv, .xlsx, .xls or .ods file (first sheet only)
        file: PathBuf,
    },

    /// Export the inventory as CSV
    Export {
        /// Output path (defaults to books_export.csv)
        #[arg(required = false)]
        path: Option<PathBuf>,
    },

    /// Show or set the display theme
    Theme {
        /// "light" or "dark"
        mode: Option<String>,
    },

    /// Show or set configuration values
    Config {
        /// "bootstrap-file" or "export-file"; omit to show everything
        key: Option<String>,

        /// New value; omit to show the key's current value
        value: Option<String>,
    },
}
