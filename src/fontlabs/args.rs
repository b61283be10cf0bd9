use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fontlabs", version)]
#[command(about = "Browse a font catalog from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the stylesheet links injected while rendering
    #[arg(long, global = true)]
    pub links: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog, most downloaded first
    #[command(alias = "ls")]
    Browse {
        /// Show a single category (e.g. serif, script, monospace)
        #[arg(short, long)]
        category: Option<String>,

        /// How many pages to scroll through (a category is always one page)
        #[arg(short, long, default_value_t = 1, conflicts_with = "category")]
        pages: usize,
    },

    /// Show the trending page
    Trending,

    /// Search fonts by name
    Search { term: String },

    /// Show one font
    #[command(alias = "v")]
    Show { slug: String },

    /// Download a font (counts toward its ranking)
    #[command(alias = "dl")]
    Download { slug: String },

    /// Add or remove a font from your favorites
    Fav { slug: String },

    /// List your favorite fonts
    Favorites,

    /// Import fonts from a Google Fonts API response
    Populate {
        /// Path to a saved `webfonts` JSON response
        file: PathBuf,

        /// Number of families to import
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., page-size, user)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
