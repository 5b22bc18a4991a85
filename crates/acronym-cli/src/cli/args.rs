use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "acronym",
    about = "Find acronym-like names hidden in a project title",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank dictionary words that can be spelled from a title
    Search {
        /// Project title (quoting is optional)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        #[command(flatten)]
        args: SearchArgs,
    },

    /// Search every title in a file, one title per line
    Batch {
        /// File with one title per line
        file: PathBuf,
        #[command(flatten)]
        args: SearchArgs,
    },

    /// Show how a title splits into letters, words and initials
    Analyze {
        /// Project title (quoting is optional)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit distance between two words, ignoring case
    Distance { a: String, b: String },

    /// Print the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
}

/// Flags shared by `search` and `batch`. Unset values fall back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Word list, one word per line
    #[arg(long, env = "ACRONYM_DICT")]
    pub dict: Option<PathBuf>,
    /// Shortest word to report
    #[arg(long)]
    pub min_length: Option<usize>,
    /// Maximum results per category
    #[arg(long)]
    pub max_results: Option<usize>,
    /// Only keep words containing this text
    #[arg(long)]
    pub filter: Option<String>,
    /// Skip compound words
    #[arg(long)]
    pub no_compounds: bool,
    /// Skip near matches of the initials
    #[arg(long)]
    pub no_near: bool,
    /// Largest edit distance for near matches
    #[arg(long)]
    pub max_edit_distance: Option<usize>,
    /// Fail instead of searching an empty dictionary when the word list can't be read
    #[arg(long)]
    pub strict: bool,
    /// Output as JSON (JSON Lines for `batch`)
    #[arg(long)]
    pub json: bool,
}
