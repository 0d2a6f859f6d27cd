use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the seed users file
    #[arg(long, default_value = "seed/users.json")]
    pub users_file: PathBuf,

    /// Path to the seed score events file
    #[arg(long, default_value = "seed/scores.json")]
    pub scores_file: PathBuf,

    /// Directory to store output data
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory for caching intermediate results
    #[arg(long, default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Skip using cached data
    #[arg(long)]
    pub skip_cache: bool,

    /// How many ranking entries to render
    #[arg(long, default_value_t = 9)]
    pub top: usize,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "SCOREBOARD_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a score for a name to the current ranking
    Submit { name: String, score: f64 },

    /// Merge row files into the current ranking
    Import {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show every recorded score for one user
    History { user_id: u64 },
}
