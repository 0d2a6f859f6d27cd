use crate::config::cli::Args;
use crate::domain::{ScoreEvent, User};
use crate::error::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

pub(crate) mod cli;

#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub score_events: Vec<ScoreEvent>,
}

impl SeedData {
    fn load(users_file: &Path, scores_file: &Path) -> Result<Self> {
        let users = serde_json::from_str(&std::fs::read_to_string(users_file)?)?;
        let score_events = serde_json::from_str(&std::fs::read_to_string(scores_file)?)?;

        Ok(Self {
            users,
            score_events,
        })
    }
}

pub struct Config {
    pub args: Args,
    pub seed: SeedData,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();
        let seed = SeedData::load(&args.users_file, &args.scores_file)?;

        Ok(Self { args, seed })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }
        if !self.args.cache_dir.exists() {
            std::fs::create_dir_all(&self.args.cache_dir)?;
        }

        info!("Data and cache dirs exist");
        Ok(())
    }
}
