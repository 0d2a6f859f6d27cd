use crate::config::Config;
use crate::domain::storage::Storage;
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::board::BoardService;
use crate::services::importing::ImportService;
use std::sync::Arc;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;
    init_tracing(&config.args.log_level);
    config.ensure_directories()?;

    let store: Arc<dyn Storage> =
        Arc::new(FileSystemStore::new(&config.args.data_dir, &config.args.cache_dir));
    let importing = ImportService::new(Arc::clone(&store));
    let board = BoardService::new(config, store, importing);

    board.run().await?;

    info!("Scoreboard run completed successfully!");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}
