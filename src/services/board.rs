use crate::config::cli::Command;
use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::{Manifest, RankingEntry};
use crate::error::Result;
use crate::services::aggregation;
use crate::services::importing::ImportService;
use crate::services::text_utils::NameNormalizer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct BoardService {
    config: Config,
    store: Arc<dyn Storage>,
    importing: ImportService,
}

impl BoardService {
    pub fn new(config: Config, store: Arc<dyn Storage>, importing: ImportService) -> Self {
        Self {
            config,
            store,
            importing,
        }
    }

    pub async fn run(&self) -> Result<()> {
        match &self.config.args.command {
            None => self.refresh(),
            Some(Command::Submit { name, score }) => self.submit(name, *score),
            Some(Command::Import { files }) => self.import(files).await,
            Some(Command::History { user_id }) => self.history(*user_id),
        }
    }

    /// Rebuilds or reloads the ranking from seed data and publishes it.
    fn refresh(&self) -> Result<()> {
        info!("Starting ranking pipeline");

        let ranking = self.current_ranking()?;
        self.save_and_render(&ranking, self.seed_sources())
    }

    fn submit(&self, name: &str, score: f64) -> Result<()> {
        let name = NameNormalizer::normalize(name);
        info!("Submitting score {} for {}", score, name);

        let ranking = self.current_ranking()?;
        let ranking = aggregation::submit_score(&ranking, &name, score);

        let mut sources = self.seed_sources();
        sources.push("manual".to_string());
        self.save_and_render(&ranking, sources)
    }

    async fn import(&self, files: &[PathBuf]) -> Result<()> {
        let batches = self
            .importing
            .read_batches(files, self.config.args.skip_cache)
            .await?;

        let mut ranking = self.current_ranking()?;
        let mut sources = self.seed_sources();

        for batch in &batches {
            info!("Merging {} rows from {}", batch.rows.len(), batch.source);
            ranking = aggregation::import_rows(&ranking, &batch.rows);
            sources.push(batch.source.clone());
        }

        self.save_and_render(&ranking, sources)
    }

    fn history(&self, user_id: u64) -> Result<()> {
        let seed = &self.config.seed;
        let history = aggregation::user_score_history(&seed.score_events, user_id, &seed.users);

        if history.is_empty() {
            info!("No recorded scores for user {}", user_id);
            return Ok(());
        }

        println!("{} Scores", history[0].name);
        for entry in &history {
            println!("Score: {}", entry.score);
        }

        Ok(())
    }

    /// The ranking every operation starts from: the cached one when present,
    /// otherwise a fresh derivation from seed data.
    fn current_ranking(&self) -> Result<Vec<RankingEntry>> {
        if !self.config.args.skip_cache {
            if let Some(cached) = self.store.load_ranking()? {
                info!("Using cached ranking ({} entries)", cached.len());
                return Ok(cached);
            }
        }

        let seed = &self.config.seed;
        info!(
            "Deriving initial ranking from {} users and {} score events",
            seed.users.len(),
            seed.score_events.len()
        );

        Ok(aggregation::derive_initial_ranking(
            &seed.users,
            &seed.score_events,
        ))
    }

    fn save_and_render(&self, ranking: &[RankingEntry], sources: Vec<String>) -> Result<()> {
        self.store.save_ranking(ranking)?;

        let manifest = Manifest::new(ranking.to_vec(), sources);
        self.store.save_manifest(&manifest)?;
        info!("Saved manifest with {} entries", manifest.total_entries);

        self.render(ranking);
        Ok(())
    }

    fn render(&self, ranking: &[RankingEntry]) {
        println!("Ranking List");
        for (position, entry) in ranking.iter().take(self.config.args.top).enumerate() {
            println!("{}. {} - Score: {}", position + 1, entry.name, entry.score);
        }
    }

    fn seed_sources(&self) -> Vec<String> {
        vec![
            self.config.args.users_file.display().to_string(),
            self.config.args.scores_file.display().to_string(),
        ]
    }
}
