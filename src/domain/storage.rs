use super::{ImportBatch, Manifest, RankingEntry};
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn load_ranking(&self) -> Result<Option<Vec<RankingEntry>>>;
    fn save_ranking(&self, entries: &[RankingEntry]) -> Result<()>;
    fn load_import_batch(&self, source: &str) -> Result<Option<ImportBatch>>;
    fn save_import_batch(&self, batch: &ImportBatch) -> Result<()>;
    fn save_manifest(&self, manifest: &Manifest) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    // Base directories
    pub const IMPORTS_DIR: &'static str = "imports";

    pub const RANKING: &'static str = "ranking";
    pub const MANIFEST: &'static str = "manifest";
}
