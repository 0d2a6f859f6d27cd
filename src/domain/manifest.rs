use crate::domain::ranking::RankingEntry;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub total_entries: usize,
    pub last_updated: String,
    pub entries: Vec<RankingEntry>,
    pub metadata: ManifestMetadata,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub sources: Vec<String>,
    pub version: String,
}

impl Manifest {
    pub fn new(entries: Vec<RankingEntry>, sources: Vec<String>) -> Self {
        let mut unique_sources: Vec<String> = Vec::with_capacity(sources.len());
        for source in sources {
            if !unique_sources.contains(&source) {
                unique_sources.push(source);
            }
        }

        Self {
            total_entries: entries.len(),
            last_updated: Local::now().to_rfc3339(),
            entries,
            metadata: ManifestMetadata {
                sources: unique_sources,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
