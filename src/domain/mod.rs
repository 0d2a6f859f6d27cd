mod import;
mod manifest;
mod ranking;
pub(crate) mod storage;
mod user;

pub use import::{ImportBatch, ImportedRow};
pub use manifest::{Manifest, ManifestMetadata};
pub use ranking::RankingEntry;
pub use user::{ScoreEvent, User};
