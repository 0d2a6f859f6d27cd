use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::{ImportBatch, Manifest, RankingEntry};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
    cache_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    fn json_path(base_dir: &Path, subdir: Option<&str>, key: &str) -> PathBuf {
        if let Some(dir) = subdir {
            base_dir.join(dir).join(format!("{}.json", key))
        } else {
            base_dir.join(format!("{}.json", key))
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(
        base_dir: &Path,
        subdir: Option<&str>,
        key: &str,
        data: &T,
    ) -> Result<()> {
        let path = Self::json_path(base_dir, subdir, key);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        base_dir: &Path,
        subdir: Option<&str>,
        key: &str,
    ) -> Result<Option<T>> {
        let path = Self::json_path(base_dir, subdir, key);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn load_ranking(&self) -> Result<Option<Vec<RankingEntry>>> {
        Self::read_json(&self.cache_dir, None, StorageKeys::RANKING)
    }

    fn save_ranking(&self, entries: &[RankingEntry]) -> Result<()> {
        Self::write_json(&self.cache_dir, None, StorageKeys::RANKING, entries)
    }

    fn load_import_batch(&self, source: &str) -> Result<Option<ImportBatch>> {
        let key = source.replace('/', "_");
        Self::read_json(&self.cache_dir, Some(StorageKeys::IMPORTS_DIR), &key)
    }

    fn save_import_batch(&self, batch: &ImportBatch) -> Result<()> {
        let key = batch.source.replace('/', "_");
        Self::write_json(&self.cache_dir, Some(StorageKeys::IMPORTS_DIR), &key, batch)
    }

    fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
        Self::write_json(&self.data_dir, None, StorageKeys::MANIFEST, manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImportedRow;
    use tempfile::tempdir;

    fn store(dir: &tempfile::TempDir) -> FileSystemStore {
        FileSystemStore::new(dir.path().join("data"), dir.path().join("cache"))
    }

    fn entry(id: u64, name: &str, score: f64) -> RankingEntry {
        RankingEntry {
            id,
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn ranking_round_trips_through_cache() {
        let dir = tempdir().unwrap();
        let store = store(&dir);
        let entries = vec![entry(1, "Ada", 30.0), entry(2, "Brian", 20.0)];

        store.save_ranking(&entries).unwrap();
        let loaded = store.load_ranking().unwrap().unwrap();

        assert_eq!(loaded, entries);
    }

    #[test]
    fn missing_ranking_loads_as_none() {
        let dir = tempdir().unwrap();
        assert!(store(&dir).load_ranking().unwrap().is_none());
    }

    #[test]
    fn import_batch_round_trips_under_imports_dir() {
        let dir = tempdir().unwrap();
        let store = store(&dir);
        let batch = ImportBatch {
            source: "spring_rows".to_string(),
            rows: vec![ImportedRow {
                name: "Ada".to_string(),
                score: 12.0,
            }],
        };

        store.save_import_batch(&batch).unwrap();
        let loaded = store.load_import_batch("spring_rows").unwrap().unwrap();

        assert_eq!(loaded.source, batch.source);
        assert_eq!(loaded.rows, batch.rows);
        assert!(dir
            .path()
            .join("cache")
            .join(StorageKeys::IMPORTS_DIR)
            .join("spring_rows.json")
            .exists());
    }

    #[test]
    fn manifest_lands_in_data_dir() {
        let dir = tempdir().unwrap();
        let store = store(&dir);

        let manifest = Manifest::new(vec![entry(1, "Ada", 30.0)], vec!["seed".to_string()]);
        store.save_manifest(&manifest).unwrap();

        assert!(dir.path().join("data").join("manifest.json").exists());
    }
}
