use crate::domain::storage::Storage;
use crate::domain::{ImportBatch, ImportedRow};
use crate::error::{BoardError, Result};
use crate::services::text_utils::NameNormalizer;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub struct ImportService {
    store: Arc<dyn Storage>,
}

impl ImportService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        info!("Created new Import service");
        Self { store }
    }

    /// Reads the given row files into import batches, preserving argument
    /// order. Batches parsed on an earlier run come from the cache unless
    /// `skip_cache` is set.
    pub async fn read_batches(
        &self,
        files: &[PathBuf],
        skip_cache: bool,
    ) -> Result<Vec<ImportBatch>> {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| BoardError::Other(e.to_string()))?,
        );

        let mut batches: Vec<Option<ImportBatch>> = Vec::new();
        batches.resize_with(files.len(), || None);
        let mut pending: Vec<(usize, String, String)> = Vec::new();

        for (idx, path) in files.iter().enumerate() {
            let source = source_label(path)?;
            pb.set_message(format!("Reading {}", source));

            if !skip_cache {
                if let Some(batch) = self.store.load_import_batch(&source)? {
                    info!("Using cached import batch for {}", source);
                    batches[idx] = Some(batch);
                    pb.inc(1);
                    continue;
                }
            }

            let contents = tokio::fs::read_to_string(path).await?;
            pending.push((idx, source, contents));
        }

        let parsed: Vec<(usize, ImportBatch)> = pending
            .into_par_iter()
            .map(|(idx, source, contents)| Ok((idx, parse_batch(source, &contents)?)))
            .collect::<Result<_>>()?;

        for (idx, batch) in parsed {
            self.store.save_import_batch(&batch)?;
            info!("Parsed {} rows from {}", batch.rows.len(), batch.source);
            batches[idx] = Some(batch);
            pb.inc(1);
        }

        pb.finish_with_message("Done reading import batches!");

        Ok(batches.into_iter().flatten().collect())
    }
}

fn source_label(path: &Path) -> Result<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return Err(BoardError::Parse(format!(
            "unsupported import file: {}",
            path.display()
        )));
    }

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
        .ok_or_else(|| BoardError::Parse(format!("unreadable file name: {}", path.display())))
}

fn parse_batch(source: String, contents: &str) -> Result<ImportBatch> {
    let rows: Vec<ImportedRow> = serde_json::from_str(contents)?;
    let rows = rows
        .into_iter()
        .map(|row| ImportedRow {
            name: NameNormalizer::normalize(&row.name),
            score: row.score,
        })
        .collect();

    Ok(ImportBatch { source, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemStore;
    use tempfile::tempdir;

    fn service(dir: &tempfile::TempDir) -> ImportService {
        ImportService::new(Arc::new(FileSystemStore::new(
            dir.path().join("data"),
            dir.path().join("cache"),
        )))
    }

    fn write_rows(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_rows_and_normalizes_names() {
        let dir = tempdir().unwrap();
        let file = write_rows(
            &dir,
            "spring_rows.json",
            r#"[{"name": "  Xena ", "score": 1.5}, {"name": "Yuri", "score": 2.0}]"#,
        );

        let batches = service(&dir).read_batches(&[file], false).await.unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].source, "spring_rows");
        assert_eq!(batches[0].rows[0].name, "Xena");
        assert_eq!(batches[0].rows[1].score, 2.0);
    }

    #[tokio::test]
    async fn rejects_files_that_are_not_json() {
        let dir = tempdir().unwrap();
        let file = write_rows(&dir, "scores.xlsx", "not rows");

        let result = service(&dir).read_batches(&[file], false).await;

        assert!(matches!(result, Err(BoardError::Parse(_))));
    }

    #[tokio::test]
    async fn serves_cached_batches_without_rereading_the_file() {
        let dir = tempdir().unwrap();
        let file = write_rows(&dir, "spring_rows.json", r#"[{"name": "Xena", "score": 1.0}]"#);

        let service = service(&dir);
        service.read_batches(&[file.clone()], false).await.unwrap();
        std::fs::remove_file(&file).unwrap();

        let batches = service.read_batches(&[file], false).await.unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].rows.len(), 1);
    }

    #[tokio::test]
    async fn skip_cache_forces_a_fresh_parse() {
        let dir = tempdir().unwrap();
        let file = write_rows(&dir, "spring_rows.json", r#"[{"name": "Xena", "score": 1.0}]"#);

        let service = service(&dir);
        service.read_batches(&[file.clone()], false).await.unwrap();
        write_rows(
            &dir,
            "spring_rows.json",
            r#"[{"name": "Xena", "score": 1.0}, {"name": "Yuri", "score": 2.0}]"#,
        );

        let batches = service.read_batches(&[file], true).await.unwrap();

        assert_eq!(batches[0].rows.len(), 2);
    }
}
