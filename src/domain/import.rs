use serde::{Deserialize, Serialize};

/// One tabular row handed to the pipeline by an external source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedRow {
    pub name: String,
    pub score: f64,
}

/// One import file's worth of rows, tagged with its source label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub source: String,
    pub rows: Vec<ImportedRow>,
}
