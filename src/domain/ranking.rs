use serde::{Deserialize, Serialize};

/// One row of the leaderboard. Entries are recomputed wholesale on every
/// triggering event (seed derivation, submission, import), never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: u64,
    pub name: String,
    pub score: f64,
}
