use serde::{Deserialize, Serialize};

/// Seed identity. Ids are unique and stable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// One recorded score for one user. Events are immutable facts and are
/// never aggregated at rest; projections happen in the aggregation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub user_id: u64,
    pub score: f64,
}
