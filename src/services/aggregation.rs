use crate::domain::{ImportedRow, RankingEntry, ScoreEvent, User};
use ahash::AHashSet;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Builds the first ranking of a run: one entry per seed user, scored with
/// that user's best recorded event.
///
/// Events pointing at unknown user ids contribute to nothing. Users without
/// events land at score 0.
pub fn derive_initial_ranking(users: &[User], score_events: &[ScoreEvent]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = users
        .iter()
        .map(|user| {
            let best = score_events
                .iter()
                .filter(|event| event.user_id == user.id)
                .map(|event| event.score)
                .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
                .unwrap_or(0.0);

            RankingEntry {
                id: user.id,
                name: user.name.clone(),
                score: best,
            }
        })
        .collect();

    sort_descending(&mut entries);
    entries
}

/// Folds one manual submission into the ranking.
///
/// A known name accumulates: the submitted value is added to the current
/// total. An unknown name gets a fresh entry with the next free id, handed
/// out monotonically over the whole collection so it cannot collide with
/// ids introduced by seed data or earlier imports.
pub fn submit_score(ranking: &[RankingEntry], name: &str, score: f64) -> Vec<RankingEntry> {
    let mut entries = ranking.to_vec();

    if let Some(entry) = entries.iter_mut().find(|entry| entry.name == name) {
        entry.score += score;
    } else {
        entries.push(RankingEntry {
            id: next_entry_id(&entries),
            name: name.to_string(),
            score,
        });
    }

    sort_descending(&mut entries);
    entries
}

/// Merges one import batch into the ranking.
///
/// Ids are scoped to the batch: each distinct name gets the next sequential
/// id in first-seen order, and repeated names share it. Every row becomes
/// its own entry. The merge drops an entry only when id, name and score all
/// match one already kept; partial duplicates survive.
pub fn import_rows(ranking: &[RankingEntry], rows: &[ImportedRow]) -> Vec<RankingEntry> {
    let mut batch_ids: FxHashMap<&str, u64> = FxHashMap::default();
    let mut entries: Vec<RankingEntry> = Vec::with_capacity(rows.len() + ranking.len());

    for row in rows {
        let next = batch_ids.len() as u64 + 1;
        let id = *batch_ids.entry(row.name.as_str()).or_insert(next);

        entries.push(RankingEntry {
            id,
            name: row.name.clone(),
            score: row.score,
        });
    }

    entries.extend(ranking.iter().cloned());

    let mut seen: AHashSet<(u64, String, u64)> = AHashSet::with_capacity(entries.len());
    entries.retain(|entry| seen.insert((entry.id, entry.name.clone(), entry.score.to_bits())));

    sort_descending(&mut entries);
    entries
}

/// Lists every recorded score of one user as its own row, best first.
///
/// All rows share the user's id and resolved name; an id without a matching
/// seed user resolves to an empty name but still lists whatever events
/// carry it.
pub fn user_score_history(
    score_events: &[ScoreEvent],
    user_id: u64,
    users: &[User],
) -> Vec<RankingEntry> {
    let name = users
        .iter()
        .find(|user| user.id == user_id)
        .map(|user| user.name.clone())
        .unwrap_or_default();

    let mut entries: Vec<RankingEntry> = score_events
        .iter()
        .filter(|event| event.user_id == user_id)
        .map(|event| RankingEntry {
            id: user_id,
            name: name.clone(),
            score: event.score,
        })
        .collect();

    sort_descending(&mut entries);
    entries
}

fn next_entry_id(entries: &[RankingEntry]) -> u64 {
    entries
        .iter()
        .map(|entry| entry.id)
        .max()
        .map_or(1, |max| max + 1)
}

// total_cmp keeps the comparator a total order even for NaN scores, which
// free-form submissions can produce.
fn sort_descending(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
}
