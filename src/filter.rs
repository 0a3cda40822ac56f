// 🔗 Join/Filter - keep stat rows whose base name is ranked

use crate::ranking::RankingSet;
use crate::stats::EntityRecord;

/// Keep the records whose `match_name` is in the ranking set, in table order.
///
/// Unranked records are dropped without comment. An empty result is left to
/// the caller to decide on.
pub fn filter_by_ranking(records: Vec<EntityRecord>, ranking: &RankingSet) -> Vec<EntityRecord> {
    records
        .into_iter()
        .filter(|record| ranking.contains(&record.match_name))
        .collect()
}
