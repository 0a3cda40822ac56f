// 🏆 Ranking Set Loader
// Usage-ranking files → set of names allowed into the quiz

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::QuizError;

/// RankingSet - Names that appear in any ranking file within the rank limit
///
/// Ranks are only used while loading; the set itself is a membership test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingSet {
    names: HashSet<String>,
}

impl RankingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.trim().to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Read one ranking file into the set.
    ///
    /// Rows are `rank,name[,...]` with no header. Rows with fewer than two
    /// fields are skipped; a rank that is not an integer aborts the load.
    pub fn extend_from_file(&mut self, file_path: &Path, rank_limit: Option<i64>) -> Result<usize> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open ranking file: {}", file_path.display()))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let filename = file_path.display().to_string();
        let mut included = 0;

        for (row_num, result) in reader.records().enumerate() {
            let record = result
                .with_context(|| format!("Failed to parse CSV line {} in {}", row_num + 1, filename))?;

            if record.len() < 2 {
                continue;
            }

            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_num + 1);

            let raw_rank = record.get(0).unwrap_or("");
            let rank: i64 = raw_rank.trim().parse().map_err(|_| QuizError::InvalidRank {
                file: filename.clone(),
                line,
                value: raw_rank.to_string(),
            })?;

            if rank_limit.map_or(true, |limit| rank <= limit) {
                self.insert(record.get(1).unwrap_or(""));
                included += 1;
            }
        }

        Ok(included)
    }
}

/// Union every ranking file into one set, files read in the order given.
pub fn load_ranking_set(ranking_files: &[PathBuf], rank_limit: Option<i64>) -> Result<RankingSet> {
    let mut ranking = RankingSet::new();

    for path in ranking_files {
        let included = ranking.extend_from_file(path, rank_limit)?;
        println!("  ✓ {}: {} entries", path.display(), included);
    }

    Ok(ranking)
}
