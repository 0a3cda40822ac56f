// 🔁 Pipeline - load → filter → generate → write, one pass each

use anyhow::Result;
use rand::Rng;
use std::path::PathBuf;

use crate::error::QuizError;
use crate::filter::filter_by_ranking;
use crate::quiz::{QuizGenerator, DEFAULT_CHOICES};
use crate::ranking::load_ranking_set;
use crate::stats::{load_base_stats, Stat};
use crate::writer::write_quiz_csv;

pub const DEFAULT_BASE_STATS: &str = "dataset/basic/base_stats.csv";

/// Everything one run needs. The random source is passed separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub base_stats: PathBuf,
    pub ranking_files: Vec<PathBuf>,
    pub output: PathBuf,
    pub rank_limit: Option<i64>,
    pub stat: Stat,
    pub choices: usize,
}

impl QuizConfig {
    pub fn new(output: PathBuf, ranking_files: Vec<PathBuf>) -> Self {
        QuizConfig {
            base_stats: PathBuf::from(DEFAULT_BASE_STATS),
            ranking_files,
            output,
            rank_limit: None,
            stat: Stat::default(),
            choices: DEFAULT_CHOICES,
        }
    }
}

/// Counts at each stage of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub ranked: usize,
    pub filtered: usize,
    pub written: usize,
}

/// Run the whole pipeline.
///
/// Fails with `QuizError::NoMatches` when nothing survives the ranking
/// filter; in that case, as with every other failure, no output is written.
pub fn run<R: Rng + ?Sized>(config: &QuizConfig, rng: &mut R) -> Result<RunSummary> {
    // 1. Base stats
    println!("📂 Loading base stats: {}", config.base_stats.display());
    let records = load_base_stats(&config.base_stats)?;
    let loaded = records.len();
    println!("✓ Loaded {} entities", loaded);

    // 2. Ranking set
    println!("\n🏆 Loading ranking files...");
    if let Some(limit) = config.rank_limit {
        println!("  Rank limit: top {}", limit);
    }
    let ranking = load_ranking_set(&config.ranking_files, config.rank_limit)?;
    println!("✓ {} distinct ranked names", ranking.len());

    // 3. Join
    let filtered = filter_by_ranking(records, &ranking);
    println!("✓ {} entities to quiz", filtered.len());

    if filtered.is_empty() {
        return Err(QuizError::NoMatches.into());
    }

    // 4. Questions
    println!("\n❓ Generating questions ({})...", config.stat.column());
    let generator = QuizGenerator::new(config.stat).with_choices(config.choices);
    let quiz = generator.generate(&filtered, rng);

    // 5. Output
    println!("\n💾 Saving quiz: {}", config.output.display());
    write_quiz_csv(&quiz, &config.output)?;

    Ok(RunSummary {
        loaded,
        ranked: ranking.len(),
        filtered: filtered.len(),
        written: quiz.len(),
    })
}
