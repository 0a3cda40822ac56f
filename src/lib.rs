// Stat Quiz - Core Library
// Base-stat table + usage rankings → multiple-choice quiz CSV

pub mod error;
pub mod stats;      // Stat Table Loader
pub mod ranking;    // Ranking Set Loader
pub mod filter;     // Join/Filter
pub mod quiz;       // Quiz Generator
pub mod writer;     // Quiz Writer
pub mod pipeline;

// Re-export commonly used types
pub use error::QuizError;
pub use stats::{
    BaseStats, EntityRecord, Stat,
    load_base_stats, split_name,
};
pub use ranking::{RankingSet, load_ranking_set};
pub use filter::filter_by_ranking;
pub use quiz::{QuizGenerator, QuizRecord, DEFAULT_CHOICES, pick_decoys, question_text};
pub use writer::{DECOY_SEPARATOR, QUIZ_HEADER, render_quiz_csv, write_quiz_csv};
pub use pipeline::{QuizConfig, RunSummary, DEFAULT_BASE_STATS, run};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
