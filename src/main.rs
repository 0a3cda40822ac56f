use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use stat_quiz::{run, QuizConfig, QuizError, Stat, DEFAULT_BASE_STATS, DEFAULT_CHOICES};

/// Build a multiple-choice base-stat quiz from usage rankings
#[derive(Parser, Debug)]
#[command(name = "stat-quiz", version, about)]
struct Cli {
    /// Quiz CSV to write
    output: PathBuf,

    /// Ranking CSV files (rank,name per row)
    #[arg(required = true)]
    ranking_files: Vec<PathBuf>,

    /// Base-stat CSV file
    #[arg(long, env = "QUIZ_BASE_STATS", default_value = DEFAULT_BASE_STATS)]
    base_stats: PathBuf,

    /// Only use ranking rows at or above this rank
    #[arg(long)]
    rank_limit: Option<i64>,

    /// Stat to quiz
    #[arg(long, value_enum, default_value_t = Stat::Speed)]
    stat: Stat,

    /// Wrong answers per question
    #[arg(long, default_value_t = DEFAULT_CHOICES)]
    choices: usize,

    /// Seed for reproducible wrong answers
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> QuizConfig {
        QuizConfig {
            base_stats: self.base_stats,
            ranking_files: self.ranking_files,
            output: self.output,
            rank_limit: self.rank_limit,
            stat: self.stat,
            choices: self.choices,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = cli.into_config();

    println!("🧩 Stat Quiz Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match run(&config, &mut rng) {
        Ok(summary) => {
            println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("🎉 Done! Generated {} questions", summary.written);
            Ok(())
        }
        Err(e) if matches!(e.downcast_ref::<QuizError>(), Some(QuizError::NoMatches)) => {
            eprintln!("❌ No entities matched the ranking files.");
            eprintln!("   Check that ranking names match the base-stat names.");
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["stat-quiz", "out.csv", "rank1.csv", "rank2.csv"]).unwrap();
        let config = cli.into_config();

        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.ranking_files.len(), 2);
        assert_eq!(config.rank_limit, None);
        assert_eq!(config.stat, Stat::Speed);
        assert_eq!(config.choices, 3);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "stat-quiz",
            "out.csv",
            "rank.csv",
            "--base-stats",
            "stats.csv",
            "--rank-limit",
            "30",
            "--stat",
            "sp-defense",
            "--seed",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(5));
        let config = cli.into_config();
        assert_eq!(config.base_stats, PathBuf::from("stats.csv"));
        assert_eq!(config.rank_limit, Some(30));
        assert_eq!(config.stat, Stat::SpDefense);
    }

    #[test]
    fn test_cli_requires_a_ranking_file() {
        assert!(Cli::try_parse_from(["stat-quiz", "out.csv"]).is_err());
    }
}
