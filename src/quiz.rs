// ❓ Quiz Generator
// One multiple-choice item per entity; decoys come from the other entities'
// values for the same stat.

use rand::seq::index;
use rand::Rng;
use std::collections::BTreeSet;

use crate::stats::{EntityRecord, Stat};

/// Decoys per question when the domain is large enough
pub const DEFAULT_CHOICES: usize = 3;

/// QuizRecord - One row of the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    pub question: String,
    pub correct_answer: String,
    /// Wrong answers in the order they were drawn
    pub decoys: Vec<String>,

    // Reserved by the import format, never filled here
    pub explanation: String,
    pub ordered: String,
    pub generated_wrong_choices: String,
}

impl QuizRecord {
    pub fn new(question: String, correct_answer: String, decoys: Vec<String>) -> Self {
        QuizRecord {
            question,
            correct_answer,
            decoys,
            explanation: String::new(),
            ordered: String::new(),
            generated_wrong_choices: String::new(),
        }
    }
}

/// Question text for an entity, e.g. "ピカチュウの素早さ種族値"
pub fn question_text(display_name: &str, stat: Stat) -> String {
    format!("{}の{}種族値", display_name, stat.column())
}

/// Draw up to `count` decoys from `domain`, never returning `correct`.
///
/// With at least `count` candidates, exactly `count` are drawn uniformly
/// without replacement, in draw order. With fewer, every candidate is
/// returned.
pub fn pick_decoys<R: Rng + ?Sized>(
    correct: i64,
    domain: &BTreeSet<i64>,
    count: usize,
    rng: &mut R,
) -> Vec<i64> {
    let candidates: Vec<i64> = domain.iter().copied().filter(|&v| v != correct).collect();

    if candidates.len() < count {
        return candidates;
    }

    index::sample(rng, candidates.len(), count)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct QuizGenerator {
    stat: Stat,
    choices: usize,
}

impl QuizGenerator {
    pub fn new(stat: Stat) -> Self {
        QuizGenerator {
            stat,
            choices: DEFAULT_CHOICES,
        }
    }

    /// Builder pattern: number of decoys per question
    pub fn with_choices(mut self, choices: usize) -> Self {
        self.choices = choices;
        self
    }

    /// Distinct stat values across `records`, the pool decoys are drawn from
    pub fn value_domain(&self, records: &[EntityRecord]) -> BTreeSet<i64> {
        records.iter().map(|r| r.stat(self.stat)).collect()
    }

    /// One quiz record per entity, in input order.
    ///
    /// The decoy pool is built from `records` only, so pass the filtered set.
    pub fn generate<R: Rng + ?Sized>(&self, records: &[EntityRecord], rng: &mut R) -> Vec<QuizRecord> {
        let domain = self.value_domain(records);

        records
            .iter()
            .map(|record| {
                let correct = record.stat(self.stat);
                let decoys = pick_decoys(correct, &domain, self.choices, &mut *rng)
                    .into_iter()
                    .map(|v| v.to_string())
                    .collect();

                QuizRecord::new(
                    question_text(&record.display_name, self.stat),
                    correct.to_string(),
                    decoys,
                )
            })
            .collect()
    }
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new(Stat::default())
    }
}
