// 💾 Quiz Writer
// Serializes quiz records to the memorization app's CSV import format

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::quiz::QuizRecord;

/// Separator between decoys inside the wrongChoices field
pub const DECOY_SEPARATOR: &str = ";";

/// Output header, in column order
pub const QUIZ_HEADER: [&str; 6] = [
    "question",
    "answers",
    "wrongChoices",
    "explanation",
    "ordered",
    "generatedWrongChoices",
];

#[derive(Debug, Serialize)]
struct QuizRow<'a> {
    question: &'a str,
    answers: &'a str,
    #[serde(rename = "wrongChoices")]
    wrong_choices: String,
    explanation: &'a str,
    ordered: &'a str,
    #[serde(rename = "generatedWrongChoices")]
    generated_wrong_choices: &'a str,
}

impl<'a> From<&'a QuizRecord> for QuizRow<'a> {
    fn from(record: &'a QuizRecord) -> Self {
        QuizRow {
            question: &record.question,
            answers: &record.correct_answer,
            wrong_choices: record.decoys.join(DECOY_SEPARATOR),
            explanation: &record.explanation,
            ordered: &record.ordered,
            generated_wrong_choices: &record.generated_wrong_choices,
        }
    }
}

/// Render the whole file in memory: header plus one row per record.
pub fn render_quiz_csv(records: &[QuizRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // serialize() only emits the header once a row exists
    if records.is_empty() {
        writer.write_record(QUIZ_HEADER)?;
    }

    for record in records {
        writer
            .serialize(QuizRow::from(record))
            .with_context(|| format!("Failed to serialize quiz row: {}", record.question))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush quiz CSV: {}", e.error()))
}

/// Write the quiz file. The destination only ever holds a complete file:
/// contents go to a sibling temp file that is then renamed into place.
pub fn write_quiz_csv(records: &[QuizRecord], output_path: &Path) -> Result<()> {
    let bytes = render_quiz_csv(records)?;

    let tmp_path = temp_path_for(output_path);
    let written = fs::write(&tmp_path, &bytes)
        .with_context(|| format!("Failed to write quiz file: {}", tmp_path.display()))
        .and_then(|()| {
            fs::rename(&tmp_path, output_path)
                .with_context(|| format!("Failed to move quiz file into place: {}", output_path.display()))
        });

    // A failed write may leave a partial temp file behind
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    written
}

fn temp_path_for(output_path: &Path) -> PathBuf {
    let mut name = output_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "quiz.csv".into());
    name.push(".tmp");
    output_path.with_file_name(name)
}
