// ⚠️ Error taxonomy for the quiz pipeline
// I/O and CSV failures travel as anyhow errors with file context; the
// variants below are the conditions callers may want to match on.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("{file}: missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("{file}:{line}: column '{column}' is not an integer: '{value}'")]
    InvalidNumber {
        file: String,
        line: usize,
        column: String,
        value: String,
    },

    #[error("{file}:{line}: rank is not an integer: '{value}'")]
    InvalidRank {
        file: String,
        line: usize,
        value: String,
    },

    /// The ranking set matched nothing in the stat table
    #[error("no entities matched the ranking files; nothing to quiz")]
    NoMatches,
}
