use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DiffError {
    #[error("invalid diff at line {line_number}: {message}")]
    Parse { message: String, line_number: usize },

    /// A hunk header claimed the queried line was inside its range, but the
    /// hunk body ran out of original-file lines before reaching it.
    #[error("malformed git diff hunk")]
    MalformedHunk,
}

pub type Result<T> = std::result::Result<T, DiffError>;
