use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line} is missing the `{label}` field")]
    MissingField { label: String, line: usize },

    #[error("Line {line} has an unparseable `{label}` value")]
    InvalidField { label: String, line: usize },

    #[error("Ghost log ends with an unpaired line ({0})")]
    UnpairedLine(usize),

    #[error("Replay log has no entry aligned to ghost line {line}")]
    MisalignedReplay { line: usize },
}
