use thiserror::Error;

/// Errors surfaced by the labeling pipeline.
///
/// Every variant is non-recoverable at the point of detection: the batch run
/// aborts and the message carries enough context (offending row, expected vs.
/// actual dimension) to re-run after correction.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("feature dimension mismatch: classifier expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown label {value:?} in column {column}")]
    UnknownLabel { column: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
