//! Record classification error types.

/// Framing faults that prevent a record from being classified.
///
/// These never stop the pipeline; the affected record is dropped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A tagged header whose timestamp could not be parsed.
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// A direction marker or client header without a method name.
    #[error("Missing method name in: {0}")]
    MissingMethod(String),

    /// A header that requires body lines but has none.
    #[error("Record has no body")]
    MissingBody,
}
