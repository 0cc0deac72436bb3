//! Payload decoding error types.

/// Payload faults. The affected record is dropped; the pipeline continues.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// Body is not valid JSON for the expected payload.
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Body too short to hold a payload.
    #[error("Truncated payload: {lines} line(s)")]
    TruncatedBody { lines: usize },

    /// Body does not start with a JSON object.
    #[error("Payload is not a JSON object")]
    NotAnObject,

    /// A captured sentence field could not be converted.
    #[error("Invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}
