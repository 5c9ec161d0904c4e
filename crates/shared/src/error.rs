use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("response body is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("expected a JSON array of {expected}, got {actual}")]
    NotAnArray {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("entry {index} is not a valid {expected}: {source}")]
    InvalidEntry {
        index: usize,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
