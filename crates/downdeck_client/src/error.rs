use thiserror::Error;

/// Failure modes at the executor boundary.
///
/// Poll-level `Transport` errors are swallowed by the caller (the next
/// timer tick retries); action-level errors are surfaced to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Network failure or a non-2xx response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The server answered `success: false`.
    #[error("{message}")]
    Rejected { message: String },
}
