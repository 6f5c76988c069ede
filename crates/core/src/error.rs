//! Error taxonomy for the places client.
//!
//! The UI collapses every variant into a single "fetch failed" outcome:
//! the failure is logged and the previously fetched results stay on screen.
//! The distinction still matters for the logs.

use reqwest::StatusCode;

/// Errors produced while building the client or talking to the places API.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// Constructing the underlying HTTP client failed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("api returned status {0}")]
    Status(StatusCode),

    /// The response arrived but its body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_name_the_code() {
        let err = PlacesError::Status(StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "api returned status 403 Forbidden");
    }
}
