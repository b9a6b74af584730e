use thiserror::Error;

/// Errors from the CRM egress API.
///
/// The dashboards treat all of these as an upstream fetch failure: the
/// query path reports the error to the caller and never touches local
/// state, so a flaky CRM cannot corrupt the report history. Retrying is
/// the caller's decision.
#[derive(Error, Debug)]
pub enum CrmError {
    /// The request did not complete within the client timeout.
    #[error("CRM request timed out")]
    Timeout,

    /// The CRM rate limited the request (HTTP 429).
    #[error("CRM rate limited the request")]
    RateLimited,

    /// The CRM answered with a non-success status.
    #[error("CRM returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// The request failed below HTTP (DNS, TLS, connection reset).
    #[error("CRM transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON envelope.
    #[error("Failed to decode CRM response: {0}")]
    Decode(String),
}
