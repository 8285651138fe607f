//! Error types for the `options-chain` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, ChainError>`.
//!
//! [`ChainError`] covers:
//! - **API errors** — Structured error responses from the quote source
//! - **HTTP status errors** — Unexpected status codes from the quote source
//! - **HTTP transport errors** — Network, TLS, connect failures
//! - **JSON errors** — Deserialization failures
//! - **Malformed quotes** — Well-formed JSON missing the requested price
//! - **Timeouts** — The bounded quote request elapsed
//! - **I/O errors** — Terminal setup and drawing in the binary
//! - **Invalid arguments** — Client-side validation errors
//! - **Not implemented** — Order submission, which has no backend yet
//!
//! Quote errors never reach the view: [`refresh_quote`](crate::quote::refresh_quote)
//! folds every variant into [`QuoteState::Unavailable`](crate::types::QuoteState).

use std::fmt;
use std::time::Duration;

/// Inner `status` object of a quote source error response.
///
/// The quote source reports rate limiting and bad parameters as
/// `{ "status": { "error_code": 429, "error_message": "..." } }`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorStatus {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Error response returned by the quote source.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorBody {
    pub status: ApiErrorStatus,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status.error_code {
            Some(code) => write!(f, "[{code}] ")?,
            None => write!(f, "[UNKNOWN] ")?,
        }
        f.write_str(self.status.error_message.as_deref().unwrap_or("No message"))
    }
}

/// All possible errors produced by the options chain shell.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// An error response returned by the quote source.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but did not carry a usable price.
    #[error("malformed quote for {asset}/{currency}: {reason}")]
    MalformedQuote {
        asset: String,
        currency: String,
        reason: String,
    },

    /// The quote request did not settle in time.
    #[error("quote request timed out after {0:?}")]
    Timeout(Duration),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Terminal or other local I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested operation has no backend in this build.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChainError>;
