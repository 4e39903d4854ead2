//! Error type for the Steam Web API client.
//!
//! # Design
//! Every failure while handling a request surfaces as `SteamApiError`. A
//! rejected status code (401, 500, ...) is not split into separate variants;
//! callers that care inspect [`SteamApiError::status`]. Transport failures
//! keep the underlying `io::Error` as their source.

use std::io;

/// Errors returned by `RequestHandler` and `SteamWebApiClient`.
#[derive(Debug, thiserror::Error)]
pub enum SteamApiError {
    /// The scheme, host and path did not form a valid URI.
    #[error("invalid request URI: {0}")]
    InvalidUri(String),

    /// The server answered with a status outside 200..=299.
    #[error("Steam Web API returned HTTP {status}")]
    Status { status: u16 },

    /// The request could not be sent or the response body could not be read.
    #[error("transport failure: {0}")]
    Transport(#[source] io::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client was built without an API key.
    #[error("an API key is required")]
    MissingApiKey,
}

impl SteamApiError {
    /// The rejected HTTP status code, if this is a status failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            SteamApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for SteamApiError {
    fn from(err: url::ParseError) -> Self {
        SteamApiError::InvalidUri(err.to_string())
    }
}

impl From<io::Error> for SteamApiError {
    fn from(err: io::Error) -> Self {
        SteamApiError::Transport(err)
    }
}
