//! Standard errors used by all functions in the crate.

use crate::apis::auth::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error collecting all possible failures of the IoPay client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    ///
    /// Returned as-is when no response was received from the server at all
    /// (connection failures, timeouts) or when a response body cannot be decoded.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by an IoPay API endpoint, either as an HTTP error status
    /// or as an `error` envelope inside a successful response.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The login exchange used to obtain an access token failed.
    ///
    /// `source` holds the error returned by the login request itself.
    #[error("Authentication failed for the {kind} token: {source}")]
    Authentication {
        kind: TokenKind,
        #[source]
        source: Box<Error>,
    },
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Returns the structured [`ApiError`](crate::error::ApiError) carried by this error, if any.
    ///
    /// Authentication failures are looked through, so this also returns the error
    /// reported by a failed login request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::ApiError(e) => Some(e),
            Error::Authentication { source, .. } => source.api_error(),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// IoPay HTTP APIs error.
#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    ///
    /// Can be a success status if the server answered with an `error` envelope.
    pub status: u16,
    /// Canonical reason phrase of `status`.
    pub status_text: String,
    /// Error details returned by the server.
    ///
    /// This is the content of the `error` envelope for successful statuses,
    /// or the whole response body otherwise. Non-JSON bodies are kept as a JSON string.
    pub data: serde_json::Value,
    /// The request which caused this error.
    pub request: RequestDetails,
}

/// Details of the request that failed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestDetails {
    pub base_url: String,
    pub method: String,
    /// Request URL, relative to `base_url` when possible.
    pub url: String,
    /// Request body, if any.
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IoPay HTTP error {} {} on {} {}",
            self.status, self.status_text, self.request.method, self.request.url
        )?;

        if !self.data.is_null() {
            write!(f, "\nDetails: {}", self.data)?;
        }

        Ok(())
    }
}
