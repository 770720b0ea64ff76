//! Error type shared by the API client, controller and configuration loader.

use thiserror::Error;

use crate::model::ItemId;

/// Errors surfaced by cart operations.
///
/// A failed action leaves the store untouched; the caller decides whether to
/// report it.
#[derive(Debug, Error)]
pub enum CartError {
    /// Transport failure (connection refused, timeout, malformed response).
    #[cfg(feature = "http")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{method} {path} returned status {status}")]
    Status {
        method: String,
        path: String,
        status: u16,
    },

    /// Response body was not the JSON shape we expected.
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot address the cart endpoints.
    #[error("invalid base url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No cart line with this id exists on the backend.
    #[error("cart line not found: {0}")]
    NotFound(ItemId),

    /// A required container element is missing from the document.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// The backend double was told to fail this call.
    #[error("injected failure: {0}")]
    Injected(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CartError {
    fn from(err: figment::Error) -> Self {
        CartError::Config(Box::new(err))
    }
}

impl CartError {
    /// HTTP-style status code for this error, if one applies.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CartError::Status { status, .. } => Some(*status),
            CartError::NotFound(_) => Some(404),
            #[cfg(feature = "http")]
            CartError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T, E = CartError> = std::result::Result<T, E>;
