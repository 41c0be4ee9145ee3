//! GBFS client error types.

use std::fmt;

use crate::stations::DataShapeError;

use super::convert::ConversionError;

/// Errors from the GBFS HTTP client.
#[derive(Debug)]
pub enum GbfsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Feed returned an error status code
    Api { status: u16, message: String },
}

impl fmt::Display for GbfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GbfsError::Http(e) => write!(f, "HTTP error: {e}"),
            GbfsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            GbfsError::Api { status, message } => {
                write!(f, "feed error {status}: {message}")
            }
        }
    }
}

impl std::error::Error for GbfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GbfsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GbfsError {
    fn from(err: reqwest::Error) -> Self {
        GbfsError::Http(err)
    }
}

/// Errors from a full snapshot fetch cycle.
///
/// Distinguishes the fetch layer (network/HTTP/parse) from the data
/// layers (conversion, feed join) so the web layer can surface each with
/// an appropriate status code.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// A feed fetch failed
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] GbfsError),

    /// A feed record could not be converted to domain types
    #[error("feed conversion failed: {0}")]
    Convert(#[from] ConversionError),

    /// The two feeds disagree about which stations exist
    #[error("feed shape error: {0}")]
    Shape(#[from] DataShapeError),
}
