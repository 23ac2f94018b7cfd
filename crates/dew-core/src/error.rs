//! Error types for the contact list core.

use thiserror::Error;

/// Failure while fetching people from the remote endpoint.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The endpoint answered with a non-success status.
    #[error("GET {url} failed: {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code returned.
        status: u16,
    },
    /// The request never produced a response.
    #[error("GET {url} failed: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport-level diagnostic.
        message: String,
    },
    /// The response body was not a JSON array of user records.
    #[error("GET {url} returned an unreadable body: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder diagnostic.
        message: String,
    },
}

impl RemoteError {
    /// URL of the failed request.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

/// Failure raised by a key-value store backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store cannot be reached (disabled, missing, sandboxed).
    #[error("storage unavailable")]
    Unavailable,
    /// Reading a key failed.
    #[error("storage read failed for {key}: {message}")]
    Read {
        /// Key being read.
        key: String,
        /// Backend diagnostic.
        message: String,
    },
    /// Writing a key failed (quota exceeded and similar).
    #[error("storage write failed for {key}: {message}")]
    Write {
        /// Key being written.
        key: String,
        /// Backend diagnostic.
        message: String,
    },
    /// The people list could not be encoded as JSON.
    #[error("could not encode people list: {message}")]
    Encode {
        /// Encoder diagnostic.
        message: String,
    },
}

/// Invalid configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not a JSON object matching the config shape.
    #[error("invalid contacts config")]
    Invalid {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for remote fetch results.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Convenience alias for key-value store results.
pub type StorageResult<T> = Result<T, StorageError>;
