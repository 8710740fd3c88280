//! Error types for cartviz-protocol.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Message is not a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Version {version} does not satisfy {range}")]
    IncompatibleVersion { version: String, range: &'static str },

    #[error("Unrecognized message type: {0}")]
    UnrecognizedType(String),

    #[error("State payload is not an object")]
    InvalidState,
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
