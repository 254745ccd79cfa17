//! Error types.
//!
//! Every failure is terminal for a run. Errors are bubbled up as values
//! and only `main` turns them into a message and a non-zero exit status.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Invalid or missing input, detected before any provider call.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("{flag} is required")]
    Missing { flag: &'static str },

    #[error("source and destination are the same stack: {0}")]
    SameStack(String),

    #[error("working directory does not exist: {0}")]
    NoWorkDir(String),
}

/// Failure running the external provider CLI.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{bin} not found: {reason}")]
    NotFound { bin: String, reason: String },

    #[error("{command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command}: {status}\n{output}")]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}

/// Provider output that does not match the expected JSON shape.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("decoding {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
