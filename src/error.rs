//! Error type definitions for errors that can occur while building or
//! invoking generated clients.
use std::result;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failure raised by the connector while executing a remote call.
    /// Passed through unmodified; this crate never retries or masks it.
    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),

    #[error("failed to encode argument: {0}")]
    EncodeError(serde_json::Error),

    #[error("failed to decode result: {0}")]
    DecodeError(serde_json::Error),

    #[error("result decoder for method {method} rejected response: {source}")]
    DecoderFailure {
        method: String,
        source: anyhow::Error,
    },

    #[error("unknown rpc method: {0}")]
    UnknownMethod(String),

    #[error("duplicate method in service contract: {0}")]
    DuplicateMethod(String),

    #[error("method {method} expects {expected} arguments, got {actual}")]
    ArityMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("client module {module} failed to initialize: {source}")]
    ModuleInit {
        module: String,
        source: anyhow::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
