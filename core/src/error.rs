//! Error types for the labels client core.
//!
//! # Design
//! Building a request is the only thing the core does, and the only way it can
//! fail locally is when a payload cannot be serialized. Transport failures and
//! HTTP status codes belong to whoever sends the request, so they have no
//! variant here.

use thiserror::Error;

/// Errors returned while building a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
