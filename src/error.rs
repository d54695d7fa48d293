//! Error type for the interchange layer.
//!
//! Parsing and rendering never fail; malformed input degrades to a partial
//! [`Document`](crate::Document). Only encoding to and decoding from JSON can.

/// Errors from the JSON interchange layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode document: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
