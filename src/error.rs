//! Error type for the analysis pipeline and its persistence.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MondError {
    /// A galaxy violates an input precondition. (Radius ordering, empty profile etc.)
    #[error("invalid input for galaxy `{galaxy}`: {reason}")]
    InvalidInput { galaxy: String, reason: String },
    #[error("invalid scale parameters: {0}")]
    InvalidParams(String),
    /// Results are keyed by galaxy name, so names must be unique.
    #[error("duplicate galaxy name `{0}`")]
    DuplicateGalaxy(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("bincode encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("bincode decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MondError {
    pub(crate) fn invalid_input(galaxy: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            galaxy: galaxy.to_owned(),
            reason: reason.into(),
        }
    }
}
