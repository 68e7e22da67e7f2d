//! Error types for board and team operations.

use reqwest::StatusCode;
use thiserror::Error;

use crate::resolve::EntityKind;

/// Errors that can occur while resolving names or writing to GitHub
#[derive(Debug, Error)]
pub enum BoardError {
    /// No record in the listing carried the requested name
    #[error("ID not found for {kind} {name}.")]
    NotFound { kind: EntityKind, name: String },

    /// GitHub answered with a non-success status
    #[error("GitHub API error ({status}) for {url}: {body}")]
    Api {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// Network failure, timeout or undecodable response body
    #[error("Request to GitHub failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP client could not be set up
    #[error("Invalid client configuration: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
