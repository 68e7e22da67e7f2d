//! GitHub Projects Agent Library
//!
//! Resolves organization, repository, project, column and team names to
//! GitHub IDs, then adds issue cards to project boards or grants teams
//! access to repositories.

pub mod board;
pub mod config;
pub mod error;
pub mod github;
pub mod resolve;

pub use board::{IssueCard, ProjectBoard};
pub use config::{Credentials, GitHubConfig};
pub use error::BoardError;
pub use github::{GitHubClient, Permission};
