//! Error Types

use thiserror::Error;

use crate::models::NodeId;

/// Failures of the board core. None of them are fatal to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("node {0} is not in the rendered tree")]
    UnknownNode(NodeId),
    #[error("node {0} does not have the role of the markup put into it")]
    RoleMismatch(NodeId),
    #[error("node {0} is not a container")]
    NotAContainer(NodeId),
    #[error("drop received with no drag in progress")]
    NoDragSource,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejected user input for a creation form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input is empty after trimming")]
    Empty,
}

/// Problems with the bundled board configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seeded column #{0} has an empty title")]
    EmptyTitle(usize),
    #[error("seeded column {column:?} has an empty entry at #{index}")]
    EmptyItem { column: String, index: usize },
}
