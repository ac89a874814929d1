//! Error types for outline edits and persistence.
//!
//! Structural edits refuse bad input instead of crashing, and the TUI turns
//! every variant here into a status-line message. Store failures wrap the
//! underlying I/O or serde cause so the message names what actually broke.

use crate::section::SectionId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Recoverable refusal of a structural edit; the collection stays untouched.
pub enum ValidationError {
    /// A section needs a non-empty title.
    #[error("section title must not be empty")]
    EmptyTitle,
    /// The requested parent id is not in the collection.
    #[error("parent section {0} does not exist")]
    UnknownParent(SectionId),
    /// The parent already sits at the maximum nesting depth.
    #[error("sections cannot nest more than two levels deep")]
    TooDeep,
}

#[derive(Debug, Error)]
/// Failure at the persistence boundary.
pub enum StoreError {
    /// Filesystem failure reading or writing the backing document.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing document is not a valid outline snapshot.
    #[error("store document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
