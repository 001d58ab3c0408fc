//! Store layer error types.
//!
//! Only failures the caller must propagate live here. Signaled
//! "could not proceed" conditions (popping an empty stash, switching onto
//! a dirty branch) are ordinary outcome values, not errors; see
//! `manager::StashOutcome` and `store::SwitchOutcome`.

use thiserror::Error;

/// The error type for version-control operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VcsError {
    /// The referenced branch does not exist in the repository.
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    /// The referenced document is absent from the working directory.
    #[error("document not found: {0}")]
    DocumentNotFound(String),
}

/// Result alias for version-control operations.
pub type VcsResult<T> = Result<T, VcsError>;
