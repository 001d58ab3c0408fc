//! In-memory state layer: documents, commits, branches, repositories.
//!
//! This module owns the whole version-control state machine. The upper
//! layers (the manager, the workspace handle) drive it and never hold
//! state of their own.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Repository                  │
//! │   (branch map, active branch, switch safety) │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │                    Branch                    │
//! │   (head pointer, working directory, stash)   │
//! └──────────────────────────────────────────────┘
//!            │                       │
//!            ▼                       ▼
//!     ┌─────────────┐         ┌─────────────┐
//!     │   Commit    │         │  Document   │
//!     │ (snapshots) │         │  (states)   │
//!     └─────────────┘         └─────────────┘
//! ```
//!
//! Documents are value types, deep-cloned at every boundary crossing
//! (commit snapshot, stash entry, merge target); commits are immutable and
//! shared through `Arc`, so branches cut from the same head share their
//! ancestry without sharing any mutable state.

mod branch;
mod commit;
mod document;
mod error;
mod repository;
mod types;

pub use branch::Branch;
pub use commit::{Commit, History};
pub use document::{Document, FileState};
pub use error::{VcsError, VcsResult};
pub use repository::{Repository, SwitchOutcome, DEFAULT_BRANCH};
pub use types::{CommitId, RepoId, User};
