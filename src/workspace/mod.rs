//! Shared workspace handle.
//!
//! This module provides the user-facing entry point: a cloneable handle
//! that owns a repository behind a read-write lock and a version manager
//! to operate on it from any thread.

mod handle;

pub use handle::Workspace;
