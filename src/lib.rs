//! docvc - An In-Memory Version-Control Core for Text Documents
//!
//! This crate models a single-user version-control system entirely in
//! memory: documents live in per-branch working directories, commits are
//! immutable snapshots chained by parent references, and a stateless
//! manager drives commit, status, stash, merge, log and diff over them.
//!
//! # Example
//!
//! ```
//! use docvc::store::User;
//! use docvc::workspace::Workspace;
//!
//! let ws = Workspace::new("project-docs", User::new("u1", "Alice"));
//! ws.add_changes("readme.md", "Version 1");
//! println!("{}", ws.commit("Initial Readme"));
//! assert!(ws.status().is_clean());
//! ```

pub mod diff;
pub mod manager;
pub mod store;
pub mod workspace;
