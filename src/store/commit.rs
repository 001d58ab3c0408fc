//! Immutable commit snapshots and history traversal.
//!
//! A commit freezes a branch's working directory: every document is cloned
//! into the snapshot and the source copy is marked clean in the same pass,
//! so no caller can ever observe a committed-yet-dirty working set. Commits
//! chain through single parent references down to a parentless root;
//! [`History`] walks the chain newest first.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::store::document::Document;
use crate::store::types::CommitId;

/// An immutable snapshot of named documents plus a parent link.
///
/// Commits are created once, shared through `Arc` (branches created from
/// the same head share their ancestry), and never mutated or deleted.
#[derive(Debug)]
pub struct Commit {
    id: CommitId,
    message: String,
    timestamp: DateTime<Utc>,
    parent: Option<Arc<Commit>>,
    snapshot: HashMap<String, Document>,
}

impl Commit {
    /// Freeze `working_set` into a new commit.
    ///
    /// Snapshot clones keep the state each document had at commit time;
    /// the source documents all come out `Unmodified`. Both effects happen
    /// in one pass; commit is the only operation that clears dirtiness.
    pub(crate) fn new(
        message: impl Into<String>,
        parent: Option<Arc<Commit>>,
        working_set: &mut HashMap<String, Document>,
    ) -> Self {
        let mut snapshot = HashMap::with_capacity(working_set.len());
        for (name, doc) in working_set.iter_mut() {
            snapshot.insert(name.clone(), doc.clone());
            doc.mark_clean();
        }

        Self {
            id: CommitId::generate(),
            message: message.into(),
            timestamp: Utc::now(),
            parent,
            snapshot,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Creation time of the commit.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Parent commit, `None` for the root.
    pub fn parent(&self) -> Option<&Arc<Commit>> {
        self.parent.as_ref()
    }

    /// Whether this commit is the root of its chain.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The frozen documents, keyed by name.
    pub fn snapshot(&self) -> &HashMap<String, Document> {
        &self.snapshot
    }

    /// Look up a single document in the snapshot.
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.snapshot.get(name)
    }
}

/// Iterator over a commit chain, newest first, ending at the root.
pub struct History {
    next: Option<Arc<Commit>>,
}

impl History {
    /// Start walking from `head`.
    pub fn new(head: Arc<Commit>) -> Self {
        Self { next: Some(head) }
    }
}

impl Iterator for History {
    type Item = Arc<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent().cloned();
        Some(current)
    }
}
