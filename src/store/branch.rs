//! Branches: a movable head pointer, the working directory, and the
//! per-branch stash queue.
//!
//! The working directory is where edits happen; the stash parks a full
//! clone of it (FIFO, oldest restored first) while resetting the directory
//! to the last committed state. Stash entries never cross branches.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::store::commit::{Commit, History};
use crate::store::document::Document;
use crate::store::error::{VcsError, VcsResult};

/// A named pointer to a head commit, owning a working directory and a
/// stash.
#[derive(Debug)]
pub struct Branch {
    name: String,
    head: Arc<Commit>,
    directory: HashMap<String, Document>,
    stash: VecDeque<HashMap<String, Document>>,
}

impl Branch {
    /// Create a branch rooted at `head`.
    ///
    /// The directory is seeded with clean clones of the head snapshot;
    /// branching never introduces artificial dirtiness.
    pub(crate) fn new(name: impl Into<String>, head: Arc<Commit>) -> Self {
        let directory = checkout(&head);
        Self {
            name: name.into(),
            head,
            directory,
            stash: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The commit this branch currently points to.
    pub fn head(&self) -> &Arc<Commit> {
        &self.head
    }

    pub(crate) fn set_head(&mut self, head: Arc<Commit>) {
        self.head = head;
    }

    /// The working directory, keyed by document name.
    pub fn directory(&self) -> &HashMap<String, Document> {
        &self.directory
    }

    pub(crate) fn directory_mut(&mut self) -> &mut HashMap<String, Document> {
        &mut self.directory
    }

    /// Look up a document in the working directory.
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.directory.get(name)
    }

    /// Whether any document in the directory carries uncommitted content.
    pub fn is_dirty(&self) -> bool {
        self.directory.values().any(Document::is_dirty)
    }

    /// Walk the commit history from the current head, newest first.
    pub fn history(&self) -> History {
        History::new(Arc::clone(&self.head))
    }

    /// Insert a new untracked document, replacing any existing entry of
    /// the same name (last write wins, no existence check).
    pub fn add_changes(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let doc = Document::new(name.clone(), content);
        self.directory.insert(name, doc);
    }

    /// Change the content of an existing document and force it `Modified`.
    ///
    /// Unlike `Document::set_content`, an explicit modify always dirties,
    /// even a document that was still `Untracked`. Fails when the name is
    /// absent from the directory.
    pub fn modify_changes(&mut self, name: &str, content: impl Into<String>) -> VcsResult<()> {
        let doc = self
            .directory
            .get_mut(name)
            .ok_or_else(|| VcsError::DocumentNotFound(name.to_string()))?;
        doc.set_content(content);
        doc.mark_modified();
        Ok(())
    }

    /// Save the working directory to the back of the stash queue, then
    /// reset the directory to a clean clone of the head snapshot.
    ///
    /// Save and revert happen in one step; the saved entry keeps every
    /// document's content and state exactly as they were.
    pub fn stash_changes(&mut self) {
        self.stash.push_back(self.directory.clone());
        self.directory = checkout(&self.head);
    }

    /// Restore the oldest stash entry, replacing the entire directory.
    ///
    /// Returns `false` when the stash is empty; the directory is untouched
    /// in that case. Restoring is a full overwrite, not a merge.
    pub fn pop_stash(&mut self) -> bool {
        match self.stash.pop_front() {
            Some(entry) => {
                self.directory = entry;
                true
            }
            None => false,
        }
    }

    /// Number of saved stash entries.
    pub fn stash_len(&self) -> usize {
        self.stash.len()
    }

    /// Whether the stash holds at least one entry.
    pub fn has_stash(&self) -> bool {
        !self.stash.is_empty()
    }

    /// Replace the entire working directory (the merge overwrite path).
    pub(crate) fn replace_directory(&mut self, directory: HashMap<String, Document>) {
        self.directory = directory;
    }
}

/// Clean clones of a head snapshot, used to seed a new branch and to reset
/// the directory after a stash.
fn checkout(head: &Commit) -> HashMap<String, Document> {
    head.snapshot()
        .iter()
        .map(|(name, doc)| {
            let mut doc = doc.clone();
            doc.mark_clean();
            (name.clone(), doc)
        })
        .collect()
}
