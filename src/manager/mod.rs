//! Version-control orchestration.
//!
//! [`VersionManager`] is the stateless service tying the store and diff
//! layers together: it freezes commits, reports status, drives the stash,
//! folds branches into each other, walks history and renders diffs. All
//! state lives in the `Repository` and `Branch` values it is handed; the
//! only thing a manager owns is its diff strategy.

mod report;

pub use report::{
    CommitOutcome, DiffReport, FileDiff, LogEntry, StashOutcome, StatusEntry, StatusReport,
};

use std::collections::HashMap;
use std::sync::Arc;

use crate::diff::{DiffStrategy, LineDiff};
use crate::store::{Branch, Commit, Document, Repository, VcsError, VcsResult};

/// Stateless orchestration over branches and repositories: commit, status,
/// stash, merge, log and diff.
pub struct VersionManager {
    strategy: Box<dyn DiffStrategy>,
}

impl VersionManager {
    /// Manager with the built-in line diff.
    pub fn new() -> Self {
        Self {
            strategy: Box::new(LineDiff::new()),
        }
    }

    /// Manager with a custom diff strategy.
    pub fn with_strategy(strategy: Box<dyn DiffStrategy>) -> Self {
        Self { strategy }
    }

    /// Freeze the branch's working directory into a new commit and advance
    /// the head.
    ///
    /// Never refuses: committing a clean directory records a snapshot
    /// equal to its parent's. Afterwards every document in the working
    /// directory reads `Unmodified`.
    pub fn commit(&self, branch: &mut Branch, message: impl Into<String>) -> CommitOutcome {
        let parent = Arc::clone(branch.head());
        let commit = Arc::new(Commit::new(message, Some(parent), branch.directory_mut()));
        let id = commit.id().clone();
        branch.set_head(commit);

        CommitOutcome {
            id,
            branch: branch.name().to_string(),
        }
    }

    /// Report the dirty documents of the branch's working directory,
    /// sorted by name. Unmodified documents are omitted.
    pub fn status(&self, branch: &Branch) -> StatusReport {
        let mut entries: Vec<StatusEntry> = branch
            .directory()
            .values()
            .filter(|doc| doc.is_dirty())
            .map(|doc| StatusEntry {
                name: doc.name().to_string(),
                state: doc.state(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        StatusReport {
            branch: branch.name().to_string(),
            entries,
        }
    }

    /// Save the branch's working directory to its stash and reset the
    /// directory to the head snapshot.
    pub fn stash(&self, branch: &mut Branch) -> StashOutcome {
        branch.stash_changes();
        StashOutcome::Stashed
    }

    /// Apply the branch's oldest stash entry, if any.
    pub fn stash_pop(&self, branch: &mut Branch) -> StashOutcome {
        if branch.pop_stash() {
            StashOutcome::Applied
        } else {
            StashOutcome::Empty
        }
    }

    /// Fold the source branch's head snapshot into the target branch.
    ///
    /// Strict overwrite merge: the target directory is replaced by clones
    /// of the source head snapshot, every document forced `Modified`, and
    /// the result is committed on the target under an auto-generated
    /// message. Files that existed only in the target are dropped; there
    /// is no conflict detection and no fast-forward; the source always
    /// wins, and the new commit's single parent is the target's pre-merge
    /// head.
    pub fn merge_branches(
        &self,
        repo: &mut Repository,
        source_name: &str,
        target_name: &str,
    ) -> VcsResult<CommitOutcome> {
        let source_head = {
            let source = repo
                .branch(source_name)
                .ok_or_else(|| VcsError::BranchNotFound(source_name.to_string()))?;
            Arc::clone(source.head())
        };

        // Both branches are resolved before anything is mutated, so a
        // failed merge leaves the repository untouched.
        let target = repo
            .branch_mut(target_name)
            .ok_or_else(|| VcsError::BranchNotFound(target_name.to_string()))?;

        let merged: HashMap<String, Document> = source_head
            .snapshot()
            .iter()
            .map(|(name, doc)| {
                let mut doc = doc.clone();
                doc.mark_modified();
                (name.clone(), doc)
            })
            .collect();
        target.replace_directory(merged);

        Ok(self.commit(target, format!("Merged branch {}", source_name)))
    }

    /// Commit metadata from the branch head back to the root, newest
    /// first.
    pub fn log(&self, branch: &Branch) -> Vec<LogEntry> {
        branch
            .history()
            .map(|commit| LogEntry {
                id: commit.id().clone(),
                message: commit.message().to_string(),
                timestamp: commit.timestamp(),
            })
            .collect()
    }

    /// Compare two commit snapshots with the configured diff strategy.
    ///
    /// Asymmetric: iterates the files of `a` (sorted by name), comparing
    /// each against `b`'s version or empty content when `b` lacks the
    /// file; files present only in `b` are not listed.
    pub fn diff(&self, a: &Commit, b: &Commit) -> DiffReport {
        let mut names: Vec<&String> = a.snapshot().keys().collect();
        names.sort_unstable();

        let files = names
            .into_iter()
            .map(|name| {
                let original = a.snapshot()[name].content();
                let updated = b.document(name).map(Document::content).unwrap_or("");
                FileDiff {
                    name: name.clone(),
                    delta: self.strategy.calculate_diff(original, updated),
                }
            })
            .collect();

        DiffReport { files }
    }
}

impl Default for VersionManager {
    fn default() -> Self {
        Self::new()
    }
}
