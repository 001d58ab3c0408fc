//! The cloneable, lock-guarded workspace handle.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::manager::{
    CommitOutcome, DiffReport, LogEntry, StashOutcome, StatusReport, VersionManager,
};
use crate::store::{Commit, Repository, SwitchOutcome, User, VcsError, VcsResult};

struct WorkspaceInner {
    repo: RwLock<Repository>,
    manager: VersionManager,
}

/// Thread-safe handle over a repository and its version manager.
///
/// Clones are cheap and share the same repository; each operation holds
/// the lock for exactly its own duration. Commits handed out through
/// [`Workspace::head`] are immutable, so they stay valid after the lock
/// is released and can be diffed without blocking writers.
#[derive(Clone)]
pub struct Workspace {
    inner: Arc<WorkspaceInner>,
}

impl Workspace {
    /// Create a workspace around a fresh repository: a root commit and an
    /// active `main` branch.
    pub fn new(repo_name: impl Into<String>, owner: User) -> Self {
        Self::from_repository(Repository::new(repo_name, owner))
    }

    /// Wrap an existing repository.
    pub fn from_repository(repo: Repository) -> Self {
        Self::with_manager(repo, VersionManager::new())
    }

    /// Wrap an existing repository with a custom manager, e.g. one built
    /// with a different diff strategy.
    pub fn with_manager(repo: Repository, manager: VersionManager) -> Self {
        Self {
            inner: Arc::new(WorkspaceInner {
                repo: RwLock::new(repo),
                manager,
            }),
        }
    }

    /// Run `f` with shared access to the repository.
    pub fn with_repo<T>(&self, f: impl FnOnce(&Repository) -> T) -> T {
        f(&self.inner.repo.read())
    }

    /// Run `f` with exclusive access to the repository.
    pub fn with_repo_mut<T>(&self, f: impl FnOnce(&mut Repository) -> T) -> T {
        f(&mut self.inner.repo.write())
    }

    /// Name of the active branch.
    pub fn current_branch_name(&self) -> String {
        self.inner.repo.read().current_branch_name().to_string()
    }

    /// Stage a new document in the active branch's working directory.
    pub fn add_changes(&self, name: impl Into<String>, content: impl Into<String>) {
        self.inner
            .repo
            .write()
            .current_branch_mut()
            .add_changes(name, content);
    }

    /// Rewrite a tracked document in the active branch's working
    /// directory.
    pub fn modify_changes(&self, name: &str, content: impl Into<String>) -> VcsResult<()> {
        self.inner
            .repo
            .write()
            .current_branch_mut()
            .modify_changes(name, content)
    }

    /// Commit the active branch's working directory.
    pub fn commit(&self, message: impl Into<String>) -> CommitOutcome {
        let mut repo = self.inner.repo.write();
        self.inner.manager.commit(repo.current_branch_mut(), message)
    }

    /// Status of the active branch's working directory.
    pub fn status(&self) -> StatusReport {
        let repo = self.inner.repo.read();
        self.inner.manager.status(repo.current_branch())
    }

    /// Stash the active branch's working directory.
    pub fn stash(&self) -> StashOutcome {
        let mut repo = self.inner.repo.write();
        self.inner.manager.stash(repo.current_branch_mut())
    }

    /// Apply the active branch's oldest stash entry.
    pub fn stash_pop(&self) -> StashOutcome {
        let mut repo = self.inner.repo.write();
        self.inner.manager.stash_pop(repo.current_branch_mut())
    }

    /// Create a branch from the active branch's head.
    pub fn create_branch(&self, name: impl Into<String>) {
        self.inner.repo.write().create_branch(name);
    }

    /// Switch the active branch.
    pub fn switch_branch(&self, name: &str) -> VcsResult<SwitchOutcome> {
        self.inner.repo.write().switch_branch(name)
    }

    /// Merge `source` into `target`.
    pub fn merge_branches(&self, source: &str, target: &str) -> VcsResult<CommitOutcome> {
        let mut repo = self.inner.repo.write();
        self.inner.manager.merge_branches(&mut repo, source, target)
    }

    /// Commit log of the active branch, newest first.
    pub fn log(&self) -> Vec<LogEntry> {
        let repo = self.inner.repo.read();
        self.inner.manager.log(repo.current_branch())
    }

    /// Head commit of `branch`.
    pub fn head(&self, branch: &str) -> VcsResult<Arc<Commit>> {
        let repo = self.inner.repo.read();
        repo.branch(branch)
            .map(|b| Arc::clone(b.head()))
            .ok_or_else(|| VcsError::BranchNotFound(branch.to_string()))
    }

    /// Diff two commits. Takes no lock; commits are immutable.
    pub fn diff(&self, a: &Commit, b: &Commit) -> DiffReport {
        self.inner.manager.diff(a, b)
    }
}
