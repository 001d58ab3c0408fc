//! The repository: branch map, active-branch pointer, switch safety.
//!
//! A repository owns every branch and keeps exactly one of them active.
//! `main` is created at construction over a fresh root commit and no
//! in-scope operation removes it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::store::branch::Branch;
use crate::store::commit::Commit;
use crate::store::error::{VcsError, VcsResult};
use crate::store::types::{RepoId, User};

/// Name of the branch every repository starts with.
pub const DEFAULT_BRANCH: &str = "main";

/// Message of the root commit created at construction.
const INITIAL_COMMIT_MESSAGE: &str = "Initial Commit";

/// A single-user, in-memory repository of branches.
#[derive(Debug)]
pub struct Repository {
    id: RepoId,
    name: String,
    owner: User,
    branches: HashMap<String, Branch>,
    current: String,
}

impl Repository {
    /// Create a repository owned by `owner`, with a `main` branch rooted
    /// at a root commit over an empty document set.
    pub fn new(name: impl Into<String>, owner: User) -> Self {
        let mut empty = HashMap::new();
        let root = Arc::new(Commit::new(INITIAL_COMMIT_MESSAGE, None, &mut empty));

        let mut branches = HashMap::new();
        branches.insert(
            DEFAULT_BRANCH.to_string(),
            Branch::new(DEFAULT_BRANCH, root),
        );

        Self {
            id: RepoId::generate(),
            name: name.into(),
            owner,
            branches,
            current: DEFAULT_BRANCH.to_string(),
        }
    }

    pub fn id(&self) -> &RepoId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Repository owner (informational only).
    pub fn owner(&self) -> &User {
        &self.owner
    }

    /// Name of the currently active branch.
    pub fn current_branch_name(&self) -> &str {
        &self.current
    }

    /// The currently active branch.
    pub fn current_branch(&self) -> &Branch {
        self.branches
            .get(&self.current)
            .expect("the active branch always exists in the branch map")
    }

    /// Mutable access to the currently active branch.
    pub fn current_branch_mut(&mut self) -> &mut Branch {
        self.branches
            .get_mut(&self.current)
            .expect("the active branch always exists in the branch map")
    }

    /// Look up a branch by name.
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.get(name)
    }

    /// Look up a branch by name, mutably.
    pub fn branch_mut(&mut self, name: &str) -> Option<&mut Branch> {
        self.branches.get_mut(name)
    }

    /// All branch names, sorted.
    pub fn branch_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.branches.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of branches.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Create a branch rooted at the current branch's head commit.
    ///
    /// The new branch starts with a clean clone of that head snapshot and
    /// an empty stash. An existing branch of the same name is replaced.
    pub fn create_branch(&mut self, name: impl Into<String>) {
        let name = name.into();
        let head = Arc::clone(self.current_branch().head());
        self.branches.insert(name.clone(), Branch::new(name, head));
    }

    /// Make `name` the active branch.
    ///
    /// Fails with `BranchNotFound` for an unknown name. The dirty scan
    /// runs against the switch *target*, not the branch being left: when
    /// the target directory holds modified or untracked documents the
    /// switch is refused and the previous branch stays active.
    pub fn switch_branch(&mut self, name: &str) -> VcsResult<SwitchOutcome> {
        let target = self
            .branches
            .get(name)
            .ok_or_else(|| VcsError::BranchNotFound(name.to_string()))?;

        if target.is_dirty() {
            return Ok(SwitchOutcome::UncommittedChanges);
        }

        self.current = name.to_string();
        Ok(SwitchOutcome::Switched {
            branch: name.to_string(),
        })
    }
}

/// Result of a branch switch attempt.
///
/// A refused switch is a signaled outcome, not an error: the repository is
/// still in its previous, valid state and the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The active branch was reassigned.
    Switched { branch: String },
    /// The target directory holds uncommitted changes; the previous branch
    /// stays active.
    UncommittedChanges,
}

impl SwitchOutcome {
    /// Whether the switch actually happened.
    pub fn is_switched(&self) -> bool {
        matches!(self, SwitchOutcome::Switched { .. })
    }
}

impl fmt::Display for SwitchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchOutcome::Switched { branch } => write!(f, "Switched to branch {}", branch),
            SwitchOutcome::UncommittedChanges => write!(
                f,
                "Error: You have uncommitted changes. Commit or stash them before switching branches."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::document::FileState;

    fn repo() -> Repository {
        Repository::new("project-docs", User::new("u1", "Alice"))
    }

    #[test]
    fn test_new_repository_starts_on_main() {
        let repo = repo();

        assert_eq!(repo.current_branch_name(), DEFAULT_BRANCH);
        assert_eq!(repo.branch_count(), 1);
        assert_eq!(repo.name(), "project-docs");
        assert_eq!(repo.owner(), &User::new("u1", "Alice"));

        let main = repo.current_branch();
        assert!(main.head().is_root());
        assert!(main.head().snapshot().is_empty());
        assert!(main.directory().is_empty());
    }

    #[test]
    fn test_repository_ids_are_unique() {
        assert_ne!(repo().id(), repo().id());
    }

    #[test]
    fn test_create_branch_shares_head_commit() {
        let mut repo = repo();
        repo.create_branch("feature-x");

        let main_head = repo.branch("main").unwrap().head();
        let feature_head = repo.branch("feature-x").unwrap().head();
        assert!(Arc::ptr_eq(main_head, feature_head));
    }

    #[test]
    fn test_create_branch_seeds_clean_directory() {
        let mut repo = repo();

        // Commit a first version on main, then leave an uncommitted edit.
        {
            let main = repo.current_branch_mut();
            main.add_changes("readme.md", "Version 1");
            let parent = Arc::clone(main.head());
            let commit = Commit::new("Initial Readme", Some(parent), main.directory_mut());
            main.set_head(Arc::new(commit));
            main.add_changes("wip.md", "draft");
        }

        // The new branch sees only the head snapshot, seeded clean.
        repo.create_branch("feature-x");
        let feature = repo.branch("feature-x").unwrap();
        assert_eq!(
            feature.document("readme.md").unwrap().state(),
            FileState::Unmodified
        );
        assert!(feature.document("wip.md").is_none());
        assert!(!feature.has_stash());
    }

    #[test]
    fn test_create_branch_overwrites_existing_name() {
        let mut repo = repo();
        repo.create_branch("feature-x");
        repo.branch_mut("feature-x")
            .unwrap()
            .add_changes("only-here.md", "x");

        repo.create_branch("feature-x");
        assert!(repo
            .branch("feature-x")
            .unwrap()
            .document("only-here.md")
            .is_none());
    }

    #[test]
    fn test_switch_to_missing_branch_fails() {
        let mut repo = repo();
        let err = repo.switch_branch("ghost").unwrap_err();
        assert_eq!(err, VcsError::BranchNotFound("ghost".into()));
        assert_eq!(repo.current_branch_name(), "main");
    }

    #[test]
    fn test_switch_refused_when_target_is_dirty() {
        let mut repo = repo();
        repo.create_branch("feature-x");
        repo.branch_mut("feature-x")
            .unwrap()
            .add_changes("wip.md", "draft");

        let outcome = repo.switch_branch("feature-x").unwrap();
        assert_eq!(outcome, SwitchOutcome::UncommittedChanges);
        assert_eq!(repo.current_branch_name(), "main");
    }

    #[test]
    fn test_switch_to_clean_branch_succeeds() {
        let mut repo = repo();
        repo.create_branch("feature-x");

        let outcome = repo.switch_branch("feature-x").unwrap();
        assert!(outcome.is_switched());
        assert_eq!(repo.current_branch_name(), "feature-x");
    }

    #[test]
    fn test_branch_names_are_sorted() {
        let mut repo = repo();
        repo.create_branch("zeta");
        repo.create_branch("alpha");
        assert_eq!(repo.branch_names(), vec!["alpha", "main", "zeta"]);
    }

    #[test]
    fn test_switch_outcome_messages() {
        let switched = SwitchOutcome::Switched {
            branch: "feature-x".into(),
        };
        assert_eq!(switched.to_string(), "Switched to branch feature-x");
        assert_eq!(
            SwitchOutcome::UncommittedChanges.to_string(),
            "Error: You have uncommitted changes. Commit or stash them before switching branches."
        );
    }
}
