//! Identifier newtypes and shared value types for the store layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier of a commit.
///
/// Wrapping the generated id keeps commit ids, repository ids and document
/// names from being mixed up at call sites. Ids are ULIDs, so they sort by
/// creation time as a side effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh unique id.
    pub(crate) fn generate() -> Self {
        Self(Ulid::new().to_string().to_lowercase())
    }

    /// The full id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for compact display (first 8 characters).
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId(String);

impl RepoId {
    pub(crate) fn generate() -> Self {
        Self(Ulid::new().to_string().to_lowercase())
    }

    /// The full id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner of a repository.
///
/// Carried as an attribute and never inspected by core logic; persistence
/// and front-end collaborators are the intended consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    /// Create a new user value.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_id_unique() {
        let a = CommitId::generate();
        let b = CommitId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_commit_id_display_matches_as_str() {
        let id = CommitId::generate();
        assert_eq!(id.to_string(), id.as_str());
        assert_eq!(id.as_str().len(), 26); // ULID length
    }

    #[test]
    fn test_commit_id_short() {
        let id = CommitId::generate();
        assert_eq!(id.short().len(), 8);
        assert!(id.as_str().starts_with(id.short()));
    }

    #[test]
    fn test_repo_id_unique() {
        assert_ne!(RepoId::generate(), RepoId::generate());
    }

    #[test]
    fn test_user_value_semantics() {
        let alice = User::new("u1", "Alice");
        assert_eq!(alice, User::new("u1", "Alice"));
        assert_ne!(alice, User::new("u2", "Alice"));
    }

    #[test]
    fn test_user_serde_round_trip() {
        let user = User::new("u1", "Alice");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
