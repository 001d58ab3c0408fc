//! Operation reports and outcomes.
//!
//! Manager operations return their results as data; the human-readable
//! strings live in the `Display` impls, so front-ends print outcomes
//! without the core ever touching the console. The strings themselves are
//! part of the observable contract and are pinned by tests.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::store::{CommitId, FileState};

/// Outcome of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Id of the newly created commit.
    pub id: CommitId,
    /// Branch whose head now points at it.
    pub branch: String,
}

impl fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Changes committed successfully on the branch {}",
            self.branch
        )
    }
}

/// One dirty entry in a status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub name: String,
    pub state: FileState,
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.state.label(), self.name)
    }
}

/// Working-directory status of a branch.
///
/// Holds the dirty entries only (unmodified documents are omitted),
/// sorted by document name for deterministic rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Branch the report was taken from.
    pub branch: String,
    /// Dirty documents, sorted by name.
    pub entries: Vec<StatusEntry>,
}

impl StatusReport {
    /// Whether the working directory has nothing to report.
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the dirty entries.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Changes in working directory:")?;
        for entry in &self.entries {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}

/// Outcome of the stash operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashOutcome {
    /// The working directory was saved and reset to the head snapshot.
    Stashed,
    /// The oldest stash entry was applied over the directory.
    Applied,
    /// Nothing to apply: the stash queue was empty, the directory is
    /// untouched.
    Empty,
}

impl StashOutcome {
    /// Whether the operation changed the working directory.
    pub fn applied(&self) -> bool {
        !matches!(self, StashOutcome::Empty)
    }
}

impl fmt::Display for StashOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StashOutcome::Stashed => "Changes stashed successfully",
            StashOutcome::Applied => "Stashed changes applied successfully",
            StashOutcome::Empty => "No stash found",
        };
        write!(f, "{}", message)
    }
}

/// One commit in a log listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: CommitId,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Commit: {}", self.id)?;
        writeln!(f, "Message: {}", self.message)?;
        writeln!(f, "Time: {}", self.timestamp.to_rfc3339())?;
        write!(f, "-----------------------------")
    }
}

/// Delta for a single file of a diff report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub name: String,
    /// Strategy output; empty when the two versions are line-for-line
    /// equal.
    pub delta: String,
}

impl FileDiff {
    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }
}

impl fmt::Display for FileDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diff for {}:\n{}", self.name, self.delta)
    }
}

/// Rendered comparison of two commit snapshots.
///
/// Asymmetric by contract: only files present in the first commit are
/// listed, and a file missing from the second compares against empty
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    /// Per-file deltas, sorted by file name.
    pub files: Vec<FileDiff>,
}

impl DiffReport {
    /// Whether every listed file compared equal.
    pub fn is_empty(&self) -> bool {
        self.files.iter().all(FileDiff::is_empty)
    }

    /// Look up the delta for one file.
    pub fn file(&self, name: &str) -> Option<&FileDiff> {
        self.files.iter().find(|file| file.name == name)
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for file in &self.files {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", file)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_outcome_message() {
        let outcome = CommitOutcome {
            id: CommitId::generate(),
            branch: "main".into(),
        };
        assert_eq!(
            outcome.to_string(),
            "Changes committed successfully on the branch main"
        );
    }

    #[test]
    fn test_status_report_rendering() {
        let report = StatusReport {
            branch: "main".into(),
            entries: vec![
                StatusEntry {
                    name: "notes.md".into(),
                    state: FileState::Untracked,
                },
                StatusEntry {
                    name: "readme.md".into(),
                    state: FileState::Modified,
                },
            ],
        };
        assert_eq!(
            report.to_string(),
            "Changes in working directory:\nuntracked: notes.md\nmodified: readme.md"
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_clean_status_report_is_header_only() {
        let report = StatusReport {
            branch: "main".into(),
            entries: Vec::new(),
        };
        assert!(report.is_clean());
        assert_eq!(report.to_string(), "Changes in working directory:");
    }

    #[test]
    fn test_stash_outcome_messages() {
        assert_eq!(StashOutcome::Stashed.to_string(), "Changes stashed successfully");
        assert_eq!(
            StashOutcome::Applied.to_string(),
            "Stashed changes applied successfully"
        );
        assert_eq!(StashOutcome::Empty.to_string(), "No stash found");
        assert!(StashOutcome::Applied.applied());
        assert!(!StashOutcome::Empty.applied());
    }

    #[test]
    fn test_log_entry_rendering() {
        let entry = LogEntry {
            id: CommitId::generate(),
            message: "Initial Readme".into(),
            timestamp: Utc::now(),
        };
        let rendered = entry.to_string();
        assert!(rendered.starts_with(&format!("Commit: {}\n", entry.id)));
        assert!(rendered.contains("Message: Initial Readme\n"));
        assert!(rendered.contains("Time: "));
        assert!(rendered.ends_with("-----------------------------"));
    }

    #[test]
    fn test_diff_report_rendering_and_lookup() {
        let report = DiffReport {
            files: vec![
                FileDiff {
                    name: "readme.md".into(),
                    delta: "Line 1:\n- V1\n+ V2\n".into(),
                },
                FileDiff {
                    name: "notes.md".into(),
                    delta: String::new(),
                },
            ],
        };

        assert!(!report.is_empty());
        assert!(report.file("notes.md").unwrap().is_empty());
        assert!(report.file("missing.md").is_none());

        let rendered = report.to_string();
        assert!(rendered.contains("Diff for readme.md:\nLine 1:"));
        assert!(rendered.contains("Diff for notes.md:\n"));
    }

    #[test]
    fn test_empty_diff_report() {
        let report = DiffReport { files: Vec::new() };
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }
}
