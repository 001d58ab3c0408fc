//! Documents and their tracking states.
//!
//! A document is a named piece of text plus a tracking state. Content
//! edits only ever escalate the state from clean to dirty; the one
//! operation that clears dirtiness is commit construction (see
//! `store::commit`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tracking state of a document within a working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileState {
    /// Tracked and unchanged since the last commit.
    Unmodified,
    /// Tracked, with uncommitted changes.
    Modified,
    /// Not yet recorded by any commit.
    Untracked,
}

impl FileState {
    /// Whether this state counts as dirty (carries uncommitted content).
    pub fn is_dirty(&self) -> bool {
        matches!(self, FileState::Modified | FileState::Untracked)
    }

    /// Label used in status reports.
    pub fn label(&self) -> &'static str {
        match self {
            FileState::Unmodified => "unmodified",
            FileState::Modified => "modified",
            FileState::Untracked => "untracked",
        }
    }
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named text document with a tracking state.
///
/// Documents are value types: they are deep-cloned whenever they cross
/// into a commit snapshot, a stash entry or a merge target, so no two
/// containers ever alias the same mutable instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    name: String,
    content: String,
    state: FileState,
}

impl Document {
    /// Create a new untracked document.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            state: FileState::Untracked,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn state(&self) -> FileState {
        self.state
    }

    /// Replace the content.
    ///
    /// An `Unmodified` document becomes `Modified`; `Untracked` and
    /// `Modified` documents keep their state. Dirtiness escalates, never
    /// demotes.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        if self.state == FileState::Unmodified {
            self.state = FileState::Modified;
        }
    }

    /// Whether the document carries uncommitted content.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Force the state to `Unmodified`.
    ///
    /// Used when a commit freezes the working set and when a directory is
    /// re-seeded from a head snapshot.
    pub(crate) fn mark_clean(&mut self) {
        self.state = FileState::Unmodified;
    }

    /// Force the state to `Modified`, whatever it was.
    ///
    /// An explicit modify or a merge always dirties, even a document that
    /// was still `Untracked`.
    pub(crate) fn mark_modified(&mut self) {
        self.state = FileState::Modified;
    }
}
