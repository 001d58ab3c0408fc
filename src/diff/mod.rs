//! Line-oriented diffing between document versions.
//!
//! The manager's `diff` operation is generic over a [`DiffStrategy`] so
//! the comparison algorithm can be swapped without touching orchestration;
//! [`LineDiff`] is the built-in naive positional implementation.

mod line;

pub use line::LineDiff;

/// A pluggable comparison between two versions of a document's content.
///
/// Implementations must keep the line-indexed output contract of
/// [`LineDiff`] to stay drop-in replacements: one `Line <n>:` block per
/// differing line index, a `-` line for the original content and a `+`
/// line for the updated content, the missing side of a length mismatch
/// reading as empty. Strategies are pure functions over their inputs and
/// must be `Send + Sync` so managers can be shared across threads.
pub trait DiffStrategy: Send + Sync {
    /// Render the delta between `original` and `updated`.
    ///
    /// Returns an empty string when the inputs are line-for-line equal.
    fn calculate_diff(&self, original: &str, updated: &str) -> String;
}
