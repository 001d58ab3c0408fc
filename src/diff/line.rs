//! Naive positional line diff.

use crate::diff::DiffStrategy;

/// Line-by-line positional comparison.
///
/// Both inputs are split on `'\n'` and compared index by index up to the
/// longer of the two splits; every differing index yields a three-line
/// block:
///
/// ```text
/// Line 3:
/// - old content
/// + new content
/// ```
///
/// This is not a longest-common-subsequence diff: an inserted or deleted
/// line shifts every following index, which then reports as a wholesale
/// replacement rather than a minimal edit.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineDiff;

impl LineDiff {
    pub fn new() -> Self {
        Self
    }
}

impl DiffStrategy for LineDiff {
    fn calculate_diff(&self, original: &str, updated: &str) -> String {
        let original_lines: Vec<&str> = original.split('\n').collect();
        let updated_lines: Vec<&str> = updated.split('\n').collect();
        let max = original_lines.len().max(updated_lines.len());

        let mut delta = String::new();
        for index in 0..max {
            let old = original_lines.get(index).copied().unwrap_or("");
            let new = updated_lines.get(index).copied().unwrap_or("");

            if old != new {
                delta.push_str(&format!("Line {}:\n- {}\n+ {}\n", index + 1, old, new));
            }
        }
        delta
    }
}
