//! Plain-text renderings of a line diff.
//!
//! Two layouts: a full line-by-line comparison listing, and unified diff
//! hunks with context.

use std::fmt;
use std::ops::Range;

use crate::diff::LineDiff;
use crate::opcode::{Opcode, Tag};

/// A single line of rendered output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffLine {
    /// A line present in both texts.
    Context(String),
    /// A line only in the second text.
    Added(String),
    /// A line only in the first text.
    Removed(String),
}

impl DiffLine {
    /// Two-column marker used by the comparison listing.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Context(_) => "  ",
            Self::Added(_) => "+ ",
            Self::Removed(_) => "- ",
        }
    }

    /// One-column marker used by unified hunks.
    pub fn unified_marker(&self) -> char {
        match self {
            Self::Context(_) => ' ',
            Self::Added(_) => '+',
            Self::Removed(_) => '-',
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Context(text) | Self::Added(text) | Self::Removed(text) => text,
        }
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.marker(), self.text())
    }
}

/// Lines for `op`: removed lines of A first, then added lines of B.
fn lines_for(diff: &LineDiff, op: &Opcode) -> Vec<DiffLine> {
    let old = &diff.old_lines()[op.old_range()];
    let new = &diff.new_lines()[op.new_range()];
    match op.tag {
        Tag::Equal => old.iter().cloned().map(DiffLine::Context).collect(),
        Tag::Delete => old.iter().cloned().map(DiffLine::Removed).collect(),
        Tag::Insert => new.iter().cloned().map(DiffLine::Added).collect(),
        Tag::Replace => old
            .iter()
            .cloned()
            .map(DiffLine::Removed)
            .chain(new.iter().cloned().map(DiffLine::Added))
            .collect(),
    }
}

/// Every line of both texts, marked by where it appears.
pub fn compare(diff: &LineDiff) -> Vec<DiffLine> {
    diff.opcodes()
        .iter()
        .flat_map(|op| lines_for(diff, op))
        .collect()
}

/// The comparison listing as text, one marked line per row.
pub fn render_compare(diff: &LineDiff) -> String {
    let mut out = String::new();
    for line in compare(diff) {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Hunk range in unified notation: 1-based start, count omitted when 1.
fn format_range(range: Range<usize>) -> String {
    let len = range.end - range.start;
    match len {
        0 => format!("{},0", range.start),
        1 => format!("{}", range.start + 1),
        _ => format!("{},{}", range.start + 1, len),
    }
}

/// Unified diff with `context` lines around each change.
///
/// Returns an empty string when the texts have no differences.
pub fn render_unified(diff: &LineDiff, old_name: &str, new_name: &str, context: usize) -> String {
    let hunks = diff.hunks(context);
    if hunks.is_empty() {
        return String::new();
    }

    let mut out = format!("--- {old_name}\n+++ {new_name}\n");
    for hunk in &hunks {
        out.push_str(&format!(
            "@@ -{} +{} @@\n",
            format_range(hunk.old_range()),
            format_range(hunk.new_range())
        ));
        for op in &hunk.opcodes {
            for line in lines_for(diff, op) {
                out.push(line.unified_marker());
                out.push_str(line.text());
                out.push('\n');
            }
        }
    }
    out
}
