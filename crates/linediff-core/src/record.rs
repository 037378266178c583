//! Diff records: the serialized form of an opcode.
//!
//! Records carry the joined line text instead of raw indices. Lines in a
//! range are joined with a single `\n` and no trailing newline.

use std::borrow::Borrow;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::opcode::{Opcode, Tag};

/// A half-open line range, serialized as a `[start, end]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<[usize; 2]> for LineRange {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<LineRange> for [usize; 2] {
    fn from(range: LineRange) -> Self {
        [range.start, range.end]
    }
}

impl From<Range<usize>> for LineRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// One entry of a line diff, shaped by its tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffRecord {
    /// Lines common to both texts.
    Equal {
        text: String,
        text1_range: LineRange,
        text2_range: LineRange,
    },
    /// Lines of the first text replaced by lines of the second.
    Replace {
        text1: String,
        text2: String,
        text1_range: LineRange,
        text2_range: LineRange,
    },
    /// Lines only in the first text.
    Delete { text1: String, text1_range: LineRange },
    /// Lines only in the second text.
    Insert { text2: String, text2_range: LineRange },
}

impl DiffRecord {
    /// Build the record for `op` from the two line sequences it indexes.
    pub fn from_opcode<S: Borrow<str>>(op: &Opcode, old: &[S], new: &[S]) -> Self {
        let text1_range = LineRange::from(op.old_range());
        let text2_range = LineRange::from(op.new_range());
        match op.tag {
            Tag::Equal => Self::Equal {
                text: old[op.old_range()].join("\n"),
                text1_range,
                text2_range,
            },
            Tag::Replace => Self::Replace {
                text1: old[op.old_range()].join("\n"),
                text2: new[op.new_range()].join("\n"),
                text1_range,
                text2_range,
            },
            Tag::Delete => Self::Delete {
                text1: old[op.old_range()].join("\n"),
                text1_range,
            },
            Tag::Insert => Self::Insert {
                text2: new[op.new_range()].join("\n"),
                text2_range,
            },
        }
    }

    pub fn tag(&self) -> Tag {
        match self {
            Self::Equal { .. } => Tag::Equal,
            Self::Replace { .. } => Tag::Replace,
            Self::Delete { .. } => Tag::Delete,
            Self::Insert { .. } => Tag::Insert,
        }
    }

    /// Range in the first text, absent for inserts.
    pub fn text1_range(&self) -> Option<LineRange> {
        match self {
            Self::Equal { text1_range, .. }
            | Self::Replace { text1_range, .. }
            | Self::Delete { text1_range, .. } => Some(*text1_range),
            Self::Insert { .. } => None,
        }
    }

    /// Range in the second text, absent for deletes.
    pub fn text2_range(&self) -> Option<LineRange> {
        match self {
            Self::Equal { text2_range, .. }
            | Self::Replace { text2_range, .. }
            | Self::Insert { text2_range, .. } => Some(*text2_range),
            Self::Delete { .. } => None,
        }
    }

    /// Text this record contributes to the second text, if any.
    pub fn new_text(&self) -> Option<&str> {
        match self {
            Self::Equal { text, .. } => Some(text.as_str()),
            Self::Replace { text2, .. } | Self::Insert { text2, .. } => Some(text2.as_str()),
            Self::Delete { .. } => None,
        }
    }

    /// The record seen from the other side: texts and ranges swap,
    /// `Insert` and `Delete` trade places.
    pub fn invert(self) -> Self {
        match self {
            Self::Equal {
                text,
                text1_range,
                text2_range,
            } => Self::Equal {
                text,
                text1_range: text2_range,
                text2_range: text1_range,
            },
            Self::Replace {
                text1,
                text2,
                text1_range,
                text2_range,
            } => Self::Replace {
                text1: text2,
                text2: text1,
                text1_range: text2_range,
                text2_range: text1_range,
            },
            Self::Delete { text1, text1_range } => Self::Insert {
                text2: text1,
                text2_range: text1_range,
            },
            Self::Insert { text2, text2_range } => Self::Delete {
                text1: text2,
                text1_range: text2_range,
            },
        }
    }
}
