//! Edit opcodes over two line sequences.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use similar::{DiffOp, DiffTag};

/// The kind of an edit operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Lines present unchanged on both sides.
    Equal,
    /// Lines of A replaced by lines of B.
    Replace,
    /// Lines present only in A.
    Delete,
    /// Lines present only in B.
    Insert,
}

impl Tag {
    /// The lowercase wire name of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Insert => "insert",
        }
    }

    /// The tag seen from the other side: `Insert` and `Delete` swap.
    pub fn invert(self) -> Self {
        match self {
            Self::Delete => Self::Insert,
            Self::Insert => Self::Delete,
            other => other,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edit operation: lines `[i1, i2)` of A correspond to lines
/// `[j1, j2)` of B under `tag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: Tag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl Opcode {
    pub fn new(tag: Tag, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self { tag, i1, i2, j1, j2 }
    }

    /// Range of lines in A.
    pub fn old_range(&self) -> Range<usize> {
        self.i1..self.i2
    }

    /// Range of lines in B.
    pub fn new_range(&self) -> Range<usize> {
        self.j1..self.j2
    }

    pub fn old_len(&self) -> usize {
        self.i2 - self.i1
    }

    pub fn new_len(&self) -> usize {
        self.j2 - self.j1
    }

    /// The same operation with A and B swapped.
    pub fn invert(&self) -> Self {
        Self {
            tag: self.tag.invert(),
            i1: self.j1,
            i2: self.j2,
            j1: self.i1,
            j2: self.i2,
        }
    }
}

impl From<Opcode> for DiffOp {
    fn from(op: Opcode) -> Self {
        match op.tag {
            Tag::Equal => DiffOp::Equal {
                old_index: op.i1,
                new_index: op.j1,
                len: op.old_len(),
            },
            Tag::Delete => DiffOp::Delete {
                old_index: op.i1,
                old_len: op.old_len(),
                new_index: op.j1,
            },
            Tag::Insert => DiffOp::Insert {
                old_index: op.i1,
                new_index: op.j1,
                new_len: op.new_len(),
            },
            Tag::Replace => DiffOp::Replace {
                old_index: op.i1,
                old_len: op.old_len(),
                new_index: op.j1,
                new_len: op.new_len(),
            },
        }
    }
}

impl From<DiffOp> for Opcode {
    fn from(op: DiffOp) -> Self {
        let (tag, old, new) = op.as_tag_tuple();
        let tag = match tag {
            DiffTag::Equal => Tag::Equal,
            DiffTag::Delete => Tag::Delete,
            DiffTag::Insert => Tag::Insert,
            DiffTag::Replace => Tag::Replace,
        };
        Self::new(tag, old.start, old.end, new.start, new.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names() {
        assert_eq!(Tag::Equal.to_string(), "equal");
        assert_eq!(Tag::Replace.as_str(), "replace");
        assert_eq!(
            serde_json::to_string(&Tag::Insert).unwrap(),
            "\"insert\""
        );
    }

    #[test]
    fn invert_swaps_sides() {
        let op = Opcode::new(Tag::Delete, 2, 5, 3, 3);
        let inv = op.invert();
        assert_eq!(inv, Opcode::new(Tag::Insert, 3, 3, 2, 5));
        assert_eq!(inv.invert(), op);
    }

    #[test]
    fn replace_and_equal_keep_tag_on_invert() {
        assert_eq!(Opcode::new(Tag::Replace, 0, 1, 0, 2).invert().tag, Tag::Replace);
        assert_eq!(Opcode::new(Tag::Equal, 0, 1, 4, 5).invert().tag, Tag::Equal);
    }

    #[test]
    fn converts_through_similar_ops() {
        let ops = [
            Opcode::new(Tag::Equal, 0, 2, 0, 2),
            Opcode::new(Tag::Replace, 2, 3, 2, 4),
            Opcode::new(Tag::Delete, 3, 4, 4, 4),
            Opcode::new(Tag::Insert, 4, 4, 4, 6),
        ];
        for op in ops {
            let diff_op = DiffOp::from(op);
            assert_eq!(diff_op.old_range(), op.old_range());
            assert_eq!(diff_op.new_range(), op.new_range());
            assert_eq!(Opcode::from(diff_op), op);
        }
    }
}
