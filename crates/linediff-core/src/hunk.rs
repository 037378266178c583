//! Grouping opcodes into hunks with surrounding context.

use std::ops::Range;

use similar::{group_diff_ops, DiffOp};

use crate::opcode::Opcode;

/// A contiguous group of changes plus up to `context` equal lines on
/// either side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hunk {
    pub opcodes: Vec<Opcode>,
}

impl Hunk {
    /// Lines of A covered by this hunk.
    pub fn old_range(&self) -> Range<usize> {
        match (self.opcodes.first(), self.opcodes.last()) {
            (Some(first), Some(last)) => first.i1..last.i2,
            _ => 0..0,
        }
    }

    /// Lines of B covered by this hunk.
    pub fn new_range(&self) -> Range<usize> {
        match (self.opcodes.first(), self.opcodes.last()) {
            (Some(first), Some(last)) => first.j1..last.j2,
            _ => 0..0,
        }
    }
}

/// Group `opcodes` into hunks.
///
/// Equal runs longer than `2 * context` split hunks; leading and trailing
/// equal runs are trimmed to `context` lines. A diff with no changes has
/// no hunks.
pub fn group_opcodes(opcodes: &[Opcode], context: usize) -> Vec<Hunk> {
    let ops: Vec<DiffOp> = opcodes.iter().copied().map(DiffOp::from).collect();
    group_diff_ops(ops, context)
        .into_iter()
        .map(|group| Hunk {
            opcodes: group.into_iter().map(Opcode::from).collect(),
        })
        .collect()
}
