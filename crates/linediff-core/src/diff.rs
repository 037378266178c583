//! The line diff entry point.

use serde::{Deserialize, Serialize};

use crate::hunk::{group_opcodes, Hunk};
use crate::matcher::{opcodes_from_blocks, ratio_from_blocks, SequenceMatcher};
use crate::normalize::prepare;
use crate::opcode::{Opcode, Tag};
use crate::record::DiffRecord;

/// Compute the line diff of two texts as serializable records.
///
/// Both empty → empty list. Identical non-empty inputs → a single
/// `Equal` record spanning both texts.
pub fn compute_diff(text_a: &str, text_b: &str) -> Vec<DiffRecord> {
    LineDiff::new(text_a, text_b).records()
}

/// The diff of two prepared line sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDiff {
    old: Vec<String>,
    new: Vec<String>,
    opcodes: Vec<Opcode>,
    similarity: f64,
}

impl LineDiff {
    /// Normalize and split both texts, then diff their lines.
    pub fn new(text_a: &str, text_b: &str) -> Self {
        Self::from_lines(prepare(text_a), prepare(text_b))
    }

    /// Diff two line sequences as given.
    pub fn from_lines(old: Vec<String>, new: Vec<String>) -> Self {
        let blocks = SequenceMatcher::new(&old, &new).matching_blocks();
        let opcodes = opcodes_from_blocks(&blocks);
        let similarity = ratio_from_blocks(&blocks, old.len() + new.len());
        Self {
            old,
            new,
            opcodes,
            similarity,
        }
    }

    pub fn old_lines(&self) -> &[String] {
        &self.old
    }

    pub fn new_lines(&self) -> &[String] {
        &self.new
    }

    pub fn opcodes(&self) -> &[Opcode] {
        &self.opcodes
    }

    /// One record per opcode, in order.
    pub fn records(&self) -> Vec<DiffRecord> {
        self.opcodes
            .iter()
            .map(|op| DiffRecord::from_opcode(op, &self.old, &self.new))
            .collect()
    }

    /// Returns `true` if the two line sequences are equal.
    pub fn is_identical(&self) -> bool {
        self.opcodes.iter().all(|op| op.tag == Tag::Equal)
    }

    /// Similarity ratio in `[0, 1]`.
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats {
            similarity: self.similarity,
            ..DiffStats::default()
        };
        for op in &self.opcodes {
            match op.tag {
                Tag::Equal => stats.equal += op.old_len(),
                Tag::Delete => stats.deleted += op.old_len(),
                Tag::Insert => stats.inserted += op.new_len(),
                Tag::Replace => {
                    stats.replaced_old += op.old_len();
                    stats.replaced_new += op.new_len();
                }
            }
        }
        stats
    }

    /// Changes grouped with up to `context` lines of equal context.
    pub fn hunks(&self, context: usize) -> Vec<Hunk> {
        group_opcodes(&self.opcodes, context)
    }
}

/// Line counts per kind of change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffStats {
    pub equal: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub replaced_old: usize,
    pub replaced_new: usize,
    pub similarity: f64,
}

impl DiffStats {
    /// Lines that appear only in the second text.
    pub fn additions(&self) -> usize {
        self.inserted + self.replaced_new
    }

    /// Lines that appear only in the first text.
    pub fn deletions(&self) -> usize {
        self.deleted + self.replaced_old
    }
}
