//! Longest-common-block sequence matching.
//!
//! Finds the longest run of equal elements shared by both sequences, then
//! recurses into the regions left and right of it. Every element is
//! significant: there is no junk filter and no popularity cutoff.
//!
//! Ties between equally long blocks go to the block that starts earliest
//! in A, and among those to the one that starts earliest in B. Changing
//! this rule changes the opcodes for inputs with repeated lines.

use std::collections::HashMap;
use std::hash::Hash;

use crate::opcode::{Opcode, Tag};

/// A common block: `a[a..a + size] == b[b..b + size]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }
}

/// Matches two sequences of comparable elements.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions in `b` of each distinct element, ascending.
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest block within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns a zero-size match at `(alo, blo)` when the windows share
    /// no element.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let mut best = Match::new(alo, blo, 0);
        // j2len[j]: length of the block ending at a[i - 1], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best.size {
                        best = Match::new(i + 1 - k, j + 1 - k, k);
                    }
                }
            }
            j2len = next_j2len;
        }

        best
    }

    /// All common blocks in ascending order, adjacent blocks merged,
    /// terminated by the sentinel `(len(a), len(b), 0)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        blocks.sort_by_key(|m| (m.a, m.b));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            if let Some(last) = merged.last_mut() {
                if last.a + last.size == m.a && last.b + last.size == m.b {
                    last.size += m.size;
                    continue;
                }
            }
            merged.push(m);
        }
        merged.push(Match::new(la, lb, 0));
        merged
    }

    /// Opcodes turning `a` into `b`, covering both sequences end to end.
    pub fn opcodes(&self) -> Vec<Opcode> {
        opcodes_from_blocks(&self.matching_blocks())
    }

    /// Similarity in `[0, 1]`: twice the matched elements over the total.
    /// Two empty sequences are fully similar.
    pub fn ratio(&self) -> f64 {
        ratio_from_blocks(&self.matching_blocks(), self.a.len() + self.b.len())
    }
}

/// Opcodes for sentinel-terminated matching blocks.
pub(crate) fn opcodes_from_blocks(blocks: &[Match]) -> Vec<Opcode> {
    let (mut i, mut j) = (0, 0);
    let mut ops = Vec::new();

    for m in blocks {
        let gap = match (i < m.a, j < m.b) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = gap {
            ops.push(Opcode::new(tag, i, m.a, j, m.b));
        }
        i = m.a + m.size;
        j = m.b + m.size;
        if m.size > 0 {
            ops.push(Opcode::new(Tag::Equal, m.a, i, m.b, j));
        }
    }

    ops
}

pub(crate) fn ratio_from_blocks(blocks: &[Match], total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    let matched: usize = blocks.iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}
