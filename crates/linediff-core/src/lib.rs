//! Line diff engine.
//!
//! Normalizes two texts, splits them into lines and computes the opcodes
//! that turn the first line sequence into the second, using greedy
//! longest-common-block matching. Results are exposed as serializable
//! diff records, grouped hunks, or plain-text renderings.
//!
//! The engine is pure: no I/O, no shared state, the same inputs always
//! produce the same output.
//!
//! # Key Types
//!
//! - [`LineDiff`] -- Prepared line sequences with their opcodes
//! - [`SequenceMatcher`] / [`Match`] -- Longest-common-block matcher
//! - [`Opcode`] / [`Tag`] -- Edit operations over line ranges
//! - [`DiffRecord`] / [`LineRange`] -- Serialized diff entries
//! - [`Hunk`] -- Changes grouped with context

pub mod diff;
pub mod hunk;
pub mod matcher;
pub mod normalize;
pub mod opcode;
pub mod record;
pub mod render;

pub use diff::{compute_diff, DiffStats, LineDiff};
pub use hunk::{group_opcodes, Hunk};
pub use matcher::{Match, SequenceMatcher};
pub use normalize::{normalize_nbsp, prepare, split_lines, NBSP};
pub use opcode::{Opcode, Tag};
pub use record::{DiffRecord, LineRange};
pub use render::{compare, render_compare, render_unified, DiffLine};

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// Texts over a small line alphabet so matches are frequent.
    fn text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec!["a", "b", "c", "", "x y", "x\u{00A0}y"]),
            0..12,
        )
        .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn opcodes_cover_both_sequences(a in text(), b in text()) {
            let diff = LineDiff::new(&a, &b);
            let (mut i, mut j) = (0, 0);
            let mut prev_tag = None;
            for op in diff.opcodes() {
                prop_assert_eq!(op.i1, i);
                prop_assert_eq!(op.j1, j);
                prop_assert!(op.i1 <= op.i2 && op.j1 <= op.j2);
                match op.tag {
                    Tag::Delete => prop_assert!(op.j1 == op.j2 && op.i1 < op.i2),
                    Tag::Insert => prop_assert!(op.i1 == op.i2 && op.j1 < op.j2),
                    Tag::Replace => prop_assert!(op.i1 < op.i2 && op.j1 < op.j2),
                    Tag::Equal => {
                        prop_assert_eq!(
                            &diff.old_lines()[op.old_range()],
                            &diff.new_lines()[op.new_range()]
                        );
                        prop_assert_ne!(prev_tag, Some(Tag::Equal));
                    }
                }
                prev_tag = Some(op.tag);
                i = op.i2;
                j = op.j2;
            }
            prop_assert_eq!(i, diff.old_lines().len());
            prop_assert_eq!(j, diff.new_lines().len());
        }

        #[test]
        fn records_rebuild_second_text(a in text(), b in text()) {
            let rebuilt: Vec<String> = compute_diff(&a, &b)
                .iter()
                .filter_map(|rec| rec.new_text().map(str::to_owned))
                .collect();
            prop_assert_eq!(rebuilt.join("\n"), prepare(&b).join("\n"));
        }

        #[test]
        fn self_diff_is_one_equal(a in text()) {
            let lines = prepare(&a);
            let records = compute_diff(&a, &a);
            if lines.is_empty() {
                prop_assert!(records.is_empty());
            } else {
                prop_assert_eq!(records, vec![DiffRecord::Equal {
                    text: lines.join("\n"),
                    text1_range: LineRange::new(0, lines.len()),
                    text2_range: LineRange::new(0, lines.len()),
                }]);
            }
        }

        #[test]
        fn nbsp_is_plain_space(a in text(), b in text()) {
            let plain_a = a.replace(NBSP, " ");
            let plain_b = b.replace(NBSP, " ");
            prop_assert_eq!(compute_diff(&a, &b), compute_diff(&plain_a, &plain_b));
        }

        #[test]
        fn diff_is_deterministic(a in text(), b in text()) {
            prop_assert_eq!(compute_diff(&a, &b), compute_diff(&a, &b));
        }
    }
}
