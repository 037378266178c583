//! Input preparation: whitespace normalization and line splitting.
//!
//! Line boundaries follow `str::lines`: a line ends at `\n`, an `\r`
//! directly before that `\n` is dropped, a final trailing newline does not
//! produce an extra empty line, and the empty string has no lines.
//! A lone `\r` is part of the line content.

use std::borrow::Cow;

/// U+00A0 NO-BREAK SPACE.
pub const NBSP: char = '\u{00A0}';

/// Replace every non-breaking space with a plain space.
///
/// Borrows the input unchanged when it contains no NBSP.
pub fn normalize_nbsp(text: &str) -> Cow<'_, str> {
    if text.contains(NBSP) {
        Cow::Owned(text.replace(NBSP, " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split text into owned lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

/// Normalize then split: the line sequence the engine diffs.
pub fn prepare(text: &str) -> Vec<String> {
    split_lines(&normalize_nbsp(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbsp_replaced_with_space() {
        assert_eq!(normalize_nbsp("a\u{00A0}b\u{00A0}"), "a b ");
    }

    #[test]
    fn nbsp_free_text_is_borrowed() {
        assert!(matches!(normalize_nbsp("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn nbsp_keeps_char_count() {
        let text = "x\u{00A0}\u{00A0}y\nz";
        assert_eq!(
            normalize_nbsp(text).chars().count(),
            text.chars().count()
        );
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("\n\nb"), vec!["", "", "b"]);
    }

    #[test]
    fn crlf_is_a_single_boundary() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn lone_carriage_return_is_content() {
        assert_eq!(split_lines("a\rb\nc"), vec!["a\rb", "c"]);
    }

    #[test]
    fn prepare_normalizes_before_splitting() {
        assert_eq!(prepare("one\u{00A0}two\nthree"), vec!["one two", "three"]);
    }
}
