// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line splitting for command output.
//
// The CUPS tools emit `\n` on every platform we run on, but output that has
// passed through other tooling can carry `\r\n`, bare `\r`, or the Unicode
// line separators.  All of them are treated as a single break; `\r\n` counts
// as one break, not two.

/// Split raw text on any line break, keeping empty lines.
pub fn raw_lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();
    while let Some((idx, ch)) = iter.next() {
        let is_break = matches!(ch, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}');
        if !is_break {
            continue;
        }
        out.push(&text[start..idx]);
        // fold "\r\n" into a single break
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = iter.peek() {
                iter.next();
                start = next_idx + 1;
                continue;
            }
        }
        start = idx + ch.len_utf8();
    }
    if start < text.len() {
        out.push(&text[start..]);
    } else if !text.is_empty() && start == text.len() {
        // trailing break: the final empty segment is kept for callers that
        // want the raw split; blank-line filters drop it anyway
        out.push("");
    }
    out
}

/// Split into lines and drop the ones that are empty after the split.
pub fn lines(text: &str) -> Vec<&str> {
    raw_lines(text).into_iter().filter(|l| !l.is_empty()).collect()
}

/// Split into lines, trim each, and drop the ones that trim to nothing.
pub fn trimmed_lines(text: &str) -> Vec<&str> {
    raw_lines(text)
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(raw_lines("").is_empty());
        assert!(lines("").is_empty());
        assert!(trimmed_lines("").is_empty());
    }

    #[test]
    fn crlf_counts_as_one_break() {
        assert_eq!(raw_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(raw_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn bare_cr_and_lf_both_split() {
        assert_eq!(raw_lines("a\rb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn unicode_separators_split() {
        assert_eq!(raw_lines("a\u{2028}b\u{0085}c\u{2029}d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_newline_keeps_raw_empty_segment() {
        assert_eq!(raw_lines("a\n"), vec!["a", ""]);
        assert_eq!(lines("a\n"), vec!["a"]);
    }

    #[test]
    fn trimming_drops_whitespace_only_lines() {
        assert_eq!(trimmed_lines("  a  \n   \n\tb\n"), vec!["a", "b"]);
    }
}
