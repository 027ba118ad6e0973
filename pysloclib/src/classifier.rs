//! Python source line classification.
//!
//! This module provides the core classification logic that decides, one line
//! at a time, whether a line counts as code, a comment, or blank. Block
//! comments (triple-quoted strings used as comments) span lines, so the
//! classifier is a two-state machine whose state is threaded through the
//! per-file fold in [`crate::scanner`].
//!
//! Classification is a pure function over strings: no I/O, no shared state.

/// Category assigned to a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    /// An executable source line (counts toward SLOC)
    Code,
    /// A whitespace-only line
    Blank,
    /// A comment line (`#` or any part of a block comment)
    Comment,
}

/// Triple-quote delimiter that opened a block comment.
///
/// A block opened with `'''` can only be closed by `'''`, and likewise for
/// `"""`, so the open delimiter is carried in the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDelim {
    /// `"""`
    TripleDouble,
    /// `'''`
    TripleSingle,
}

impl BlockDelim {
    const ALL: [BlockDelim; 2] = [BlockDelim::TripleDouble, BlockDelim::TripleSingle];

    fn token(self) -> &'static str {
        match self {
            BlockDelim::TripleDouble => "\"\"\"",
            BlockDelim::TripleSingle => "'''",
        }
    }
}

/// Classifier state carried between consecutive lines of one file.
///
/// Initial state is [`LineState::Normal`]. The state is scoped to a single
/// file's scan and must never be reused across files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    /// Not inside a block comment
    #[default]
    Normal,
    /// Inside a block comment opened with the given delimiter
    InBlockComment(BlockDelim),
}

/// Classify one line of Python source, returning the category and the state
/// to carry into the next line.
///
/// Rules, in order:
/// - a whitespace-only line is [`LineCategory::Blank`] (state unchanged);
/// - inside a block comment the line is [`LineCategory::Comment`]; a line
///   containing the matching closing delimiter returns the state to
///   [`LineState::Normal`]. Trailing text after the close still counts the
///   whole line as a comment;
/// - a line whose first non-whitespace characters are `"""` or `'''` opens a
///   block comment, unless the same line also closes it;
/// - a line whose first non-whitespace character is `#` is a comment;
/// - anything else is [`LineCategory::Code`]. A trailing inline `#` comment
///   does not demote a code line.
pub fn classify(line: &str, state: LineState) -> (LineCategory, LineState) {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return (LineCategory::Blank, state);
    }

    if let LineState::InBlockComment(delim) = state {
        return if trimmed.contains(delim.token()) {
            (LineCategory::Comment, LineState::Normal)
        } else {
            (LineCategory::Comment, state)
        };
    }

    for delim in BlockDelim::ALL {
        if let Some(rest) = trimmed.strip_prefix(delim.token()) {
            return if rest.contains(delim.token()) {
                (LineCategory::Comment, LineState::Normal)
            } else {
                (LineCategory::Comment, LineState::InBlockComment(delim))
            };
        }
    }

    if trimmed.starts_with('#') {
        return (LineCategory::Comment, LineState::Normal);
    }

    (LineCategory::Code, LineState::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(lines: &[&str]) -> Vec<LineCategory> {
        let mut state = LineState::default();
        lines
            .iter()
            .map(|line| {
                let (category, next) = classify(line, state);
                state = next;
                category
            })
            .collect()
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify("", LineState::Normal).0, LineCategory::Blank);
        assert_eq!(classify("   ", LineState::Normal).0, LineCategory::Blank);
        assert_eq!(classify("\t", LineState::Normal).0, LineCategory::Blank);
    }

    #[test]
    fn test_hash_comment() {
        let (category, state) = classify("# a comment", LineState::Normal);
        assert_eq!(category, LineCategory::Comment);
        assert_eq!(state, LineState::Normal);

        let (category, _) = classify("    # indented comment", LineState::Normal);
        assert_eq!(category, LineCategory::Comment);
    }

    #[test]
    fn test_code_line() {
        let (category, state) = classify("x = 1", LineState::Normal);
        assert_eq!(category, LineCategory::Code);
        assert_eq!(state, LineState::Normal);
    }

    #[test]
    fn test_inline_comment_is_still_code() {
        let (category, _) = classify("x = 1  # note", LineState::Normal);
        assert_eq!(category, LineCategory::Code);
    }

    #[test]
    fn test_block_comment_open_and_close() {
        let categories = classify_all(&["\"\"\"", "module docstring", "\"\"\"", "x = 1"]);
        assert_eq!(
            categories,
            vec![
                LineCategory::Comment,
                LineCategory::Comment,
                LineCategory::Comment,
                LineCategory::Code,
            ]
        );
    }

    #[test]
    fn test_single_line_block_comment() {
        let (category, state) = classify("\"\"\"one-liner\"\"\"", LineState::Normal);
        assert_eq!(category, LineCategory::Comment);
        assert_eq!(state, LineState::Normal);

        let (category, state) = classify("'''also one line'''", LineState::Normal);
        assert_eq!(category, LineCategory::Comment);
        assert_eq!(state, LineState::Normal);
    }

    #[test]
    fn test_single_quoted_block() {
        let categories = classify_all(&["'''", "inside", "'''", "y = 2"]);
        assert_eq!(
            categories,
            vec![
                LineCategory::Comment,
                LineCategory::Comment,
                LineCategory::Comment,
                LineCategory::Code,
            ]
        );
    }

    #[test]
    fn test_mismatched_delimiter_does_not_close() {
        let mut state = LineState::Normal;
        let (_, next) = classify("'''", state);
        state = next;
        // A """ line inside a '''-block is comment content, not a close.
        let (category, next) = classify("\"\"\"", state);
        assert_eq!(category, LineCategory::Comment);
        assert_eq!(next, LineState::InBlockComment(BlockDelim::TripleSingle));
    }

    #[test]
    fn test_trailing_text_after_close_is_comment() {
        let mut state = LineState::Normal;
        let (_, next) = classify("\"\"\"", state);
        state = next;
        let (category, next) = classify("end\"\"\" x = 1", state);
        assert_eq!(category, LineCategory::Comment);
        assert_eq!(next, LineState::Normal);
    }

    #[test]
    fn test_blank_inside_block_preserves_state() {
        let mut state = LineState::Normal;
        let (_, next) = classify("\"\"\"", state);
        state = next;
        let (category, next) = classify("", state);
        assert_eq!(category, LineCategory::Blank);
        assert_eq!(next, LineState::InBlockComment(BlockDelim::TripleDouble));
    }

    #[test]
    fn test_code_with_mid_line_triple_quote_stays_code() {
        // Only a leading triple quote opens a block; a string assignment is code.
        let (category, state) = classify("doc = \"\"\"", LineState::Normal);
        assert_eq!(category, LineCategory::Code);
        assert_eq!(state, LineState::Normal);
    }

    #[test]
    fn test_six_quotes_open_and_close() {
        let (category, state) = classify("\"\"\"\"\"\"", LineState::Normal);
        assert_eq!(category, LineCategory::Comment);
        assert_eq!(state, LineState::Normal);
    }
}
