//! Line-indexed view over a source document.
//!
//! Block rules never touch the raw source directly; they read line spans and
//! indentation widths from a [`DocumentView`] built once per parse. Offsets
//! are byte offsets, indentation is measured in columns with tabs expanded to
//! 4-column stops.

use std::ops::Range;

/// Width of a tab stop in columns.
const TAB_WIDTH: usize = 4;

/// Byte span and indentation of a single logical line.
///
/// `end` excludes the line terminator (`\n` or `\r\n`). `text_start` is the
/// byte offset of the first non-whitespace character; for a blank line it
/// equals `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Byte offset one past the last character, excluding the terminator.
    pub end: usize,
    /// Byte offset of the first non-whitespace character.
    pub text_start: usize,
    /// Leading indentation width in columns, tabs expanded.
    pub indent: usize,
}

/// Immutable, line-indexed view of a source document.
///
/// Built once at the start of a parse; rules borrow it read-only. Lines are
/// split on `\n`; a `\r` preceding the terminator is excluded from the span,
/// so line content never carries carriage returns.
#[derive(Debug)]
pub struct DocumentView<'a> {
    src: &'a str,
    lines: Vec<LineSpan>,
}

impl<'a> DocumentView<'a> {
    /// Index the given source text.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        while start < src.len() {
            let (line_end, next_start) = match src[start..].find('\n') {
                Some(i) => (start + i, start + i + 1),
                None => (src.len(), src.len()),
            };
            let line_end = if line_end > start && src.as_bytes()[line_end - 1] == b'\r' {
                line_end - 1
            } else {
                line_end
            };
            lines.push(scan_span(src, start, line_end));
            start = next_start;
        }
        Self { src, lines }
    }

    /// Number of logical lines in the document.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Span of the given line.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of range.
    #[must_use]
    pub fn span(&self, line: usize) -> LineSpan {
        self.lines[line]
    }

    /// Full text of the given line, terminator excluded.
    #[must_use]
    pub fn line(&self, line: usize) -> &'a str {
        let span = self.lines[line];
        &self.src[span.start..span.end]
    }

    /// Text of the given line from its first non-whitespace character.
    ///
    /// Empty for blank lines.
    #[must_use]
    pub fn content(&self, line: usize) -> &'a str {
        let span = self.lines[line];
        &self.src[span.text_start..span.end]
    }

    /// Whether the line is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self, line: usize) -> bool {
        let span = self.lines[line];
        span.text_start >= span.end
    }

    /// Join a range of lines into one string, stripping up to `strip_cols`
    /// leading columns from each line and terminating every line (including
    /// the last) with `\n`.
    ///
    /// Stripping is column-based: a tab that straddles the strip boundary is
    /// replaced by the spaces it owes past the boundary.
    #[must_use]
    pub fn gather(&self, range: Range<usize>, strip_cols: usize) -> String {
        let mut out = String::new();
        for line in range {
            self.push_stripped(line, strip_cols, &mut out);
            out.push('\n');
        }
        out
    }

    fn push_stripped(&self, line: usize, strip_cols: usize, out: &mut String) {
        let text = self.line(line);
        let mut col = 0;
        let mut rest_from = 0;
        for (i, ch) in text.char_indices() {
            if col >= strip_cols {
                rest_from = i;
                break;
            }
            match ch {
                ' ' => {
                    col += 1;
                    rest_from = i + 1;
                }
                '\t' => {
                    let next = col + (TAB_WIDTH - col % TAB_WIDTH);
                    rest_from = i + 1;
                    if next > strip_cols {
                        for _ in 0..(next - strip_cols) {
                            out.push(' ');
                        }
                    }
                    col = next;
                }
                _ => {
                    rest_from = i;
                    break;
                }
            }
        }
        if rest_from >= text.len() && col < strip_cols {
            // whole line consumed by the strip
            return;
        }
        out.push_str(&text[rest_from..]);
    }
}

/// Compute the span of one line, locating the first non-whitespace character
/// and the expanded indentation width.
fn scan_span(src: &str, start: usize, end: usize) -> LineSpan {
    let mut indent = 0;
    let mut text_start = end;
    for (i, ch) in src[start..end].char_indices() {
        match ch {
            ' ' => indent += 1,
            '\t' => indent += TAB_WIDTH - indent % TAB_WIDTH,
            _ => {
                text_start = start + i;
                break;
            }
        }
    }
    LineSpan {
        start,
        end,
        text_start,
        indent,
    }
}
