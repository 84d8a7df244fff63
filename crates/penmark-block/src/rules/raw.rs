//! Verbatim passthrough blocks.
//!
//! A fence-style block whose interior bypasses all further parsing and
//! escaping. The opening line is a run of at least three marker characters;
//! anything after the run is the parameter tail, which must not itself
//! contain the marker (a line that merely mentions the marker elsewhere is
//! not a fence). The closing line is a run at least as long as the opening
//! one with nothing but whitespace after it. A missing closing line is not an
//! error: the block consumes to the end of its container.
//!
//! Do not feed untrusted input through this block type. Its whole purpose is
//! zero sanitation.

use crate::line_index::DocumentView;
use crate::parser::BlockParser;
use crate::rule::{BlockContext, BlockMatch, BlockRule, Interrupt};
use crate::token::{RawBlock, Token};

/// Default marker character.
const DEFAULT_MARKER: char = '@';

/// Block rule for verbatim passthrough fences.
#[derive(Debug, Clone, Copy)]
pub struct RawBlockRule {
    marker: char,
}

impl RawBlockRule {
    /// Create a rule for the given marker character.
    #[must_use]
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    /// The marker character this rule matches.
    #[must_use]
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Validate the opening line. Returns the run length and the parameter
    /// tail, or `None` when no raw block starts here.
    fn scan_opening<'a>(
        &self,
        doc: &DocumentView<'a>,
        cx: &BlockContext,
    ) -> Option<(usize, &'a str)> {
        let span = doc.span(cx.start_line);
        let marker_bytes = self.marker.len_utf8();
        if span.text_start + 3 * marker_bytes > span.end {
            return None;
        }
        let text = doc.content(cx.start_line);
        let marker_len = text.chars().take_while(|&c| c == self.marker).count();
        if marker_len < 3 {
            return None;
        }
        let params = &text[marker_len * marker_bytes..];
        if params.contains(self.marker) {
            return None;
        }
        Some((marker_len, params))
    }
}

impl Default for RawBlockRule {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl BlockRule for RawBlockRule {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn interrupts(&self, _target: Interrupt) -> bool {
        true
    }

    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        self.scan_opening(doc, cx).is_some()
    }

    fn commit(
        &self,
        _parser: &BlockParser,
        doc: &DocumentView<'_>,
        cx: &BlockContext,
    ) -> Option<BlockMatch> {
        let (marker_len, params) = self.scan_opening(doc, cx)?;
        let open_indent = doc.span(cx.start_line).indent;
        let marker_bytes = self.marker.len_utf8();

        let mut next = cx.start_line;
        let mut have_end = false;
        loop {
            next += 1;
            if next >= cx.end_line {
                // unclosed block is autoclosed by the end of the container
                break;
            }
            let span = doc.span(next);
            if !doc.is_blank(next) && span.indent < cx.blk_indent {
                // non-blank line dedented out of the container ends the block
                break;
            }
            let text = doc.content(next);
            if !text.starts_with(self.marker) {
                continue;
            }
            if span.indent >= cx.blk_indent + 4 {
                // closing fence must be indented less than 4 columns
                continue;
            }
            let run = text.chars().take_while(|&c| c == self.marker).count();
            if run < marker_len {
                // closing run must be at least as long as the opening one
                continue;
            }
            let rest = &text[run * marker_bytes..];
            if !rest.chars().all(char::is_whitespace) {
                continue;
            }
            have_end = true;
            break;
        }

        let content = doc.gather(cx.start_line + 1..next, open_indent);
        let next_line = next + usize::from(have_end);
        Some(BlockMatch {
            token: Token::RawBlock(RawBlock {
                content,
                marker: self.marker,
                marker_len,
                params: params.to_owned(),
                lines: (cx.start_line, next_line),
            }),
            next_line,
        })
    }
}
