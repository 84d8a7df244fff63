//! Fenced code blocks.
//!
//! Backtick or tilde fences, run of three or more. The closing fence must use
//! the same character, be at least as long as the opening run, sit less than
//! 4 columns past the container indent, and carry nothing but whitespace
//! after the run. An unclosed fence consumes to the end of its container.

use crate::line_index::DocumentView;
use crate::parser::BlockParser;
use crate::rule::{BlockContext, BlockMatch, BlockRule, Interrupt};
use crate::token::{CodeFence, Token};

/// Block rule for fenced code blocks.
#[derive(Debug, Clone, Copy)]
pub struct CodeFenceRule;

impl CodeFenceRule {
    /// Validate the opening line. Returns the fence character, run length
    /// and info string.
    fn scan_opening<'a>(
        doc: &DocumentView<'a>,
        cx: &BlockContext,
    ) -> Option<(char, usize, &'a str)> {
        let span = doc.span(cx.start_line);
        if span.indent >= cx.blk_indent + 4 {
            return None;
        }
        let text = doc.content(cx.start_line);
        let marker = text.chars().next()?;
        if marker != '`' && marker != '~' {
            return None;
        }
        let marker_len = text.chars().take_while(|&c| c == marker).count();
        if marker_len < 3 {
            return None;
        }
        let info = &text[marker_len..];
        // backtick fences cannot carry backticks in the info string, or an
        // inline code span would read as a fence
        if marker == '`' && info.contains('`') {
            return None;
        }
        Some((marker, marker_len, info))
    }
}

impl BlockRule for CodeFenceRule {
    fn name(&self) -> &'static str {
        "fence"
    }

    fn interrupts(&self, _target: Interrupt) -> bool {
        true
    }

    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        Self::scan_opening(doc, cx).is_some()
    }

    fn commit(
        &self,
        _parser: &BlockParser,
        doc: &DocumentView<'_>,
        cx: &BlockContext,
    ) -> Option<BlockMatch> {
        let (marker, marker_len, info) = Self::scan_opening(doc, cx)?;
        let open_indent = doc.span(cx.start_line).indent;

        let mut next = cx.start_line;
        let mut have_end = false;
        loop {
            next += 1;
            if next >= cx.end_line {
                break;
            }
            let span = doc.span(next);
            if !doc.is_blank(next) && span.indent < cx.blk_indent {
                break;
            }
            let text = doc.content(next);
            if !text.starts_with(marker) {
                continue;
            }
            if span.indent >= cx.blk_indent + 4 {
                continue;
            }
            let run = text.chars().take_while(|&c| c == marker).count();
            if run < marker_len {
                continue;
            }
            let rest = &text[run..];
            if !rest.chars().all(char::is_whitespace) {
                continue;
            }
            have_end = true;
            break;
        }

        let content = doc.gather(cx.start_line + 1..next, open_indent);
        let next_line = next + usize::from(have_end);
        Some(BlockMatch {
            token: Token::CodeFence(CodeFence {
                info: info.trim().to_owned(),
                marker,
                marker_len,
                content,
                lines: (cx.start_line, next_line),
            }),
            next_line,
        })
    }
}
