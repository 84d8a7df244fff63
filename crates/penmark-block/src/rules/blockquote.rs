//! Block quotes.
//!
//! Consumes contiguous `>`-marked lines, strips the marker plus one optional
//! space, and re-parses the interior as a nested document. Every quoted line
//! must carry its own marker; there is no lazy continuation.

use crate::line_index::DocumentView;
use crate::parser::{BlockParser, MAX_NESTING};
use crate::rule::{BlockContext, BlockMatch, BlockRule, Interrupt};
use crate::token::{Blockquote, Token};

/// Block rule for `>` quotes.
#[derive(Debug, Clone, Copy)]
pub struct BlockquoteRule;

impl BlockquoteRule {
    /// Quoted-line check: marker at less than 4 columns past the container
    /// indent. Returns the line content after the marker and one optional
    /// space.
    fn quoted_rest<'a>(
        doc: &DocumentView<'a>,
        line: usize,
        blk_indent: usize,
    ) -> Option<&'a str> {
        if doc.is_blank(line) {
            return None;
        }
        let span = doc.span(line);
        if span.indent < blk_indent || span.indent >= blk_indent + 4 {
            return None;
        }
        let rest = doc.content(line).strip_prefix('>')?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

impl BlockRule for BlockquoteRule {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn interrupts(&self, target: Interrupt) -> bool {
        matches!(target, Interrupt::Paragraph | Interrupt::List)
    }

    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        Self::quoted_rest(doc, cx.start_line, cx.blk_indent).is_some()
    }

    fn commit(
        &self,
        parser: &BlockParser,
        doc: &DocumentView<'_>,
        cx: &BlockContext,
    ) -> Option<BlockMatch> {
        if cx.depth >= MAX_NESTING {
            return None;
        }
        Self::quoted_rest(doc, cx.start_line, cx.blk_indent)?;

        let mut interior = String::new();
        let mut next = cx.start_line;
        while next < cx.end_line {
            let Some(rest) = Self::quoted_rest(doc, next, cx.blk_indent) else {
                break;
            };
            interior.push_str(rest);
            interior.push('\n');
            next += 1;
        }

        let view = DocumentView::new(&interior);
        let children = parser.parse_region(&view, 0, view.line_count(), 0, cx.depth + 1);
        Some(BlockMatch {
            token: Token::Blockquote(Blockquote {
                children,
                lines: (cx.start_line, next),
            }),
            next_line: next,
        })
    }
}
