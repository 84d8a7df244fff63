//! Indented code blocks.
//!
//! Lines indented at least 4 columns past the container indent. Interior
//! blank lines stay in the block; trailing blank lines are left for the
//! dispatcher.

use crate::line_index::DocumentView;
use crate::parser::BlockParser;
use crate::rule::{BlockContext, BlockMatch, BlockRule};
use crate::token::{IndentedCode, Token};

/// Block rule for indented code blocks.
#[derive(Debug, Clone, Copy)]
pub struct IndentedCodeRule;

impl BlockRule for IndentedCodeRule {
    fn name(&self) -> &'static str {
        "code"
    }

    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        !doc.is_blank(cx.start_line) && doc.span(cx.start_line).indent >= cx.blk_indent + 4
    }

    fn commit(
        &self,
        _parser: &BlockParser,
        doc: &DocumentView<'_>,
        cx: &BlockContext,
    ) -> Option<BlockMatch> {
        if !self.probe(doc, cx) {
            return None;
        }
        let mut next = cx.start_line + 1;
        let mut last = next;
        while next < cx.end_line {
            if doc.is_blank(next) {
                next += 1;
                continue;
            }
            if doc.span(next).indent >= cx.blk_indent + 4 {
                next += 1;
                last = next;
                continue;
            }
            break;
        }
        let content = doc.gather(cx.start_line..last, cx.blk_indent + 4);
        Some(BlockMatch {
            token: Token::IndentedCode(IndentedCode {
                content,
                lines: (cx.start_line, last),
            }),
            next_line: last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn commit(src: &str) -> Option<(IndentedCode, usize)> {
        let parser = BlockParser::empty();
        let doc = DocumentView::new(src);
        let cx = BlockContext {
            start_line: 0,
            end_line: doc.line_count(),
            blk_indent: 0,
            depth: 0,
        };
        let m = IndentedCodeRule.commit(&parser, &doc, &cx)?;
        match m.token {
            Token::IndentedCode(code) => Some((code, m.next_line)),
            other => panic!("expected indented code, got {other:?}"),
        }
    }

    #[test]
    fn test_basic_block() {
        let (code, next) = commit("    a\n    b\n").unwrap();
        assert_eq!(code.content, "a\nb\n");
        assert_eq!(next, 2);
    }

    #[test]
    fn test_tab_counts_as_indent() {
        let (code, _) = commit("\tx\n").unwrap();
        assert_eq!(code.content, "x\n");
    }

    #[test]
    fn test_excess_indent_kept() {
        let (code, _) = commit("      deep\n").unwrap();
        assert_eq!(code.content, "  deep\n");
    }

    #[test]
    fn test_interior_blank_kept_trailing_blank_dropped() {
        let (code, next) = commit("    a\n\n    b\n\n").unwrap();
        assert_eq!(code.content, "a\n\nb\n");
        assert_eq!(next, 3);
    }

    #[test]
    fn test_three_columns_do_not_open() {
        assert!(commit("   x\n").is_none());
    }

    #[test]
    fn test_ends_at_dedent() {
        let (code, next) = commit("    a\nplain\n").unwrap();
        assert_eq!(code.content, "a\n");
        assert_eq!(next, 1);
    }
}
