//! Thematic breaks.

use crate::line_index::DocumentView;
use crate::parser::BlockParser;
use crate::rule::{BlockContext, BlockMatch, BlockRule, Interrupt};
use crate::token::{ThematicBreak, Token};

/// Block rule for thematic breaks: three or more `-`, `*` or `_`, optionally
/// separated by spaces or tabs.
#[derive(Debug, Clone, Copy)]
pub struct ThematicBreakRule;

impl ThematicBreakRule {
    fn scan(doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        let span = doc.span(cx.start_line);
        if span.indent >= cx.blk_indent + 4 {
            return false;
        }
        let text = doc.content(cx.start_line);
        let Some(marker) = text.chars().next() else {
            return false;
        };
        if marker != '-' && marker != '*' && marker != '_' {
            return false;
        }
        let mut count = 0;
        for ch in text.chars() {
            if ch == marker {
                count += 1;
            } else if ch != ' ' && ch != '\t' {
                return false;
            }
        }
        count >= 3
    }
}

impl BlockRule for ThematicBreakRule {
    fn name(&self) -> &'static str {
        "hr"
    }

    fn interrupts(&self, _target: Interrupt) -> bool {
        true
    }

    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        Self::scan(doc, cx)
    }

    fn commit(
        &self,
        _parser: &BlockParser,
        doc: &DocumentView<'_>,
        cx: &BlockContext,
    ) -> Option<BlockMatch> {
        if !Self::scan(doc, cx) {
            return None;
        }
        let next_line = cx.start_line + 1;
        Some(BlockMatch {
            token: Token::ThematicBreak(ThematicBreak {
                lines: (cx.start_line, next_line),
            }),
            next_line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(src: &str) -> bool {
        let doc = DocumentView::new(src);
        let cx = BlockContext {
            start_line: 0,
            end_line: doc.line_count(),
            blk_indent: 0,
            depth: 0,
        };
        ThematicBreakRule.probe(&doc, &cx)
    }

    #[test]
    fn test_basic_breaks() {
        assert!(matches("---\n"));
        assert!(matches("***\n"));
        assert!(matches("___\n"));
        assert!(matches("- - -\n"));
        assert!(matches("  ----------  \n"));
    }

    #[test]
    fn test_non_breaks() {
        assert!(!matches("--\n"));
        assert!(!matches("-*-\n"));
        assert!(!matches("--- x\n"));
        assert!(!matches("    ---\n"));
    }
}
