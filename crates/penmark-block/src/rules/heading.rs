//! ATX headings.

use crate::line_index::DocumentView;
use crate::parser::BlockParser;
use crate::rule::{BlockContext, BlockMatch, BlockRule, Interrupt};
use crate::token::{Heading, Token};

/// Block rule for `#` headings, levels 1 through 6.
#[derive(Debug, Clone, Copy)]
pub struct AtxHeadingRule;

impl AtxHeadingRule {
    fn scan<'a>(doc: &DocumentView<'a>, cx: &BlockContext) -> Option<(u8, &'a str)> {
        let span = doc.span(cx.start_line);
        if span.indent >= cx.blk_indent + 4 {
            return None;
        }
        let text = doc.content(cx.start_line);
        if !text.starts_with('#') {
            return None;
        }
        let level = text.chars().take_while(|&c| c == '#').count();
        if level > 6 {
            return None;
        }
        let rest = &text[level..];
        if !rest.is_empty() && !rest.starts_with(' ') && !rest.starts_with('\t') {
            return None;
        }
        Some((u8::try_from(level).ok()?, rest))
    }

    /// Strip an optional closing run of `#` characters.
    fn strip_closing(body: &str) -> &str {
        let trimmed = body.trim();
        let without = trimmed.trim_end_matches('#');
        if without.len() == trimmed.len() {
            return trimmed;
        }
        if without.is_empty() {
            // the whole body is a closing run: `## ##`
            return "";
        }
        // the closing run only counts when separated by whitespace
        if without.ends_with(' ') || without.ends_with('\t') {
            without.trim_end()
        } else {
            trimmed
        }
    }
}

impl BlockRule for AtxHeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn interrupts(&self, _target: Interrupt) -> bool {
        true
    }

    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        Self::scan(doc, cx).is_some()
    }

    fn commit(
        &self,
        _parser: &BlockParser,
        doc: &DocumentView<'_>,
        cx: &BlockContext,
    ) -> Option<BlockMatch> {
        let (level, rest) = Self::scan(doc, cx)?;
        let text = Self::strip_closing(rest).to_owned();
        let next_line = cx.start_line + 1;
        Some(BlockMatch {
            token: Token::Heading(Heading {
                level,
                text,
                lines: (cx.start_line, next_line),
            }),
            next_line,
        })
    }
}
