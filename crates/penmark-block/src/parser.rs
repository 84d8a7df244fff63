//! Block-level dispatcher.
//!
//! Walks the document line by line, offering each candidate position to the
//! registered rules in priority order. The first rule whose `commit` succeeds
//! emits a token and advances the cursor; positions no rule claims fall back
//! to paragraph accumulation, which rules may cut short via probe-mode
//! interruption checks.

use crate::line_index::DocumentView;
use crate::rule::{BlockContext, Interrupt};
use crate::ruler::Ruler;
use crate::rules::{
    AtxHeadingRule, BlockquoteRule, CodeFenceRule, IndentedCodeRule, ListRule, ThematicBreakRule,
};
use crate::token::{Paragraph, Token};

/// Maximum container nesting depth. Deeper openings fall through to
/// paragraph text instead of recursing further.
pub const MAX_NESTING: usize = 32;

/// Block-level parser: a [`Ruler`] plus the line-walking dispatch loop.
///
/// # Example
///
/// ```
/// use penmark_block::{BlockParser, RawBlockRule, Token};
///
/// let mut parser = BlockParser::new();
/// parser
///     .ruler_mut()
///     .insert_before("fence", Box::new(RawBlockRule::default()))
///     .unwrap();
///
/// let tokens = parser.parse("@@@\n<Widget />\n@@@\n");
/// assert!(matches!(&tokens[0], Token::RawBlock(raw) if raw.content == "<Widget />\n"));
/// ```
#[derive(Debug)]
pub struct BlockParser {
    ruler: Ruler,
}

impl BlockParser {
    /// Create a parser with the default rule chain: indented code, fence,
    /// blockquote, thematic break, list, heading.
    #[must_use]
    pub fn new() -> Self {
        let mut ruler = Ruler::new();
        ruler.push(Box::new(IndentedCodeRule));
        ruler.push(Box::new(CodeFenceRule));
        ruler.push(Box::new(BlockquoteRule));
        ruler.push(Box::new(ThematicBreakRule));
        ruler.push(Box::new(ListRule));
        ruler.push(Box::new(AtxHeadingRule));
        Self { ruler }
    }

    /// Create a parser with no rules registered; everything parses as
    /// paragraphs until rules are added.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ruler: Ruler::new(),
        }
    }

    /// The rule registry.
    #[must_use]
    pub fn ruler(&self) -> &Ruler {
        &self.ruler
    }

    /// Mutable access to the rule registry for registration.
    pub fn ruler_mut(&mut self) -> &mut Ruler {
        &mut self.ruler
    }

    /// Parse a document into a token stream.
    #[must_use]
    pub fn parse(&self, src: &str) -> Vec<Token> {
        self.parse_with_indent(src, 0)
    }

    /// Parse a document that sits inside a container requiring at least
    /// `blk_indent` columns of indentation. Non-blank lines below that width
    /// end the parse.
    #[must_use]
    pub fn parse_with_indent(&self, src: &str, blk_indent: usize) -> Vec<Token> {
        let doc = DocumentView::new(src);
        let tokens = self.parse_region(&doc, 0, doc.line_count(), blk_indent, 0);
        tracing::debug!(
            lines = doc.line_count(),
            tokens = tokens.len(),
            "block parse completed"
        );
        tokens
    }

    /// Dispatch loop over `[start, end)`. Container rules re-enter here for
    /// their interiors with an increased depth.
    pub(crate) fn parse_region(
        &self,
        doc: &DocumentView<'_>,
        start: usize,
        end: usize,
        blk_indent: usize,
        depth: usize,
    ) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut line = start;
        while line < end {
            if doc.is_blank(line) {
                line += 1;
                continue;
            }
            if doc.span(line).indent < blk_indent {
                break;
            }
            let cx = BlockContext {
                start_line: line,
                end_line: end,
                blk_indent,
                depth,
            };
            let mut matched = false;
            for rule in self.ruler.iter() {
                if let Some(m) = rule.commit(self, doc, &cx) {
                    tracing::trace!(rule = rule.name(), line, "block rule matched");
                    debug_assert!(m.next_line > line, "rule must consume at least one line");
                    line = m.next_line;
                    tokens.push(m.token);
                    matched = true;
                    break;
                }
            }
            if !matched {
                let (token, next_line) = self.consume_paragraph(doc, &cx);
                tokens.push(token);
                line = next_line;
            }
        }
        tokens
    }

    /// Paragraph fallback: accumulate lines until a blank line, a dedent
    /// below the container indent, or a rule that declares it interrupts
    /// paragraphs and probes true.
    fn consume_paragraph(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> (Token, usize) {
        let mut next = cx.start_line + 1;
        while next < cx.end_line {
            if doc.is_blank(next) {
                break;
            }
            if doc.span(next).indent < cx.blk_indent {
                break;
            }
            let probe_cx = BlockContext {
                start_line: next,
                ..*cx
            };
            let interrupted = self
                .ruler
                .iter()
                .any(|rule| rule.interrupts(Interrupt::Paragraph) && rule.probe(doc, &probe_cx));
            if interrupted {
                break;
            }
            next += 1;
        }

        let mut text = String::new();
        for line in cx.start_line..next {
            if line > cx.start_line {
                text.push('\n');
            }
            text.push_str(doc.content(line));
        }
        let token = Token::Paragraph(Paragraph {
            text,
            lines: (cx.start_line, next),
        });
        (token, next)
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RawBlockRule;
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> Vec<Token> {
        BlockParser::new().parse(src)
    }

    fn paragraph_text(token: &Token) -> &str {
        match token {
            Token::Paragraph(p) => &p.text,
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("\n\n  \n"), vec![]);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let tokens = parse("one\ntwo\n\nthree\n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(paragraph_text(&tokens[0]), "one\ntwo");
        assert_eq!(paragraph_text(&tokens[1]), "three");
        assert_eq!(
            tokens[0],
            Token::Paragraph(Paragraph {
                text: "one\ntwo".to_owned(),
                lines: (0, 2),
            })
        );
    }

    #[test]
    fn test_paragraph_continuation_drops_leading_indent() {
        let tokens = parse("one\n    two\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(paragraph_text(&tokens[0]), "one\ntwo");
    }

    #[test]
    fn test_heading_between_paragraphs() {
        let tokens = parse("para\n# Title\npara two\n");
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[1], Token::Heading(h) if h.level == 1 && h.text == "Title"));
    }

    #[test]
    fn test_fence_interrupts_paragraph() {
        let tokens = parse("para\n```\ncode\n```\n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(paragraph_text(&tokens[0]), "para");
        assert!(matches!(&tokens[1], Token::CodeFence(f) if f.content == "code\n"));
    }

    #[test]
    fn test_indented_code_does_not_interrupt_paragraph() {
        let tokens = parse("para\n    still para\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(paragraph_text(&tokens[0]), "para\nstill para");
    }

    #[test]
    fn test_region_ends_on_dedent() {
        let parser = BlockParser::new();
        let tokens = parser.parse_with_indent("  one\nout\n", 2);
        assert_eq!(tokens.len(), 1);
        assert_eq!(paragraph_text(&tokens[0]), "one");
    }

    #[test]
    fn test_raw_rule_registered_before_fence() {
        let mut parser = BlockParser::new();
        parser
            .ruler_mut()
            .insert_before("fence", Box::new(RawBlockRule::default()))
            .unwrap();

        let tokens = parser.parse("@@@\n```\n@@@\n```js\ncode\n```\n");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(&tokens[0], Token::RawBlock(raw) if raw.content == "```\n"));
        assert!(matches!(&tokens[1], Token::CodeFence(f) if f.info == "js"));
    }

    #[test]
    fn test_raw_rule_interrupts_paragraph() {
        let mut parser = BlockParser::new();
        parser
            .ruler_mut()
            .insert_before("fence", Box::new(RawBlockRule::default()))
            .unwrap();

        let tokens = parser.parse("para\n@@@\n<X />\n@@@\n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(paragraph_text(&tokens[0]), "para");
        assert!(matches!(&tokens[1], Token::RawBlock(raw) if raw.content == "<X />\n"));
    }

    #[test]
    fn test_unregistered_raw_marker_is_paragraph_text() {
        let tokens = parse("@@@\ntext\n@@@\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(paragraph_text(&tokens[0]), "@@@\ntext\n@@@");
    }

    #[test]
    fn test_document_mix() {
        let tokens = parse("# Title\n\npara\n\n- one\n- two\n\n> quoted\n");
        assert_eq!(tokens.len(), 4);
        assert!(matches!(&tokens[0], Token::Heading(_)));
        assert!(matches!(&tokens[1], Token::Paragraph(_)));
        assert!(matches!(&tokens[2], Token::List(l) if l.items.len() == 2));
        assert!(matches!(&tokens[3], Token::Blockquote(_)));
    }

    #[test]
    fn test_empty_parser_parses_everything_as_paragraphs() {
        let parser = BlockParser::empty();
        let tokens = parser.parse("# not a heading\n```\nnot code\n```\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            paragraph_text(&tokens[0]),
            "# not a heading\n```\nnot code\n```"
        );
    }
}
