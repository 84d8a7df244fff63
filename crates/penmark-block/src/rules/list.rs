//! Bullet and ordered lists.
//!
//! An item owns its marker line remainder plus every following line indented
//! to its content column (blank lines allowed in between); the interior is
//! re-parsed as a nested document. A shallower non-blank line ends the item,
//! and a sibling marker of the same flavor starts the next one.

use crate::line_index::DocumentView;
use crate::parser::{BlockParser, MAX_NESTING};
use crate::rule::{BlockContext, BlockMatch, BlockRule, Interrupt};
use crate::token::{List, ListItem, ListKind, Token};

/// Block rule for `-`/`*`/`+` bullets and `1.`/`1)` ordered markers.
#[derive(Debug, Clone, Copy)]
pub struct ListRule;

/// Parsed list marker on one line.
struct MarkerScan<'a> {
    kind: ListKind,
    /// Columns the marker itself occupies (`-` is 1, `12.` is 3).
    marker_cols: usize,
    /// First-line item content, one space after the marker consumed.
    rest: &'a str,
}

impl ListRule {
    fn scan_marker<'a>(
        doc: &DocumentView<'a>,
        line: usize,
        blk_indent: usize,
    ) -> Option<MarkerScan<'a>> {
        if doc.is_blank(line) {
            return None;
        }
        let span = doc.span(line);
        if span.indent < blk_indent || span.indent >= blk_indent + 4 {
            return None;
        }
        let text = doc.content(line);
        let first = text.chars().next()?;

        let (kind, marker_cols, after) = if matches!(first, '-' | '*' | '+') {
            (ListKind::Bullet { marker: first }, 1, &text[1..])
        } else if first.is_ascii_digit() {
            let digits: usize = text.chars().take_while(char::is_ascii_digit).count();
            // CommonMark caps ordered markers at 9 digits
            if digits > 9 {
                return None;
            }
            let delim = text[digits..].chars().next()?;
            if delim != '.' && delim != ')' {
                return None;
            }
            let start = text[..digits].parse::<u32>().ok()?;
            (
                ListKind::Ordered { start, delim },
                digits + 1,
                &text[digits + 1..],
            )
        } else {
            return None;
        };

        if !after.is_empty() && !after.starts_with(' ') && !after.starts_with('\t') {
            return None;
        }
        let rest = after.strip_prefix(' ').unwrap_or(after);
        Some(MarkerScan {
            kind,
            marker_cols,
            rest,
        })
    }

    fn same_flavor(a: ListKind, b: ListKind) -> bool {
        match (a, b) {
            (ListKind::Bullet { marker: m1 }, ListKind::Bullet { marker: m2 }) => m1 == m2,
            (ListKind::Ordered { delim: d1, .. }, ListKind::Ordered { delim: d2, .. }) => d1 == d2,
            _ => false,
        }
    }
}

impl BlockRule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn interrupts(&self, target: Interrupt) -> bool {
        matches!(target, Interrupt::Paragraph | Interrupt::Blockquote)
    }

    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool {
        match Self::scan_marker(doc, cx.start_line, cx.blk_indent) {
            // only a list starting at 1 may cut into running text
            Some(MarkerScan {
                kind: ListKind::Ordered { start, .. },
                ..
            }) => start == 1,
            Some(_) => true,
            None => false,
        }
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
        let first = Self::scan_marker(doc, cx.start_line, cx.blk_indent)?;
        let list_kind = first.kind;

        let mut items = Vec::new();
        let mut line = cx.start_line;
        let mut last_item_end = cx.start_line;
        while line < cx.end_line {
            let Some(scan) = Self::scan_marker(doc, line, cx.blk_indent) else {
                break;
            };
            if !Self::same_flavor(list_kind, scan.kind) {
                break;
            }
            let content_col = doc.span(line).indent + scan.marker_cols + 1;

            let mut pos = line + 1;
            let mut item_end = line + 1;
            while pos < cx.end_line {
                if doc.is_blank(pos) {
                    pos += 1;
                    continue;
                }
                if doc.span(pos).indent >= content_col {
                    pos += 1;
                    item_end = pos;
                    continue;
                }
                break;
            }

            let mut interior = String::with_capacity(scan.rest.len() + 1);
            interior.push_str(scan.rest);
            interior.push('\n');
            interior.push_str(&doc.gather(line + 1..item_end, content_col));

            let view = DocumentView::new(&interior);
            let children = parser.parse_region(&view, 0, view.line_count(), 0, cx.depth + 1);
            items.push(ListItem {
                children,
                lines: (line, item_end),
            });
            last_item_end = item_end;
            line = pos;
        }

        Some(BlockMatch {
            token: Token::List(List {
                kind: list_kind,
                items,
                lines: (cx.start_line, last_item_end),
            }),
            next_line: last_item_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> Vec<Token> {
        BlockParser::new().parse(src)
    }

    fn list(token: &Token) -> &List {
        match token {
            Token::List(list) => list,
            other => panic!("expected list, got {other:?}"),
        }
    }

    fn item_paragraph(item: &ListItem) -> &str {
        match &item.children[0] {
            Token::Paragraph(p) => &p.text,
            other => panic!("expected paragraph item, got {other:?}"),
        }
    }

    #[test]
    fn test_bullet_list() {
        let tokens = parse("- one\n- two\n");
        let list = list(&tokens[0]);
        assert_eq!(list.kind, ListKind::Bullet { marker: '-' });
        assert_eq!(list.items.len(), 2);
        assert_eq!(item_paragraph(&list.items[0]), "one");
        assert_eq!(item_paragraph(&list.items[1]), "two");
        assert_eq!(list.lines, (0, 2));
    }

    #[test]
    fn test_ordered_list_keeps_start() {
        let tokens = parse("3. three\n4. four\n");
        let list = list(&tokens[0]);
        assert_eq!(
            list.kind,
            ListKind::Ordered {
                start: 3,
                delim: '.'
            }
        );
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn test_different_bullet_marker_starts_new_list() {
        let tokens = parse("- one\n* other\n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(list(&tokens[0]).items.len(), 1);
        assert_eq!(list(&tokens[1]).kind, ListKind::Bullet { marker: '*' });
    }

    #[test]
    fn test_item_with_continuation_lines() {
        let tokens = parse("- first\n  second\n");
        let list = list(&tokens[0]);
        assert_eq!(list.items.len(), 1);
        assert_eq!(item_paragraph(&list.items[0]), "first\nsecond");
    }

    #[test]
    fn test_item_holds_blocks() {
        let tokens = parse("- para\n\n  ```\n  code\n  ```\n");
        let list = list(&tokens[0]);
        let children = &list.items[0].children;
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[1], Token::CodeFence(f) if f.content == "code\n"));
    }

    #[test]
    fn test_nested_list() {
        let tokens = parse("- outer\n  - inner\n");
        let outer = list(&tokens[0]);
        assert_eq!(outer.items.len(), 1);
        let children = &outer.items[0].children;
        assert!(matches!(&children[1], Token::List(l) if l.items.len() == 1));
    }

    #[test]
    fn test_dedent_ends_item() {
        let tokens = parse("- item\nplain\n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(item_paragraph(&list(&tokens[0]).items[0]), "item");
        assert!(matches!(&tokens[1], Token::Paragraph(p) if p.text == "plain"));
    }

    #[test]
    fn test_blank_line_between_items() {
        let tokens = parse("- one\n\n- two\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(list(&tokens[0]).items.len(), 2);
    }

    #[test]
    fn test_raw_block_autocloses_at_item_end() {
        let mut parser = BlockParser::new();
        parser
            .ruler_mut()
            .insert_before("fence", Box::new(crate::rules::RawBlockRule::default()))
            .unwrap();
        // the dedented line is outside the item, so the unterminated raw
        // block closes at the item boundary
        let tokens = parser.parse("- @@@\nplain\n");
        let list = list(&tokens[0]);
        assert!(matches!(&list.items[0].children[0], Token::RawBlock(raw) if raw.content.is_empty()));
        assert!(matches!(&tokens[1], Token::Paragraph(p) if p.text == "plain"));
    }

    #[test]
    fn test_empty_item() {
        let tokens = parse("-\n- x\n");
        let list = list(&tokens[0]);
        assert_eq!(list.items.len(), 2);
        assert!(list.items[0].children.is_empty());
    }

    #[test]
    fn test_ten_digit_marker_is_not_a_list() {
        let tokens = parse("1234567890. nope\n");
        assert!(matches!(&tokens[0], Token::Paragraph(_)));
    }
}
