//! Token-to-HTML rendering.
//!
//! Each block token renders to its HTML element followed by one newline.
//! Raw passthrough tokens are the exception twice over: their content is
//! emitted without escaping and without any wrapping element.

use std::fmt::Write;

use penmark_block::{List, ListKind, RawBlock, Token};

use crate::escape::escape_html;
use crate::inline::push_inline;

/// Renders a block token stream to HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render a token stream to a new string.
    #[must_use]
    pub fn render(&self, tokens: &[Token]) -> String {
        let mut out = String::with_capacity(1024);
        self.render_into(tokens, &mut out);
        out
    }

    /// Render a token stream, appending to `out`.
    pub fn render_into(&self, tokens: &[Token], out: &mut String) {
        for token in tokens {
            match token {
                Token::RawBlock(raw) => Self::raw_block(raw, out),
                Token::Paragraph(paragraph) => {
                    out.push_str("<p>");
                    push_inline(&paragraph.text, out);
                    out.push_str("</p>\n");
                }
                Token::Heading(heading) => {
                    write!(out, "<h{}>", heading.level).unwrap();
                    push_inline(&heading.text, out);
                    write!(out, "</h{}>", heading.level).unwrap();
                    out.push('\n');
                }
                Token::CodeFence(fence) => {
                    let lang = fence.info.split_whitespace().next();
                    Self::code_block(lang, &fence.content, out);
                }
                Token::IndentedCode(code) => Self::code_block(None, &code.content, out),
                Token::Blockquote(quote) => {
                    out.push_str("<blockquote>\n");
                    self.render_into(&quote.children, out);
                    out.push_str("</blockquote>\n");
                }
                Token::List(list) => self.list(list, out),
                Token::ThematicBreak(_) => out.push_str("<hr>\n"),
            }
        }
    }

    /// Verbatim passthrough: the stored content is the output, no escaping,
    /// no re-parsing, no wrapper.
    fn raw_block(raw: &RawBlock, out: &mut String) {
        out.push_str(&raw.content);
    }

    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(content)
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
        }
        out.push('\n');
    }

    fn list(&self, list: &List, out: &mut String) {
        match list.kind {
            ListKind::Bullet { .. } => out.push_str("<ul>\n"),
            ListKind::Ordered { start: 1, .. } => out.push_str("<ol>\n"),
            ListKind::Ordered { start, .. } => {
                write!(out, "<ol start=\"{start}\">").unwrap();
                out.push('\n');
            }
        }
        for item in &list.items {
            // single-paragraph items render tight
            if let [Token::Paragraph(paragraph)] = item.children.as_slice() {
                out.push_str("<li>");
                push_inline(&paragraph.text, out);
                out.push_str("</li>\n");
            } else {
                out.push_str("<li>\n");
                self.render_into(&item.children, out);
                out.push_str("</li>\n");
            }
        }
        match list.kind {
            ListKind::Bullet { .. } => out.push_str("</ul>\n"),
            ListKind::Ordered { .. } => out.push_str("</ol>\n"),
        }
    }
}
