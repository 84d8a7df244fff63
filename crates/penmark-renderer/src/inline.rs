//! Inline markup rendering.
//!
//! Paragraph and heading text goes through pulldown-cmark, the host engine
//! for inline parsing. Block-level events it may produce inside that text
//! (setext underlines, reference definitions) are rendered transparently:
//! their inner content only, no wrapping element. Raw HTML events pass
//! through unescaped, matching an html-enabled markdown pipeline.

use std::fmt::Write;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::escape::escape_html;

/// Alt text collected between `Start(Image)` and `End(Image)`.
struct ImageCapture {
    src: String,
    title: String,
    alt: String,
}

/// Render `text` as inline markup, appending to `out`.
pub(crate) fn push_inline(text: &str, out: &mut String) {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let mut image: Option<ImageCapture> = None;

    for event in parser {
        if image.is_some() {
            match event {
                Event::End(TagEnd::Image) => {
                    if let Some(capture) = image.take() {
                        write_image(&capture, out);
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some(capture) = image.as_mut() {
                        capture.alt.push_str(&text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(capture) = image.as_mut() {
                        capture.alt.push(' ');
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                image = Some(ImageCapture {
                    src: dest_url.into_string(),
                    title: title.into_string(),
                    alt: String::new(),
                });
            }
            Event::Start(tag) => start_tag(&tag, out),
            Event::End(tag) => end_tag(tag, out),
            Event::Text(text) => out.push_str(&escape_html(&text)),
            Event::Code(code) => {
                write!(out, "<code>{}</code>", escape_html(&code)).unwrap();
            }
            Event::Html(html) | Event::InlineHtml(html) => out.push_str(&html),
            Event::SoftBreak => out.push('\n'),
            Event::HardBreak => out.push_str("<br>\n"),
            Event::Rule
            | Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {}
        }
    }
}

fn start_tag(tag: &Tag<'_>, out: &mut String) {
    match tag {
        Tag::Emphasis => out.push_str("<em>"),
        Tag::Strong => out.push_str("<strong>"),
        Tag::Strikethrough => out.push_str("<s>"),
        Tag::Link { dest_url, .. } => {
            write!(out, r#"<a href="{}">"#, escape_html(dest_url)).unwrap();
        }
        // block-level tags inside inline text render transparently
        _ => {}
    }
}

fn end_tag(tag: TagEnd, out: &mut String) {
    match tag {
        TagEnd::Emphasis => out.push_str("</em>"),
        TagEnd::Strong => out.push_str("</strong>"),
        TagEnd::Strikethrough => out.push_str("</s>"),
        TagEnd::Link => out.push_str("</a>"),
        _ => {}
    }
}

fn write_image(capture: &ImageCapture, out: &mut String) {
    let title_attr = if capture.title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(&capture.title))
    };
    write!(
        out,
        r#"<img src="{}"{title_attr} alt="{}">"#,
        escape_html(&capture.src),
        escape_html(&capture.alt)
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inline(text: &str) -> String {
        let mut out = String::new();
        push_inline(text, &mut out);
        out
    }

    #[test]
    fn test_emphasis_and_strong() {
        assert_eq!(
            inline("*italic* and **bold**"),
            "<em>italic</em> and <strong>bold</strong>"
        );
    }

    #[test]
    fn test_inline_code_escaped() {
        assert_eq!(inline("`a < b`"), "<code>a &lt; b</code>");
    }

    #[test]
    fn test_text_escaped() {
        assert_eq!(inline("AT&T < you"), "AT&amp;T &lt; you");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            inline("[docs](https://example.com)"),
            r#"<a href="https://example.com">docs</a>"#
        );
    }

    #[test]
    fn test_image_with_alt() {
        assert_eq!(
            inline("![Alt text](image.png)"),
            r#"<img src="image.png" alt="Alt text">"#
        );
    }

    #[test]
    fn test_image_with_title() {
        assert_eq!(
            inline(r#"![alt](img.png "A title")"#),
            r#"<img src="img.png" title="A title" alt="alt">"#
        );
    }

    #[test]
    fn test_inline_html_passes_through() {
        assert_eq!(inline("a <span class=\"x\">b</span>"), "a <span class=\"x\">b</span>");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(inline("~~gone~~"), "<s>gone</s>");
    }

    #[test]
    fn test_soft_break_is_newline() {
        assert_eq!(inline("one\ntwo"), "one\ntwo");
    }
}
