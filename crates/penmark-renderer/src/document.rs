//! Top-level rendering pipeline.

use penmark_block::{BlockParser, RawBlockRule};

use crate::renderer::HtmlRenderer;

/// Name the raw rule registers under.
const RAW_RULE: &str = "raw";

/// Anchor rule the raw rule registers ahead of.
const FENCE_ANCHOR: &str = "fence";

/// Markdown-to-HTML pipeline with raw passthrough blocks enabled.
///
/// Wires a [`BlockParser`] (with the raw rule registered ahead of the code
/// fence rule) to the [`HtmlRenderer`]. The raw marker defaults to `@`.
///
/// # Example
///
/// ```
/// use penmark_renderer::DocumentRenderer;
///
/// let renderer = DocumentRenderer::new();
/// let html = renderer.render("Intro text\n\n@@@\n<Widget id=\"4\" />\n@@@\n");
/// assert_eq!(html, "<p>Intro text</p>\n<Widget id=\"4\" />\n");
/// ```
#[derive(Debug)]
pub struct DocumentRenderer {
    parser: BlockParser,
}

impl DocumentRenderer {
    /// Create a pipeline with the default `@` raw marker.
    #[must_use]
    pub fn new() -> Self {
        let mut parser = BlockParser::new();
        parser
            .ruler_mut()
            .insert_before(FENCE_ANCHOR, Box::new(RawBlockRule::default()))
            .expect("default rule chain includes the fence rule");
        Self { parser }
    }

    /// Use a different raw marker character.
    #[must_use]
    pub fn with_raw_marker(mut self, marker: char) -> Self {
        let ruler = self.parser.ruler_mut();
        let _ = ruler.remove(RAW_RULE);
        ruler
            .insert_before(FENCE_ANCHOR, Box::new(RawBlockRule::new(marker)))
            .expect("default rule chain includes the fence rule");
        self
    }

    /// Enable or disable raw passthrough blocks entirely.
    #[must_use]
    pub fn with_raw_blocks(mut self, enabled: bool) -> Self {
        let ruler = self.parser.ruler_mut();
        if enabled {
            if !ruler.contains(RAW_RULE) {
                ruler
                    .insert_before(FENCE_ANCHOR, Box::new(RawBlockRule::default()))
                    .expect("default rule chain includes the fence rule");
            }
        } else {
            let _ = ruler.remove(RAW_RULE);
        }
        self
    }

    /// The underlying block parser, for custom rule registration.
    #[must_use]
    pub fn parser(&self) -> &BlockParser {
        &self.parser
    }

    /// Mutable access to the underlying block parser.
    pub fn parser_mut(&mut self) -> &mut BlockParser {
        &mut self.parser
    }

    /// Render a markdown document to HTML.
    #[must_use]
    pub fn render(&self, src: &str) -> String {
        let tokens = self.parser.parse(src);
        HtmlRenderer::new().render(&tokens)
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}
