//! HTML rendering for penmark token streams.
//!
//! Standard blocks render as escaped HTML with inline markup handled by
//! pulldown-cmark. Raw passthrough blocks (`@@@` fences by default) are the
//! point of the pipeline: their content is emitted exactly as written, with
//! zero sanitation, so trusted authors can embed component markup or other
//! foreign syntax in a document. Never feed user input through a pipeline
//! with raw blocks enabled — the entire fenced region reaches the output
//! unescaped.
//!
//! # Example
//!
//! ```
//! use penmark_renderer::DocumentRenderer;
//!
//! let renderer = DocumentRenderer::new();
//! let html = renderer.render("Some **prose**.\n\n@@@\n<Chart data={points} />\n@@@\n");
//! assert_eq!(
//!     html,
//!     "<p>Some <strong>prose</strong>.</p>\n<Chart data={points} />\n"
//! );
//! ```

mod document;
mod escape;
mod inline;
mod renderer;

pub use document::DocumentRenderer;
pub use escape::escape_html;
pub use renderer::HtmlRenderer;
