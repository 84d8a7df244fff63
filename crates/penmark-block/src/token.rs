//! Block tokens emitted by the first parsing pass.
//!
//! Tokens are owned values: a rule builds one, the dispatcher appends it to
//! the stream it is collecting, and a renderer consumes it. Every token
//! records the line range it consumed (end exclusive).

/// Consumed line range of a token: `(first_line, end_line_exclusive)`.
pub type LineRange = (usize, usize);

/// A block-level token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Plain paragraph text, inline markup not yet parsed.
    Paragraph(Paragraph),
    /// ATX heading.
    Heading(Heading),
    /// Fenced code block.
    CodeFence(CodeFence),
    /// Indented code block.
    IndentedCode(IndentedCode),
    /// Block quote with nested children.
    Blockquote(Blockquote),
    /// Bullet or ordered list.
    List(List),
    /// Thematic break.
    ThematicBreak(ThematicBreak),
    /// Verbatim passthrough block.
    RawBlock(RawBlock),
}

/// Paragraph token. `text` is the source lines joined with `\n`, leading
/// indentation removed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    pub text: String,
    pub lines: LineRange,
}

/// ATX heading token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    pub text: String,
    pub lines: LineRange,
}

/// Fenced code block token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeFence {
    /// Info string after the opening run, trimmed.
    pub info: String,
    /// Fence character (`` ` `` or `~`).
    pub marker: char,
    /// Length of the opening run.
    pub marker_len: usize,
    /// Interior text, opening-line indentation stripped.
    pub content: String,
    pub lines: LineRange,
}

/// Indented code block token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndentedCode {
    pub content: String,
    pub lines: LineRange,
}

/// Block quote token; the quoted interior is parsed into `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blockquote {
    pub children: Vec<Token>,
    pub lines: LineRange,
}

/// List marker flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListKind {
    /// Bullet list with its marker character (`-`, `*` or `+`).
    Bullet { marker: char },
    /// Ordered list with its start number and delimiter (`.` or `)`).
    Ordered { start: u32, delim: char },
}

/// List token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
    pub lines: LineRange,
}

/// Single list item; the item interior is parsed into `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    pub children: Vec<Token>,
    pub lines: LineRange,
}

/// Thematic break token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThematicBreak {
    pub lines: LineRange,
}

/// Verbatim passthrough block token.
///
/// `content` is the interior exactly as written (opening-line indentation
/// stripped, every line terminated with `\n`). Renderers must emit it
/// unmodified; nothing in the pipeline escapes or re-parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawBlock {
    pub content: String,
    /// Fence character of the opening run.
    pub marker: char,
    /// Length of the opening run.
    pub marker_len: usize,
    /// Parameter tail of the opening line, exactly as written.
    ///
    /// Ignored by the default renderer; kept for renderers that branch on it.
    pub params: String,
    pub lines: LineRange,
}
