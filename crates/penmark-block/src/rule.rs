//! Block rule contract.
//!
//! A block rule decides whether its construct begins at a candidate line and,
//! if so, consumes the construct and returns an owned token. Probing and
//! committing are separate operations so the probe path is side-effect-free
//! by construction: `probe` takes only shared references and returns a flag.

use crate::line_index::DocumentView;
use crate::parser::BlockParser;
use crate::token::Token;

/// Read-only position handed to every rule call.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext {
    /// Line the rule is being tried at.
    pub start_line: usize,
    /// Exclusive upper bound; rules must never read at or past it.
    pub end_line: usize,
    /// Minimum indentation the enclosing container imposes. A non-blank line
    /// below this width lies outside the current container.
    pub blk_indent: usize,
    /// Container nesting depth, bounded by [`crate::parser::MAX_NESTING`].
    pub depth: usize,
}

/// Successful match: the emitted token and the line the dispatcher resumes at.
#[derive(Debug)]
pub struct BlockMatch {
    pub token: Token,
    /// First line after the consumed range (exclusive end of the match).
    pub next_line: usize,
}

/// Constructs a rule may cut short when it matches at one of their
/// continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Paragraph,
    Blockquote,
    List,
    ReferenceDefinition,
}

/// A block-level matching rule.
pub trait BlockRule {
    /// Registry name of the rule, used for positional registration.
    fn name(&self) -> &'static str;

    /// Whether this rule may interrupt the given construct mid-flight.
    fn interrupts(&self, _target: Interrupt) -> bool {
        false
    }

    /// Cheap existence check: does this construct begin at
    /// `cx.start_line`? Must not scan past the opening line.
    fn probe(&self, doc: &DocumentView<'_>, cx: &BlockContext) -> bool;

    /// Full match. Returns `None` when the construct does not begin here;
    /// the dispatcher then tries the next rule.
    fn commit(
        &self,
        parser: &BlockParser,
        doc: &DocumentView<'_>,
        cx: &BlockContext,
    ) -> Option<BlockMatch>;
}
