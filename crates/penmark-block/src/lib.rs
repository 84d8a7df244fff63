//! Line-indexed block tokenizer with pluggable rules.
//!
//! The parser walks a document line by line and offers each position to an
//! ordered list of block rules (the [`Ruler`]). Rules expose a cheap,
//! side-effect-free [`BlockRule::probe`] used for interruption checks and a
//! committing [`BlockRule::commit`] that returns an owned token. The
//! distinguishing built-in is [`RawBlockRule`]: a fence-style block whose
//! interior passes through the pipeline verbatim, with no escaping and no
//! further parsing.
//!
//! # Example
//!
//! ```
//! use penmark_block::{BlockParser, RawBlockRule, Token};
//!
//! let mut parser = BlockParser::new();
//! parser
//!     .ruler_mut()
//!     .insert_before("fence", Box::new(RawBlockRule::default()))
//!     .unwrap();
//!
//! let tokens = parser.parse("# Title\n\n@@@\n<Widget visible />\n@@@\n");
//! assert!(matches!(&tokens[0], Token::Heading(h) if h.level == 1));
//! assert!(matches!(&tokens[1], Token::RawBlock(raw) if raw.content == "<Widget visible />\n"));
//! ```

mod line_index;
mod parser;
mod rule;
mod ruler;
pub mod rules;
mod token;

pub use line_index::{DocumentView, LineSpan};
pub use parser::{BlockParser, MAX_NESTING};
pub use rule::{BlockContext, BlockMatch, BlockRule, Interrupt};
pub use ruler::{Ruler, RulerError};
pub use rules::RawBlockRule;
pub use token::{
    Blockquote, CodeFence, Heading, IndentedCode, LineRange, List, ListItem, ListKind, Paragraph,
    RawBlock, ThematicBreak, Token,
};
