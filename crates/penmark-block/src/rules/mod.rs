//! Built-in block rules.

mod blockquote;
mod code;
mod fence;
mod heading;
mod hr;
mod list;
mod raw;

pub use blockquote::BlockquoteRule;
pub use code::IndentedCodeRule;
pub use fence::CodeFenceRule;
pub use heading::AtxHeadingRule;
pub use hr::ThematicBreakRule;
pub use list::ListRule;
pub use raw::RawBlockRule;
