//! Line-anchored substitution stages.
//!
//! Each stage rewrites whole lines of the document:
//! - Fenced code blocks
//! - Headings
//! - Horizontal rules
//! - Blockquotes
//! - List items and list grouping
//! - Paragraph assembly
//!
//! They are interleaved with the inline stages by [`crate::to_html_with_options`];
//! the order is fixed because later stages only ever see what earlier ones left.

pub mod fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod quote;
pub mod rule;

pub use paragraph::{assemble, is_block_html, BLOCK_PREFIXES};
