//! Inline span stages.
//!
//! - Code spans (`` `x` ``)
//! - Emphasis (`***x***`, `**x**`, `*x*`)
//! - Images and links (`![alt](src)`, `[label](href)`)
//!
//! Spans are plain pattern substitutions over the whole document; there is no
//! delimiter stack, so precedence is whatever the stage order gives.

pub mod code_span;
pub mod emphasis;
pub mod links;
