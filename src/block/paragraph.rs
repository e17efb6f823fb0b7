//! Paragraph assembly, the final stage.
//!
//! The substituted document is split on `\n\n` into blocks. Each block is
//! trimmed; blank blocks are dropped, blocks that already open with block-level
//! markup are kept, and everything else becomes a paragraph with `<br>` for each
//! inner newline. Surviving blocks are joined with a single newline.

use crate::render::HtmlWriter;

/// Prefixes that mark a block as already rendered.
///
/// `<h` also covers `<hr`; `<ol` is never produced by the converter but is
/// still honored when it appears in the input.
pub const BLOCK_PREFIXES: [&str; 7] = ["<h", "<ul", "<ol", "<pre", "<blockquote", "<hr", "<table"];

/// Check whether a trimmed block starts with block-level markup.
#[inline]
pub fn is_block_html(block: &str) -> bool {
    BLOCK_PREFIXES.iter().any(|prefix| block.starts_with(prefix))
}

/// Wrap loose text blocks in paragraphs and join all blocks.
pub fn assemble(text: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(text.len());

    for block in text.split("\n\n").map(str::trim) {
        if block.is_empty() {
            continue;
        }
        if !writer.is_empty() {
            writer.newline();
        }
        if is_block_html(block) {
            writer.write_string(block);
        } else {
            writer.paragraph(block);
        }
    }

    writer.into_string()
}
