//! mdview: lightweight Markdown to HTML converter
//!
//! Turns Markdown text into an HTML fragment meant for the body of a viewer
//! page. Conversion is a fixed sequence of whole-document pattern
//! substitutions:
//!
//! 1. Pipe tables ([`extract_tables`])
//! 2. Tag-aware escaping ([`escape_outside_tags`])
//! 3. Fenced code blocks, then inline code
//! 4. Headings (level 6 down to 1)
//! 5. Emphasis (bold-italic, bold, italic)
//! 6. Images, then links
//! 7. Horizontal rules, blockquotes
//! 8. List items, then list grouping
//! 9. Paragraph assembly
//!
//! # Design Principles
//! - No AST: each stage maps the whole document to a new document
//! - Total: every input has an output, nothing fails or panics
//! - Linear-time patterns: no backtracking engine, no pathological inputs
//!
//! This is not a CommonMark parser. The default output reproduces a small,
//! known set of quirks (no `<ol>`, per-line blockquotes, code content still
//! being processed by later stages, raw `<` shielding text from escaping).
//! [`Options::hardened`] removes the ones that matter for untrusted input.

pub mod block;
pub mod document;
pub mod escape;
pub mod inline;
pub mod render;
pub mod table;

mod pattern;
mod stash;

pub use document::Document;
pub use escape::escape_outside_tags;
pub use render::HtmlWriter;
pub use table::{extract_tables, table_lines_to_html};

use stash::CodeStash;

/// Conversion options.
///
/// The default keeps every quirk listed in the crate docs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Escape every `&`, `<`, `>` and `"` in the input before any markup is
    /// generated, instead of the tag-aware pass after table extraction.
    ///
    /// Raw HTML, table cells and link targets can then no longer inject markup.
    pub escape_raw_html: bool,
    /// Keep fenced code and code span content away from the later stages, so
    /// Markdown syntax inside code stays literal and blank lines inside a fenced
    /// block do not split it.
    pub protect_code: bool,
}

impl Options {
    /// Options for rendering untrusted input: everything escaped, code protected.
    pub fn hardened() -> Self {
        Self {
            escape_raw_html: true,
            protect_code: true,
        }
    }
}

/// Convert Markdown to an HTML fragment.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = mdview::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>");
/// ```
pub fn to_html(markdown: &str) -> String {
    to_html_with_options(markdown, &Options::default())
}

/// Convert Markdown to an HTML fragment with options.
pub fn to_html_with_options(markdown: &str, options: &Options) -> String {
    let mut code = CodeStash::new(options.protect_code);

    let text = if options.escape_raw_html {
        extract_tables(&escape::escape_all(markdown)).into_owned()
    } else {
        escape_outside_tags(&extract_tables(markdown)).into_owned()
    };

    let text = block::fence::render(text, &mut code);
    let text = inline::code_span::render(text, &mut code);
    let text = block::heading::render(text);
    let text = inline::emphasis::render(text);
    let text = inline::links::render_images(text);
    let text = inline::links::render_links(text);
    let text = block::rule::render(text);
    let text = block::quote::render(text);
    let text = block::list::render_items(text);
    let text = block::list::group_items(text);

    let html = code.restore(block::assemble(&text));

    log::debug!(
        "converted {} bytes of markdown to {} bytes of html ({} code blocks held)",
        markdown.len(),
        html.len(),
        code.len()
    );
    html
}
