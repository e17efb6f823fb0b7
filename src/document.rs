//! Full HTML pages around a converted fragment.
//!
//! The converter only produces body content. A [`Document`] is the immutable
//! page configuration a viewer uses to turn that fragment into something it can
//! load: a stylesheet and, optionally, client-side syntax highlighting for
//! `<code class="language-…">` blocks.

use std::borrow::Cow;

use crate::render::HtmlWriter;

/// Built-in stylesheet, light and dark color schemes.
pub const DEFAULT_STYLESHEET: &str = include_str!("../assets/style.css");

const HIGHLIGHT_LIGHT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";
const HIGHLIGHT_DARK_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github-dark.min.css";
const HIGHLIGHT_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

/// Page template for converted fragments.
///
/// # Example
/// ```
/// use mdview::{to_html, Document};
///
/// let page = Document::default().wrap(&to_html("# Notes"));
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("<body><h1>Notes</h1>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// CSS placed in a `<style>` element in the page head.
    pub stylesheet: Cow<'static, str>,
    /// Link highlight.js and run it over code blocks once the page loads.
    pub syntax_highlighting: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            stylesheet: Cow::Borrowed(DEFAULT_STYLESHEET),
            syntax_highlighting: true,
        }
    }
}

impl Document {
    /// A document with a custom stylesheet and no syntax highlighting.
    pub fn new(stylesheet: impl Into<Cow<'static, str>>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
            syntax_highlighting: false,
        }
    }

    /// Enable or disable syntax highlighting.
    pub fn with_syntax_highlighting(mut self, enabled: bool) -> Self {
        self.syntax_highlighting = enabled;
        self
    }

    /// Wrap a converted fragment in a complete page.
    pub fn wrap(&self, fragment: &str) -> String {
        let mut writer =
            HtmlWriter::with_capacity_for(fragment.len() + self.stylesheet.len() + 512);
        self.head(&mut writer, self.syntax_highlighting);
        writer.write_str("<body>");
        writer.write_string(fragment);
        if self.syntax_highlighting {
            writer.write_str("<script>hljs.highlightAll();</script>");
        }
        writer.write_str("</body>\n</html>\n");
        writer.into_string()
    }

    /// Page reporting a failure, e.g. a file that could not be read.
    ///
    /// The message is escaped.
    pub fn error_page(&self, message: &str) -> String {
        let mut writer = HtmlWriter::with_capacity_for(message.len() + self.stylesheet.len() + 256);
        self.head(&mut writer, false);
        writer.write_str("<body><h1>Error</h1><p>");
        writer.write_string(&html_escape::encode_text(message));
        writer.write_str("</p></body>\n</html>\n");
        writer.into_string()
    }

    /// Placeholder page shown before any file is open.
    pub fn welcome_page(&self) -> String {
        let mut writer = HtmlWriter::with_capacity_for(self.stylesheet.len() + 512);
        self.head(&mut writer, false);
        writer.write_str(
            "<body>\n<h1>mdview</h1>\n<p>A lightweight Markdown viewer.</p>\n\
             <p>Open a Markdown file to render it here, or convert one from the command line:</p>\n\
             <pre><code>mdview path/to/file.md</code></pre>\n</body>\n</html>\n",
        );
        writer.into_string()
    }

    fn head(&self, writer: &mut HtmlWriter, highlighting: bool) {
        writer.write_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>");
        writer.write_string(&self.stylesheet);
        writer.write_str("</style>\n");
        if highlighting {
            writer.write_str("<link rel=\"stylesheet\" href=\"");
            writer.write_str(HIGHLIGHT_LIGHT_CSS);
            writer.write_str("\" media=\"(prefers-color-scheme: light)\">\n");
            writer.write_str("<link rel=\"stylesheet\" href=\"");
            writer.write_str(HIGHLIGHT_DARK_CSS);
            writer.write_str("\" media=\"(prefers-color-scheme: dark)\">\n");
            writer.write_str("<script src=\"");
            writer.write_str(HIGHLIGHT_JS);
            writer.write_str("\"></script>\n");
        }
        writer.write_str("</head>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet_is_embedded() {
        let page = Document::default().wrap("");
        assert!(page.contains("<style>:root {"));
        assert!(page.contains("prefers-color-scheme: dark"));
    }

    #[test]
    fn test_highlighting_toggle() {
        let on = Document::default().wrap("<p>x</p>");
        assert!(on.contains("highlight.min.js"));
        assert!(on.contains("hljs.highlightAll();"));

        let off = Document::default().with_syntax_highlighting(false).wrap("<p>x</p>");
        assert!(!off.contains("highlight"));
        assert!(!off.contains("hljs"));
    }

    #[test]
    fn test_custom_stylesheet() {
        let doc = Document::new("body { color: red; }");
        let page = doc.wrap("<p>x</p>");
        assert!(page.contains("<style>body { color: red; }</style>"));
        assert!(page.contains("<body><p>x</p></body>"));
        assert!(!page.contains("hljs"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = Document::default().error_page("can't read <file> & stuff");
        assert!(page.contains("<h1>Error</h1>"));
        assert!(page.contains("<p>can't read &lt;file&gt; &amp; stuff</p>"));
        assert!(!page.contains("highlight"));
    }

    #[test]
    fn test_welcome_page() {
        let page = Document::default().welcome_page();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>mdview</h1>"));
    }
}
