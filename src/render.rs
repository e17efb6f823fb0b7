//! HTML output writer.
//!
//! Builds the markup the converter emits itself (table blocks and paragraph
//! wrapping). Content passed in is written verbatim: escaping is a pipeline
//! stage, not a writer concern.

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use mdview::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(32);
/// writer.paragraph("Hello\nWorld");
///
/// assert_eq!(writer.into_string(), "<p>Hello<br>World</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Generated markup is usually a little larger than its source.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a static string.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Paragraphs ---

    /// Write `<p>text</p>`, turning each `\n` inside `text` into `<br>`.
    pub fn paragraph(&mut self, text: &str) {
        self.write_str("<p>");
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_string(first);
        }
        for line in lines {
            self.write_str("<br>");
            self.write_string(line);
        }
        self.write_str("</p>");
    }

    // --- Tables ---

    /// Open a table and its header row: `<table>\n<thead>\n<tr>`
    #[inline]
    pub fn table_start(&mut self) {
        self.write_str("<table>\n<thead>\n<tr>");
    }

    /// Header cell: `<th>text</th>`
    #[inline]
    pub fn th(&mut self, text: &str) {
        self.write_str("<th>");
        self.write_string(text);
        self.write_str("</th>");
    }

    /// Close the header row and open the body: `</tr>\n</thead>\n<tbody>\n`
    #[inline]
    pub fn thead_end(&mut self) {
        self.write_str("</tr>\n</thead>\n<tbody>\n");
    }

    /// Body row start: `<tr>`
    #[inline]
    pub fn tr_start(&mut self) {
        self.write_str("<tr>");
    }

    /// Body cell: `<td>text</td>`
    #[inline]
    pub fn td(&mut self, text: &str) {
        self.write_str("<td>");
        self.write_string(text);
        self.write_str("</td>");
    }

    /// Body row end: `</tr>\n`
    #[inline]
    pub fn tr_end(&mut self) {
        self.write_str("</tr>\n");
    }

    /// Close the body and the table: `</tbody>\n</table>`
    #[inline]
    pub fn table_end(&mut self) {
        self.write_str("</tbody>\n</table>");
    }
}
