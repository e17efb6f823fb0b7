use mdview::{to_html, to_html_with_options, Options};

fn safe(input: &str) -> String {
    to_html_with_options(input, &Options::hardened())
}

fn escape_only(input: &str) -> String {
    let opts = Options {
        escape_raw_html: true,
        ..Options::default()
    };
    to_html_with_options(input, &opts)
}

fn protect_only(input: &str) -> String {
    let opts = Options {
        protect_code: true,
        ..Options::default()
    };
    to_html_with_options(input, &opts)
}

// --- Raw HTML ---

#[test]
fn script_escaped() {
    assert_eq!(
        safe("<script>alert('xss')</script>"),
        "<p>&lt;script&gt;alert('xss')&lt;/script&gt;</p>"
    );
}

#[test]
fn html_in_bold_escaped() {
    assert_eq!(
        safe("**<img src=x onerror=alert('xss')>**"),
        "<p><strong>&lt;img src=x onerror=alert('xss')&gt;</strong></p>"
    );
}

#[test]
fn lt_no_longer_shields() {
    assert_eq!(safe("5 < 10 & 3"), "<p>5 &lt; 10 &amp; 3</p>");
    assert_eq!(to_html("5 < 10 & 3"), "<p>5 < 10 & 3</p>");
}

#[test]
fn table_cell_escaped() {
    let out = safe("| Header |\n|--------|\n| <script>alert('xss')</script> |");
    assert!(out.contains("<td>&lt;script&gt;alert('xss')&lt;/script&gt;</td>"));
    assert!(!out.contains("<script>"));
}

#[test]
fn attribute_breakout_prevented() {
    assert_eq!(
        safe("![alt](x\" onerror=\"alert('xss'))"),
        "<p><img src=\"x&quot; onerror=&quot;alert('xss'\" alt=\"alt\">)</p>"
    );
    assert_eq!(
        safe("[x](a\"onmouseover=\"b)"),
        "<p><a href=\"a&quot;onmouseover=&quot;b\">x</a></p>"
    );
}

#[test]
fn markdown_still_renders() {
    assert_eq!(safe("> q"), "<blockquote>q</blockquote>");
    assert_eq!(safe("Tom & Jerry"), "<p>Tom &amp; Jerry</p>");
    assert_eq!(safe("# T\n\n- a\n- b"), "<h1>T</h1>\n<ul><li>a</li>\n<li>b</li></ul>");
    assert_eq!(
        safe("| A | B |\n|---|---|\n| 1 | 2 |"),
        to_html("| A | B |\n|---|---|\n| 1 | 2 |")
    );
}

// --- Code protection ---

#[test]
fn fence_content_literal() {
    assert_eq!(
        safe("```\n**x**\n\n# y\n```"),
        "<pre><code class=\"language-\">**x**\n\n# y\n</code></pre>"
    );
}

#[test]
fn fence_markup_escaped() {
    assert_eq!(
        safe("```html\n<div>&</div>\n```"),
        "<pre><code class=\"language-html\">&lt;div&gt;&amp;&lt;/div&gt;\n</code></pre>"
    );
}

#[test]
fn code_span_literal() {
    assert_eq!(safe("`**x**`"), "<p><code>**x**</code></p>");
    assert_eq!(safe("`a<b`"), "<p><code>a&lt;b</code></p>");
}

#[test]
fn protection_without_escaping() {
    assert_eq!(protect_only("`**x**`"), "<p><code>**x**</code></p>");
    assert_eq!(protect_only("<b>bold</b> `*x*`"), "<p><b>bold</b> <code>*x*</code></p>");
}

#[test]
fn escaping_without_protection() {
    assert_eq!(escape_only("`**x**`"), "<p><code><strong>x</strong></code></p>");
    assert_eq!(escape_only("<b>x</b>"), "<p>&lt;b&gt;x&lt;/b&gt;</p>");
}

#[test]
fn code_outside_prose_unaffected() {
    let out = safe("Text with **bold** and `*code*`.\n\n```rust\nlet a = *b;\n```");
    assert_eq!(
        out,
        "<p>Text with <strong>bold</strong> and <code>*code*</code>.</p>\n\
         <pre><code class=\"language-rust\">let a = *b;\n</code></pre>"
    );
}
