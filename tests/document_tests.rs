use mdview::document::DEFAULT_STYLESHEET;
use mdview::{to_html, Document};

#[test]
fn wraps_converted_fragment() {
    let fragment = to_html("# Notes\n\n```rust\nlet x = 1;\n```");
    let page = Document::default().wrap(&fragment);

    assert!(page.starts_with("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n"));
    assert!(page.contains(DEFAULT_STYLESHEET));
    assert!(page.contains(&format!(
        "<body>{fragment}<script>hljs.highlightAll();</script></body>"
    )));
    assert!(page.ends_with("</html>\n"));
}

#[test]
fn highlight_styles_follow_color_scheme() {
    let page = Document::default().wrap("");
    assert!(page.contains("github.min.css\" media=\"(prefers-color-scheme: light)\""));
    assert!(page.contains("github-dark.min.css\" media=\"(prefers-color-scheme: dark)\""));
}

#[test]
fn plain_document_has_no_scripts() {
    let page = Document::new("p { margin: 0; }").wrap("<p>x</p>");
    assert!(!page.contains("<script"));
    assert!(page.contains("<style>p { margin: 0; }</style>"));
}

#[test]
fn custom_stylesheet_owned() {
    let css = format!("body {{ font-size: {}px; }}", 14);
    let doc = Document::new(css).with_syntax_highlighting(true);
    let page = doc.wrap("");
    assert!(page.contains("font-size: 14px"));
    assert!(page.contains("hljs.highlightAll();"));
}

#[test]
fn error_and_welcome_pages() {
    let doc = Document::default();
    let error = doc.error_page("Could not read notes.md: <permission denied>");
    assert!(error.contains("<p>Could not read notes.md: &lt;permission denied&gt;</p>"));

    let welcome = doc.welcome_page();
    assert!(welcome.contains(DEFAULT_STYLESHEET));
    assert!(!welcome.contains("hljs"));
}
