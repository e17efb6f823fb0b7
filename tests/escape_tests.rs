use std::borrow::Cow;

use mdview::{escape_outside_tags, to_html};

// --- escape_outside_tags ---

#[test]
fn escape_ampersand() {
    assert_eq!(escape_outside_tags("foo & bar"), "foo &amp; bar");
}

#[test]
fn escape_preserves_tags() {
    assert_eq!(
        escape_outside_tags("<table>content & more</table>"),
        "<table>content &amp; more</table>"
    );
}

#[test]
fn escape_gt_outside_tags() {
    assert_eq!(escape_outside_tags("a > b & c"), "a &gt; b &amp; c");
}

#[test]
fn escape_inside_tag_is_verbatim() {
    assert_eq!(
        escape_outside_tags("<a href=\"x&y\">t & u</a>"),
        "<a href=\"x&y\">t &amp; u</a>"
    );
}

#[test]
fn escape_stray_lt_shields_until_gt() {
    assert_eq!(escape_outside_tags("5 < 10 & 3 > 2 & 1"), "5 < 10 & 3 > 2 &amp; 1");
    assert_eq!(escape_outside_tags("a < b & c"), "a < b & c");
}

#[test]
fn escape_existing_entities_again() {
    assert_eq!(escape_outside_tags("&amp;"), "&amp;amp;");
}

#[test]
fn escape_unicode() {
    assert_eq!(escape_outside_tags("café & crème > thé"), "café &amp; crème &gt; thé");
}

#[test]
fn escape_borrows_when_clean() {
    assert!(matches!(escape_outside_tags("plain text"), Cow::Borrowed("plain text")));
    assert!(matches!(escape_outside_tags(""), Cow::Borrowed("")));
}

// --- Through the converter ---

#[test]
fn converter_escapes_ampersand() {
    assert_eq!(to_html("Tom & Jerry"), "<p>Tom &amp; Jerry</p>");
}

#[test]
fn converter_escapes_gt() {
    assert_eq!(to_html("10 > 5 is true"), "<p>10 &gt; 5 is true</p>");
}

#[test]
fn converter_keeps_lt() {
    assert_eq!(to_html("5 < 10"), "<p>5 < 10</p>");
}

#[test]
fn converter_passes_raw_html() {
    assert_eq!(
        to_html("<script>alert('xss')</script>"),
        "<p><script>alert('xss')</script></p>"
    );
    assert_eq!(
        to_html("**<img src=x onerror=alert('xss')>**"),
        "<p><strong><img src=x onerror=alert('xss')></strong></p>"
    );
}

#[test]
fn converter_allows_attribute_breakout() {
    assert_eq!(
        to_html("![alt](x\" onerror=\"alert('xss'))"),
        "<p><img src=\"x\" onerror=\"alert('xss'\" alt=\"alt\">)</p>"
    );
    assert!(to_html("[click me](javascript:alert('xss'))").contains("href=\"javascript:"));
}
