//! List items and list grouping.
//!
//! Items are recognized one line at a time, then every run of adjacent items is
//! wrapped in a single `<ul>`. Ordered markers produce the same `<li>` as bullet
//! markers and the number is dropped, so ordered lists also end up in `<ul>`.
//! `+` bullets are not recognized.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute};

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?mR)^[*-] (.+)$"));
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?mR)^\d+\. (.+)$"));
static RUN_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?R)(?:<li>.*?</li>\n?)+"));

/// Replace `* item`, `- item` and `N. item` lines with `<li>item</li>`.
pub fn render_items(text: String) -> String {
    let text = substitute(&BULLET_RE, text, "<li>${1}</li>");
    substitute(&ORDERED_RE, text, "<li>${1}</li>")
}

/// Wrap each run of consecutive `<li>…</li>` lines in `<ul>…</ul>`.
///
/// A run swallows the line terminator after its last item, so the closing
/// `</ul>` lands on the following line.
pub fn group_items(text: String) -> String {
    substitute(&RUN_RE, text, "<ul>${0}</ul>")
}
