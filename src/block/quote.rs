//! Blockquotes.
//!
//! Escaping has already run, so the marker is `&gt; `. Each quoted line becomes
//! its own element; consecutive quoted lines are not merged.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute};

static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?mR)^&gt; (.+)$"));

/// Replace `&gt; text` lines with `<blockquote>text</blockquote>`.
pub fn render(text: String) -> String {
    substitute(&QUOTE_RE, text, "<blockquote>${1}</blockquote>")
}
