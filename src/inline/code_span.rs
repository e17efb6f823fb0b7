//! Inline code spans.
//!
//! A span is a single backtick, one or more non-backtick characters, and a
//! closing backtick. The content may cross line boundaries.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute_with};
use crate::stash::CodeStash;

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"`([^`]+)`"));

/// Replace `` `code` `` with `<code>code</code>`.
pub fn render(text: String, stash: &mut CodeStash) -> String {
    substitute_with(&CODE_SPAN_RE, text, |caps| {
        format!("<code>{}</code>", stash.hold(&caps[1]))
    })
}
