//! Fenced code blocks.
//!
//! An opening fence is three backticks at the start of a line, optionally
//! followed by a language tag of word characters, then a newline. The block runs
//! to the first following triple backtick. The content is not re-escaped.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute_with};
use crate::stash::CodeStash;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^```(\w*)\n([\s\S]*?)```"));

/// Replace fenced blocks with `<pre><code class="language-TAG">…</code></pre>`.
///
/// The class is always emitted; it is `language-` when no tag was given.
pub fn render(text: String, stash: &mut CodeStash) -> String {
    substitute_with(&FENCE_RE, text, |caps| {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            &caps[1],
            stash.hold(&caps[2])
        )
    })
}
