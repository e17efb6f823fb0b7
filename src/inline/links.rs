//! Images and links.
//!
//! Images run first; their mandatory leading `!` keeps the link pass from taking
//! them. Targets run to the first `)` and are copied into the attribute as-is.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute};

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"!\[([^\]]*?)\]\(([^)]+)\)"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"\[([^\]]+?)\]\(([^)]+)\)"));

/// Replace `![alt](src)` with `<img src="src" alt="alt">`. The alt text may be empty.
pub fn render_images(text: String) -> String {
    substitute(&IMAGE_RE, text, "<img src=\"${2}\" alt=\"${1}\">")
}

/// Replace `[label](href)` with `<a href="href">label</a>`. The label must not be empty.
pub fn render_links(text: String) -> String {
    substitute(&LINK_RE, text, "<a href=\"${2}\">${1}</a>")
}
