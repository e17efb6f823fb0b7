//! Asterisk emphasis.
//!
//! Three passes, longest delimiter first: `***x***`, `**x**`, `*x*`. Each span is
//! the shortest match on one line. There are no flanking rules, so `a * b * c`
//! yields an `<em>` around ` b `. Underscore delimiters are not recognized.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute};

static STRONG_EM_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?R)\*\*\*(.+?)\*\*\*"));
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?R)\*\*(.+?)\*\*"));
static EM_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?R)\*(.+?)\*"));

/// Apply bold-italic, bold and italic substitution in that order.
pub fn render(text: String) -> String {
    let text = substitute(&STRONG_EM_RE, text, "<strong><em>${1}</em></strong>");
    let text = substitute(&STRONG_RE, text, "<strong>${1}</strong>");
    substitute(&EM_RE, text, "<em>${1}</em>")
}
