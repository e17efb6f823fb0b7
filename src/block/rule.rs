//! Horizontal rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute};

static RULE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?mR)^(?:-{3,}|\*{3,}|_{3,})$"));

/// Replace lines made only of three or more `-`, `*` or `_` with `<hr>`.
///
/// Runs after emphasis, so an asterisk line may already have been consumed as
/// an emphasis span by the time it gets here.
pub fn render(text: String) -> String {
    substitute(&RULE_RE, text, "<hr>")
}
