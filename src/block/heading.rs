//! ATX headings.
//!
//! A heading line starts with exactly N `#` characters and one space, N in 1..=6.
//! Levels are applied deepest first. A run of seven or more `#` has a `#` where
//! every pattern wants its space, so it matches no level and stays literal.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{compile, substitute};

/// One (pattern, template) pair per level, level 6 first.
static HEADINGS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    (1..=6u8)
        .rev()
        .map(|level| {
            (
                compile(&format!("(?mR)^#{{{level}}} (.+)$")),
                format!("<h{level}>${{1}}</h{level}>"),
            )
        })
        .collect()
});

/// Replace heading lines with `<hN>rest of line</hN>`.
pub fn render(text: String) -> String {
    HEADINGS
        .iter()
        .fold(text, |text, (re, template)| substitute(re, text, template))
}
