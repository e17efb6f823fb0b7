//! Shared regex plumbing for the substitution stages.
//!
//! Every stage is one global substitute-all over the whole document. Patterns are
//! compiled once on first use; the `regex` engine matches in linear time, so no
//! input shape can make a stage backtrack.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Compile a pattern that is part of the converter itself.
///
/// Only called from `LazyLock` initializers with string literals; every one of
/// them is exercised by the unit tests of the stage that owns it.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid built-in pattern {pattern:?}: {err}"))
}

/// Replace every match of `re` in `text` with the expansion of `template`.
///
/// `template` uses the `regex` crate's `${N}` capture syntax. When nothing
/// matches, the input buffer is handed back without reallocating.
pub(crate) fn substitute(re: &Regex, text: String, template: &str) -> String {
    let replaced = match re.replace_all(&text, template) {
        Cow::Owned(out) => Some(out),
        Cow::Borrowed(_) => None,
    };
    replaced.unwrap_or(text)
}

/// Like [`substitute`], but each replacement is computed by `rep`.
pub(crate) fn substitute_with<F>(re: &Regex, text: String, rep: F) -> String
where
    F: FnMut(&Captures<'_>) -> String,
{
    let replaced = match re.replace_all(&text, rep) {
        Cow::Owned(out) => Some(out),
        Cow::Borrowed(_) => None,
    };
    replaced.unwrap_or(text)
}
