//! Placeholder store for code content.
//!
//! With code protection on, the code stages hand their content to a
//! [`CodeStash`] and put a short token in the document instead. The token is
//! built from private-use characters and holds no newline, so no later stage
//! matches it and paragraph assembly cannot split it. [`CodeStash::restore`]
//! swaps the content back in after the last stage.
//!
//! With protection off, the stash is a pass-through.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::pattern::{compile, substitute_with};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| compile("\u{E000}([0-9]+)\u{E001}"));

/// Content held back from the substitution stages.
#[derive(Debug, Default)]
pub struct CodeStash {
    enabled: bool,
    entries: Vec<String>,
}

impl CodeStash {
    /// Create a stash. A disabled stash returns content unchanged from [`hold`](Self::hold).
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }

    /// Number of held entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take `content` and return the text to put in the document in its place.
    pub fn hold(&mut self, content: &str) -> String {
        if !self.enabled {
            return content.to_string();
        }
        let token = format!("{OPEN}{}{CLOSE}", self.entries.len());
        self.entries.push(content.to_string());
        token
    }

    /// Put every held entry back in place of its token.
    ///
    /// Tokens that do not name a held entry (for example ones that were already
    /// present in the input) are left as they are.
    pub fn restore(&self, html: String) -> String {
        if self.is_empty() {
            return html;
        }
        substitute_with(&TOKEN_RE, html, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| self.entries.get(index))
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        })
    }
}
