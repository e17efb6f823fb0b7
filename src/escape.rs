//! HTML escaping.
//!
//! Two escapers live here:
//! - [`escape_outside_tags`], the tag-aware pass that runs after table extraction in
//!   the default pipeline. It is a two-state scanner and deliberately not an HTML
//!   tokenizer: any `<` switches it into tag mode until the next `>`.
//! - [`escape_all`], the unconditional escape used by the hardened pipeline before any
//!   markup is generated.
//!
//! Fast-path: when none of `&`, `<`, `>` occur the input is returned borrowed.

use std::borrow::Cow;

use memchr::memchr3;

/// Scanner state of the tag-aware escaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagState {
    /// Copying prose; `&` and `>` are escaped.
    Outside,
    /// Between a `<` and the next `>`; everything is copied verbatim.
    InsideTag,
}

impl TagState {
    /// Advance over one byte, returning the next state and the entity to emit
    /// in place of the byte, if any.
    #[inline]
    fn step(self, b: u8) -> (TagState, Option<&'static str>) {
        match (self, b) {
            (TagState::Outside, b'<') => (TagState::InsideTag, None),
            (TagState::Outside, b'&') => (TagState::Outside, Some("&amp;")),
            (TagState::Outside, b'>') => (TagState::Outside, Some("&gt;")),
            (TagState::Outside, _) => (TagState::Outside, None),
            (TagState::InsideTag, b'>') => (TagState::Outside, None),
            (TagState::InsideTag, _) => (TagState::InsideTag, None),
        }
    }
}

/// Escape `&` and `>` outside of tags, leaving tag syntax untouched.
///
/// A `<` is never escaped: it always opens tag mode, which lasts until the next
/// `>`. This keeps table markup intact, but it also means a stray `<` in prose
/// shields everything up to the next `>` from escaping.
///
/// # Example
/// ```
/// use mdview::escape_outside_tags;
///
/// assert_eq!(escape_outside_tags("foo & bar"), "foo &amp; bar");
/// assert_eq!(
///     escape_outside_tags("<table>a & b</table>"),
///     "<table>a &amp; b</table>"
/// );
/// ```
pub fn escape_outside_tags(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr3(b'<', b'>', b'&', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut state = TagState::Outside;
    // Start of the run not yet copied to `out`. Entities only replace ASCII
    // bytes, so every split point is a char boundary.
    let mut copied = 0;

    for (pos, &b) in bytes.iter().enumerate().skip(first) {
        let (next, entity) = state.step(b);
        state = next;
        if let Some(entity) = entity {
            out.push_str(&text[copied..pos]);
            out.push_str(entity);
            copied = pos + 1;
        }
    }
    out.push_str(&text[copied..]);

    Cow::Owned(out)
}

/// Escape `&`, `<`, `>` and `"` everywhere.
///
/// Used by the hardened pipeline in place of [`escape_outside_tags`]. Quotes are
/// included so link and image targets cannot close their attribute early.
pub fn escape_all(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}
