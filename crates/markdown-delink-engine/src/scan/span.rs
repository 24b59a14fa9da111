use super::kinds::Wikilink;

/// A byte range `[start, end)` into the scanned text.
///
/// Spans are transient: a pass produces them and consumes them before it
/// returns. Slicing the source with a span reproduces the exact bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `text` with this span.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

/// A recognised `[text](url)` or `![alt](url)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyperlinkSpan {
    /// Full span including `!`, brackets and parentheses.
    pub full: Span,
    /// Link text between the outer brackets (nested brackets included).
    pub text: Span,
    /// URL between the outer parentheses (nested parentheses included).
    pub url: Span,
    pub is_image: bool,
}

/// A recognised `[[content]]` or `![[content]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WikilinkSpan {
    /// Full span including `!` and both bracket pairs.
    pub full: Span,
    /// Everything between `[[` and `]]`.
    pub content: Span,
    pub is_image: bool,
}

impl WikilinkSpan {
    /// The path component: content up to the first `|`, or all of it.
    pub fn path(self, text: &str) -> &str {
        let content = self.content.slice(text);
        match content.as_bytes().iter().position(|&b| b == Wikilink::ALIAS) {
            Some(pipe) => &content[..pipe],
            None => content,
        }
    }

    /// The alias after the first `|`, present only when a `|` occurs.
    pub fn alias(self, text: &str) -> Option<&str> {
        let content = self.content.slice(text);
        content
            .as_bytes()
            .iter()
            .position(|&b| b == Wikilink::ALIAS)
            .map(|pipe| &content[pipe + 1..])
    }
}
