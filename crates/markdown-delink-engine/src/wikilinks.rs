//! # Wikilink Pass
//!
//! Removes wikilinks `[[path]]`, `[[path|alias]]` and embeds `![[file]]`.
//!
//! Unlike the hyperlink pass there is no nesting here: the content of a
//! wikilink runs to the first `]]` after the opener, and brackets inside it
//! are ordinary characters. Content never crosses a line break; an opener
//! without a closing `]]` on the same line is literal text.

use crate::policy::{Decision, WikilinkOptions, WikilinkPolicy};
use crate::scan::{Cursor, Span, WikilinkSpan, kinds::Wikilink};

/// Removes wikilinks and embeds from `text` according to `options`.
///
/// Embeds always become empty, whatever the lists say. A removed wikilink
/// becomes its alias when `keep_alias` is set and an alias exists, otherwise
/// its path. Single-bracket Markdown links are never touched.
pub fn remove_wikilinks(text: &str, options: &WikilinkOptions) -> String {
    let policy = WikilinkPolicy::new(options);
    let mut out = String::with_capacity(text.len());
    let mut copied_up_to = 0;

    for link in scan(text) {
        let replacement = if link.is_image {
            ""
        } else {
            let path = link.path(text);
            if policy.decide(path) == Decision::Preserve {
                continue;
            }
            match link.alias(text) {
                Some(alias) if options.keep_alias => alias,
                _ => path,
            }
        };
        out.push_str(&text[copied_up_to..link.full.start]);
        out.push_str(replacement);
        copied_up_to = link.full.end;
    }

    out.push_str(&text[copied_up_to..]);
    out
}

/// Returns every wikilink and embed in `text`, in order, without applying policy.
pub fn find_wikilinks(text: &str) -> Vec<WikilinkSpan> {
    scan(text).collect()
}

fn scan(text: &str) -> impl Iterator<Item = WikilinkSpan> + '_ {
    let mut cur = Cursor::new(text);
    // Openers before this offset are known to have no `]]` on their line.
    let mut unclosed_until = 0;
    std::iter::from_fn(move || {
        while !cur.eof() {
            if let Some(link) = try_parse_wikilink(&mut cur, &mut unclosed_until) {
                return Some(link);
            }
            cur.bump();
        }
        None
    })
}

/// U+2028 LINE SEPARATOR and U+2029 PARAGRAPH SEPARATOR.
const UNICODE_LINE_BREAKS: [&[u8]; 2] = [b"\xE2\x80\xA8", b"\xE2\x80\xA9"];

fn at_line_break(cur: &Cursor<'_>) -> bool {
    matches!(cur.peek(), Some(b'\n' | b'\r'))
        || UNICODE_LINE_BREAKS.iter().any(|lb| cur.starts_with(lb))
}

/// Attempts to parse a wikilink or embed starting at the current position.
///
/// Returns `None` if not at `[[`/`![[` or if no `]]` closes it on this line.
/// On failure, cursor position is restored and `unclosed_until` records where
/// the search stopped, so later openers before that point fail immediately.
fn try_parse_wikilink(cur: &mut Cursor<'_>, unclosed_until: &mut usize) -> Option<WikilinkSpan> {
    let is_image = cur.starts_with(Wikilink::EMBED_OPEN);
    if !is_image && !cur.starts_with(Wikilink::OPEN) {
        return None;
    }
    if cur.pos() < *unclosed_until {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    if is_image {
        cur.bump_n(Wikilink::EMBED_OPEN.len());
    } else {
        cur.bump_n(Wikilink::OPEN.len());
    }
    let content_start = cur.pos();

    while !cur.eof() {
        if cur.starts_with(Wikilink::CLOSE) {
            break;
        }
        if at_line_break(cur) {
            break;
        }
        cur.bump();
    }
    let content_end = cur.pos();

    if !cur.starts_with(Wikilink::CLOSE) {
        // Not closed, restore cursor
        *unclosed_until = cur.pos();
        *cur = saved;
        return None;
    }
    cur.bump_n(Wikilink::CLOSE.len());

    Some(WikilinkSpan {
        full: Span::new(start, cur.pos()),
        content: Span::new(content_start, content_end),
        is_image,
    })
}
