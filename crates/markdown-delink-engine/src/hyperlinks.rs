//! # Hyperlink Pass
//!
//! Removes Markdown links `[text](url)` and images `![alt](url)`.
//!
//! The scan is a single left-to-right walk over the text. At each position
//! it tries, in order:
//!
//! 1. A wikilink or embed (`[[` / `![[`). The whole bracket-balanced span is
//!    skipped verbatim, otherwise `[[a]]` would read as two `[...]` attempts.
//! 2. A hyperlink: bracket-balanced link text (`\[` and `\]` do not nest),
//!    immediately followed by a parenthesis-balanced URL.
//!
//! Anything that does not complete as a link is literal text: the cursor
//! moves one byte past the opener and scanning resumes.

use crate::policy::{Decision, HyperlinkOptions, HyperlinkPolicy};
use crate::scan::{
    Cursor, DelimiterMatches, HyperlinkSpan, Span,
    kinds::{Hyperlink, Wikilink},
};

/// Removes hyperlinks and images from `text` according to `options`.
///
/// Removed images become empty; removed links become their text when
/// `keep_text` is set, otherwise empty. Spans the policy preserves, wikilinks,
/// and all other text are copied unchanged.
pub fn remove_hyperlinks(text: &str, options: &HyperlinkOptions) -> String {
    let policy = HyperlinkPolicy::new(options);
    let mut out = String::with_capacity(text.len());
    let mut copied_up_to = 0;

    for link in scan(text) {
        if policy.decide(link.url.slice(text)) == Decision::Preserve {
            continue;
        }
        out.push_str(&text[copied_up_to..link.full.start]);
        if !link.is_image && options.keep_text {
            out.push_str(link.text.slice(text));
        }
        copied_up_to = link.full.end;
    }

    out.push_str(&text[copied_up_to..]);
    out
}

/// Returns every hyperlink and image in `text`, in order, without applying
/// any policy. Wikilinks are skipped exactly as [`remove_hyperlinks`] skips them.
pub fn find_hyperlinks(text: &str) -> Vec<HyperlinkSpan> {
    scan(text).collect()
}

fn scan(text: &str) -> impl Iterator<Item = HyperlinkSpan> + '_ {
    let brackets = DelimiterMatches::new(
        text,
        Hyperlink::TEXT_OPEN,
        Hyperlink::TEXT_CLOSE,
        Some(Hyperlink::ESCAPE),
    );
    let parens = DelimiterMatches::new(text, Hyperlink::URL_OPEN, Hyperlink::URL_CLOSE, None);
    let mut cur = Cursor::new(text);
    std::iter::from_fn(move || {
        while !cur.eof() {
            if skip_wikilink(&mut cur) {
                continue;
            }
            if let Some(link) = try_parse_hyperlink(&mut cur, &brackets, &parens) {
                return Some(link);
            }
            cur.bump();
        }
        None
    })
}

/// Skips past a `[[...]]` or `![[...]]` span if one starts here.
///
/// Counts every bracket (no escapes) from a depth of two until it returns to
/// zero. An unterminated opener swallows the rest of the text, which is then
/// copied verbatim.
fn skip_wikilink(cur: &mut Cursor<'_>) -> bool {
    if cur.starts_with(Wikilink::OPEN) {
        cur.bump_n(Wikilink::OPEN.len());
    } else if cur.starts_with(Wikilink::EMBED_OPEN) {
        cur.bump_n(Wikilink::EMBED_OPEN.len());
    } else {
        return false;
    }

    let mut depth = 2usize;
    while depth > 0 {
        match cur.bump() {
            Some(Hyperlink::TEXT_OPEN) => depth += 1,
            Some(Hyperlink::TEXT_CLOSE) => depth -= 1,
            Some(_) => {}
            None => break,
        }
    }
    true
}

/// Attempts to parse a hyperlink or image starting at the current position.
///
/// Link text runs to the bracket balancing the `[` and the URL to the
/// parenthesis balancing the `(`, as recorded in `brackets` and `parens`.
/// On failure the cursor is restored, so the caller advances by one byte only.
fn try_parse_hyperlink(
    cur: &mut Cursor<'_>,
    brackets: &DelimiterMatches,
    parens: &DelimiterMatches,
) -> Option<HyperlinkSpan> {
    let saved = cur.clone();
    let start = cur.pos();

    let is_image = cur.peek() == Some(Hyperlink::IMAGE);
    if is_image {
        cur.bump();
    }
    if cur.peek() != Some(Hyperlink::TEXT_OPEN) {
        *cur = saved;
        return None;
    }

    let Some(text) = skip_to_close(cur, brackets) else {
        *cur = saved;
        return None;
    };

    if cur.peek() != Some(Hyperlink::URL_OPEN) {
        *cur = saved;
        return None;
    }

    let Some(url) = skip_to_close(cur, parens) else {
        *cur = saved;
        return None;
    };

    Some(HyperlinkSpan {
        full: Span::new(start, cur.pos()),
        text,
        url,
        is_image,
    })
}

/// Moves the cursor from an opening delimiter to just past its balancing
/// close and returns the span between them, or `None` if it is never closed.
fn skip_to_close(cur: &mut Cursor<'_>, matches: &DelimiterMatches) -> Option<Span> {
    let open = cur.pos();
    let close = matches.close_of(open)?;
    cur.bump_n(close + 1 - open);
    Some(Span::new(open + 1, close))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LinkType;
    use pretty_assertions::assert_eq;

    fn strip(text: &str) -> String {
        remove_hyperlinks(text, &HyperlinkOptions::default())
    }

    #[test]
    fn finds_link_parts() {
        let text = "a [b](c) d";
        let links = find_hyperlinks(text);
        assert_eq!(links.len(), 1);
        let link = links[0];
        assert_eq!(link.full, Span::new(2, 8));
        assert_eq!(link.text.slice(text), "b");
        assert_eq!(link.url.slice(text), "c");
        assert!(!link.is_image);
    }

    #[test]
    fn finds_image_parts() {
        let text = "![alt](pic.png)";
        let links = find_hyperlinks(text);
        assert_eq!(links.len(), 1);
        assert!(links[0].is_image);
        assert_eq!(links[0].full, Span::new(0, text.len()));
        assert_eq!(links[0].text.slice(text), "alt");
    }

    #[test]
    fn wikilinks_are_not_found() {
        assert!(find_hyperlinks("[[page]] ![[embed.png]] [[a|b]]").is_empty());
    }

    #[test]
    fn bracket_without_url_is_literal() {
        assert_eq!(strip("[not a link] (spaced)"), "[not a link] (spaced)");
    }

    #[test]
    fn bracket_followed_by_link_resumes_inside() {
        // The outer bracket fails, the inner link is then found on its own.
        assert_eq!(strip("[a [b](c)"), "[a b");
    }

    #[test]
    fn run_of_unclosed_brackets_then_link() {
        let input = format!("{}[a](u)", "[ ".repeat(2000));
        let expected = format!("{}a", "[ ".repeat(2000));
        assert_eq!(strip(&input), expected);
    }

    #[test]
    fn run_of_unclosed_urls_then_link() {
        let input = format!("{}[b](v)", "[a](".repeat(500));
        // Only the last `(` is ever closed.
        let expected = format!("{}b", "[a](".repeat(500));
        assert_eq!(strip(&input), expected);
    }

    #[test]
    fn escaped_bracket_can_start_a_link() {
        assert_eq!(strip("\\[a](u)"), "\\a");
    }

    #[test]
    fn unterminated_url_is_literal() {
        assert_eq!(strip("[text](https://example.com"), "[text](https://example.com");
    }

    #[test]
    fn unterminated_text_is_literal() {
        assert_eq!(strip("[never closed"), "[never closed");
    }

    #[test]
    fn escaped_closing_bracket_does_not_end_text() {
        assert_eq!(strip("[a \\] b](u)"), "a \\] b");
    }

    #[test]
    fn unterminated_wikilink_guard_copies_the_rest() {
        assert_eq!(strip("[[open [x](y)"), "[[open [x](y)");
    }

    #[test]
    fn bang_without_bracket_is_text() {
        assert_eq!(strip("Wow! [x](y)!"), "Wow! x!");
    }

    #[test]
    fn non_ascii_text_survives() {
        assert_eq!(strip("héllo [wörld](ü.md) ✓"), "héllo wörld ✓");
    }

    #[test]
    fn keep_text_false_drops_everything() {
        let options = HyperlinkOptions {
            keep_text: false,
            ..Default::default()
        };
        assert_eq!(remove_hyperlinks("x [y](z) w", &options), "x  w");
    }

    #[test]
    fn internal_only_keeps_external_links() {
        let options = HyperlinkOptions {
            link_type: LinkType::Internal,
            ..Default::default()
        };
        assert_eq!(
            remove_hyperlinks("[a](https://x.com) [b](b.md) [c](#c)", &options),
            "[a](https://x.com) b c"
        );
    }
}
