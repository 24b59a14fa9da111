//! The `--list` report: every recognised link with its position.

use markdown_delink_engine::{Span, find_hyperlinks, find_wikilinks};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Link,
    Image,
    Wikilink,
    Embed,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Link => "link",
            LinkKind::Image => "image",
            LinkKind::Wikilink => "wikilink",
            LinkKind::Embed => "embed",
        }
    }
}

/// A link found in a document, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedLink<'a> {
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    pub kind: LinkKind,
    pub raw: &'a str,
}

pub fn list_links(text: &str) -> Vec<ListedLink<'_>> {
    list_links_in(text, 0..text.len())
}

/// Lists the links of `text` that start inside `bytes`. Positions stay
/// relative to the whole text.
pub fn list_links_in(text: &str, bytes: Range<usize>) -> Vec<ListedLink<'_>> {
    let mut found: Vec<(Span, LinkKind)> = find_hyperlinks(text)
        .into_iter()
        .map(|l| {
            let kind = if l.is_image {
                LinkKind::Image
            } else {
                LinkKind::Link
            };
            (l.full, kind)
        })
        .chain(find_wikilinks(text).into_iter().map(|l| {
            let kind = if l.is_image {
                LinkKind::Embed
            } else {
                LinkKind::Wikilink
            };
            (l.full, kind)
        }))
        .filter(|(span, _)| bytes.contains(&span.start))
        .collect();
    found.sort_by_key(|(span, _)| *span);

    found
        .into_iter()
        .map(|(span, kind)| {
            let before = &text[..span.start];
            let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
            ListedLink {
                line: before.matches('\n').count() + 1,
                column: before[line_start..].chars().count() + 1,
                kind,
                raw: span.slice(text),
            }
        })
        .collect()
}

/// Renders links as `name:line:column kind raw`, one per line.
pub fn render(name: &str, links: &[ListedLink<'_>]) -> String {
    links
        .iter()
        .map(|l| {
            format!(
                "{name}:{}:{} {} {}\n",
                l.line,
                l.column,
                l.kind.as_str(),
                l.raw
            )
        })
        .collect()
}
