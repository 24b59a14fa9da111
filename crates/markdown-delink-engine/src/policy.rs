//! Per-pass options and whitelist/blacklist evaluation.
//!
//! Options are plain values owned by the caller and borrowed for the duration
//! of one pass. Both passes compile their lists into a [`PatternList`] once
//! per call, then ask a policy for a [`Decision`] on every span they find.

use serde::{Deserialize, Serialize};

use crate::classify::{LinkType, classify_url};

/// Options for [`remove_hyperlinks`](crate::remove_hyperlinks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperlinkOptions {
    /// Emit the link text for removed links instead of nothing.
    pub keep_text: bool,
    /// URLs containing any of these (case-insensitive) are never removed.
    pub whitelist: Vec<String>,
    /// Restricts removal to internal or external URLs. Ignored in blacklist mode.
    pub link_type: LinkType,
    /// Remove only links whose URL contains a blacklist entry.
    pub blacklist_mode: bool,
    pub blacklist: Vec<String>,
}

impl Default for HyperlinkOptions {
    fn default() -> Self {
        Self {
            keep_text: true,
            whitelist: Vec::new(),
            link_type: LinkType::Both,
            blacklist_mode: false,
            blacklist: Vec::new(),
        }
    }
}

/// Options for [`remove_wikilinks`](crate::remove_wikilinks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikilinkOptions {
    /// Emit the alias rather than the path when a link has one.
    pub keep_alias: bool,
    /// Paths equal to any of these (case-insensitive) are never removed.
    pub whitelist: Vec<String>,
    /// Remove only links whose path equals a blacklist entry.
    pub blacklist_mode: bool,
    pub blacklist: Vec<String>,
}

impl Default for WikilinkOptions {
    fn default() -> Self {
        Self {
            keep_alias: true,
            whitelist: Vec::new(),
            blacklist_mode: false,
            blacklist: Vec::new(),
        }
    }
}

/// What a pass does with one recognised span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Copy the full original span verbatim.
    Preserve,
    /// Replace the span with its derived text (possibly empty).
    Remove,
}

/// A normalized whitelist or blacklist.
///
/// Entries are lower-cased and otherwise kept as given, surrounding
/// whitespace included. Empty entries are dropped so they never match
/// every link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternList {
    entries: Vec<String>,
}

impl PatternList {
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Self {
        let entries = entries
            .iter()
            .map(|e| e.as_ref().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `haystack` contains any entry, ignoring case.
    pub fn contained_in(&self, haystack: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let haystack = haystack.to_lowercase();
        self.entries.iter().any(|e| haystack.contains(e.as_str()))
    }

    /// True if `candidate` equals any entry, ignoring case.
    pub fn matches_exactly(&self, candidate: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let candidate = candidate.to_lowercase();
        self.entries.iter().any(|e| *e == candidate)
    }
}

/// Compiled hyperlink policy, keyed off the URL.
pub(crate) struct HyperlinkPolicy {
    whitelist: PatternList,
    blacklist: PatternList,
    link_type: LinkType,
    blacklist_mode: bool,
}

impl HyperlinkPolicy {
    pub(crate) fn new(options: &HyperlinkOptions) -> Self {
        Self {
            whitelist: PatternList::new(&options.whitelist),
            blacklist: PatternList::new(&options.blacklist),
            link_type: options.link_type,
            blacklist_mode: options.blacklist_mode,
        }
    }

    pub(crate) fn decide(&self, url: &str) -> Decision {
        if self.blacklist_mode {
            // link_type does not apply here
            return if self.blacklist.contained_in(url) {
                Decision::Remove
            } else {
                Decision::Preserve
            };
        }

        if self.whitelist.contained_in(url) {
            return Decision::Preserve;
        }
        if self.link_type.admits(classify_url(url)) {
            Decision::Remove
        } else {
            Decision::Preserve
        }
    }
}

/// Compiled wikilink policy, keyed off the path component.
pub(crate) struct WikilinkPolicy {
    whitelist: PatternList,
    blacklist: PatternList,
    blacklist_mode: bool,
}

impl WikilinkPolicy {
    pub(crate) fn new(options: &WikilinkOptions) -> Self {
        Self {
            whitelist: PatternList::new(&options.whitelist),
            blacklist: PatternList::new(&options.blacklist),
            blacklist_mode: options.blacklist_mode,
        }
    }

    /// Decides for a non-embed wikilink. Embeds are always removed by the caller.
    pub(crate) fn decide(&self, path: &str) -> Decision {
        if self.blacklist_mode {
            return if self.blacklist.matches_exactly(path) {
                Decision::Remove
            } else {
                Decision::Preserve
            };
        }

        if self.whitelist.matches_exactly(path) {
            Decision::Preserve
        } else {
            Decision::Remove
        }
    }
}
