//! Internal vs. external URL classification for the hyperlink pass.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Which hyperlinks the hyperlink pass is allowed to remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    #[default]
    Both,
    Internal,
    External,
}

/// The classification of a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Relative paths, `#fragment`s and bare filenames.
    Internal,
    /// Anything with a URI scheme: `https:`, `mailto:`, `obsidian:` etc.
    External,
}

impl LinkType {
    /// Returns true if a link of class `class` falls under this filter.
    pub fn admits(self, class: LinkClass) -> bool {
        match self {
            LinkType::Both => true,
            LinkType::Internal => class == LinkClass::Internal,
            LinkType::External => class == LinkClass::External,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link type `{0}` (expected both, internal or external)")]
pub struct ParseLinkTypeError(pub String);

impl FromStr for LinkType {
    type Err = ParseLinkTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" => Ok(LinkType::Both),
            "internal" => Ok(LinkType::Internal),
            "external" => Ok(LinkType::External),
            _ => Err(ParseLinkTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkType::Both => "both",
            LinkType::Internal => "internal",
            LinkType::External => "external",
        };
        f.write_str(name)
    }
}

/// Classifies `url` by whether it starts with a URI scheme.
///
/// The URL is tested as written, so `[a]( https://x)` is internal.
pub fn classify_url(url: &str) -> LinkClass {
    static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
    let scheme = SCHEME_REGEX
        .get_or_init(|| Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*:").expect("Invalid scheme regex"));

    if scheme.is_match(url) {
        LinkClass::External
    } else {
        LinkClass::Internal
    }
}
