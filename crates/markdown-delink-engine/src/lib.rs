//! # markdown-delink-engine
//!
//! Strips or rewrites two families of link syntax in Markdown text while
//! leaving everything else byte-for-byte intact:
//!
//! - **Hyperlinks**: `[text](url)` and `![alt](url)`
//! - **Wikilinks**: `[[path]]`, `[[path|alias]]` and `![[embed]]`
//!
//! Each family has its own pass. A pass is a pure function from text and
//! options to new text, and each pass ignores the other family's syntax, so
//! they compose in either order.
//!
//! ```
//! use markdown_delink_engine::{HyperlinkOptions, WikilinkOptions, remove_hyperlinks, remove_wikilinks};
//!
//! let text = "See [docs](https://example.com) and [[Notes|my notes]]";
//! let text = remove_hyperlinks(text, &HyperlinkOptions::default());
//! let text = remove_wikilinks(&text, &WikilinkOptions::default());
//! assert_eq!(text, "See docs and my notes");
//! ```
//!
//! ## Modules
//!
//! - **`scan`**: byte cursor, delimiter constants and span types shared by both passes
//! - **`hyperlinks`**: the Markdown link/image pass
//! - **`wikilinks`**: the wikilink/embed pass
//! - **`classify`**: internal vs. external URL classification
//! - **`policy`**: option structs and whitelist/blacklist matching
//! - **`pipeline`**: runs the enabled passes in a configured order

pub mod classify;
pub mod hyperlinks;
pub mod pipeline;
pub mod policy;
pub mod scan;
pub mod wikilinks;

pub use classify::{LinkClass, LinkType, ParseLinkTypeError, classify_url};
pub use hyperlinks::{find_hyperlinks, remove_hyperlinks};
pub use pipeline::{PassOrder, RemovalSettings, process_text};
pub use policy::{Decision, HyperlinkOptions, PatternList, WikilinkOptions};
pub use scan::{HyperlinkSpan, Span, WikilinkSpan};
pub use wikilinks::{find_wikilinks, remove_wikilinks};
