//! # Scanning Primitives
//!
//! Shared building blocks for the hyperlink and wikilink passes.
//!
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with restore-on-failure
//! - **`kinds`**: delimiter constants owned by each link syntax
//! - **`matching`**: balancing close for every opening delimiter
//! - **`span`**: byte ranges and the recognised link spans
//!
//! Every delimiter is ASCII. UTF-8 continuation bytes never collide with
//! ASCII, so any offset a scanner stops at is a valid `str` boundary and
//! non-ASCII text flows through untouched.

pub mod cursor;
pub mod kinds;
pub mod matching;
pub mod span;

pub use cursor::Cursor;
pub use matching::DelimiterMatches;
pub use span::{HyperlinkSpan, Span, WikilinkSpan};
