//! # Link Kinds
//!
//! Each link syntax owns its delimiter constants. Scanner code refers to
//! these constants and never hardcodes `[[` or `](`.

pub mod hyperlink;
pub mod wikilink;

pub use hyperlink::Hyperlink;
pub use wikilink::Wikilink;
