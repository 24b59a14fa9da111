/// Wikilink `[[path|alias]]` and embed `![[file]]` delimiters.
pub struct Wikilink;

impl Wikilink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const EMBED_OPEN: &'static [u8; 3] = b"![[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';
}
