/// Markdown hyperlink `[text](url)` and image `![alt](url)` delimiters.
pub struct Hyperlink;

impl Hyperlink {
    pub const IMAGE: u8 = b'!';
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// Brackets preceded by this byte do not change nesting depth.
    pub const ESCAPE: u8 = b'\\';
}
