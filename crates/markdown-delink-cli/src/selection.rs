//! Line-range "selections": transform part of a document, copy the rest.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// A 1-based, inclusive range of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLineRangeError {
    #[error("expected START:END, got `{0}`")]
    MissingSeparator(String),

    #[error("invalid line number `{number}`: {source}")]
    InvalidNumber {
        number: String,
        source: ParseIntError,
    },

    #[error("line numbers start at 1")]
    ZeroLine,

    #[error("start line {start} is after end line {end}")]
    Reversed { start: usize, end: usize },
}

impl FromStr for LineRange {
    type Err = ParseLineRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| ParseLineRangeError::MissingSeparator(s.to_string()))?;
        let parse = |n: &str| {
            n.trim()
                .parse::<usize>()
                .map_err(|source| ParseLineRangeError::InvalidNumber {
                    number: n.to_string(),
                    source,
                })
        };
        let (start, end) = (parse(start)?, parse(end)?);
        if start == 0 {
            return Err(ParseLineRangeError::ZeroLine);
        }
        if start > end {
            return Err(ParseLineRangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl LineRange {
    /// Byte range of the selected lines in `text`, trailing newline included.
    /// Clamped to the text; a range past the last line selects nothing.
    pub fn byte_range(self, text: &str) -> std::ops::Range<usize> {
        let mut start = text.len();
        let mut end = text.len();
        let mut offset = 0;
        for (idx, line) in text.split_inclusive('\n').enumerate() {
            let number = idx + 1;
            if number == self.start {
                start = offset;
            }
            offset += line.len();
            if number == self.end {
                end = offset;
                break;
            }
        }
        start..end.max(start)
    }
}

/// Applies `transform` to the lines in `range` only, or to all of `text`
/// when there is no range.
pub fn apply_to_selection(
    text: &str,
    range: Option<LineRange>,
    transform: impl FnOnce(&str) -> String,
) -> String {
    let Some(range) = range else {
        return transform(text);
    };
    let bytes = range.byte_range(text);
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..bytes.start]);
    out.push_str(&transform(&text[bytes.clone()]));
    out.push_str(&text[bytes.end..]);
    out
}
