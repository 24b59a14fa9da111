use std::collections::HashMap;

/// Balancing close for every opening delimiter in a text, built in one pass.
///
/// A scan starting just after an opener at `p` ends at the first later
/// delimiter where the running depth drops below its value at `p`. Keeping
/// unresolved openers on a stack answers that for all openers at once, so
/// retrying from each `[` in a run of unclosed ones costs nothing extra.
///
/// With an `escape` byte, a delimiter directly after it leaves the depth
/// alone. An escaped opener still gets an entry, since a scan may start
/// there.
#[derive(Debug, Default)]
pub struct DelimiterMatches {
    closes: HashMap<usize, usize>,
}

impl DelimiterMatches {
    pub fn new(text: &str, open: u8, close: u8, escape: Option<u8>) -> Self {
        let bytes = text.as_bytes();
        let mut closes = HashMap::new();
        let mut pending: Vec<(usize, isize)> = Vec::new();
        let mut depth = 0isize;

        for (i, &b) in bytes.iter().enumerate() {
            let escaped = escape.is_some() && i > 0 && Some(bytes[i - 1]) == escape;
            if b == open {
                if !escaped {
                    depth += 1;
                }
                pending.push((i, depth));
            } else if b == close && !escaped {
                depth -= 1;
                while let Some(&(pos, at)) = pending.last() {
                    if at <= depth {
                        break;
                    }
                    closes.insert(pos, i);
                    pending.pop();
                }
            }
        }

        Self { closes }
    }

    /// Position of the delimiter balancing the opener at `open_pos`.
    pub fn close_of(&self, open_pos: usize) -> Option<usize> {
        self.closes.get(&open_pos).copied()
    }
}
