//! Small text helpers shared by the resolvers.
//!
//! Line breaks are treated uniformly: `\r\n`, `\r` and `\n` all terminate a
//! line. Whitespace comparisons are character-literal; a tab never equals a
//! run of spaces here.

/// Returns the leading run of spaces and tabs of `text`.
pub fn leading_whitespace(text: &str) -> &str {
    leading_whitespace_within(text, text.len())
}

/// Returns the leading run of spaces and tabs of `text`, looking at no more
/// than the first `limit` characters.
pub fn leading_whitespace_within(text: &str, limit: usize) -> &str {
    let mut end = 0;
    for (count, (offset, ch)) in text.char_indices().enumerate() {
        if count == limit || (ch != ' ' && ch != '\t') {
            return &text[..offset];
        }
        end = offset + ch.len_utf8();
    }
    &text[..end]
}

/// Length in bytes of the longest common prefix of `a` and `b`, comparing
/// character by character.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

/// True if `text` is empty or contains only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Splits `text` into lines on any line-break style. Terminators are not
/// included; a trailing terminator yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

/// The content after the last line break of `text`, or all of `text` if it
/// has none.
pub fn last_line(text: &str) -> &str {
    text.rsplit(['\r', '\n']).next().unwrap_or(text)
}

/// Inserts `delta` immediately after every line break of `text`. The break
/// itself and everything else is kept byte for byte; the first line is never
/// touched.
pub fn indent_after_breaks(text: &str, delta: &str) -> String {
    if delta.is_empty() {
        return text.to_string();
    }
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    out.push_str("\r\n");
                    i += 2;
                } else {
                    out.push('\r');
                    i += 1;
                }
                out.push_str(delta);
            }
            b'\n' => {
                out.push('\n');
                i += 1;
                out.push_str(delta);
            }
            _ => {
                // Copy up to the next break in one slice
                let next = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\r' || b == b'\n')
                    .map(|p| i + p)
                    .unwrap_or(bytes.len());
                out.push_str(&text[i..next]);
                i = next;
            }
        }
    }
    out
}
