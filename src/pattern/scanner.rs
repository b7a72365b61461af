//! Scanner for placeholder tags embedded in raw HTML text
//!
//! Finds every non-overlapping occurrence of the two recognized tag shapes.
//! Text that fails to match either shape is ordinary content; the scanner
//! never reports an error.

use super::tag::{Occurrence, Span, TagShape};

/// Lazy iterator over placeholder tag occurrences, earliest first.
///
/// Scanning is local to the text and pure; cloning the iterator (or calling
/// [`find_occurrences`] again) restarts it. After an occurrence is yielded,
/// scanning resumes strictly after its end, so occurrences never overlap.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    source: &'a str,
    /// Next byte offset to consider
    pos: usize,
}

/// Find all placeholder tag occurrences in `source`.
pub fn find_occurrences(source: &str) -> Occurrences<'_> {
    Occurrences { source, pos: 0 }
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        while self.pos < self.source.len() {
            // Both shapes open with '<'; skip straight to the next one.
            let start = match self.source[self.pos..].find('<') {
                Some(rel) => self.pos + rel,
                None => break,
            };
            if let Some(occ) = match_at(self.source, start) {
                self.pos = occ.span.end;
                return Some(occ);
            }
            // Failed candidates are plain content; advance and rescan.
            self.pos = start + 1;
        }
        self.pos = self.source.len();
        None
    }
}

/// Try to match either shape at a fixed `start` offset (a '<').
///
/// Both shapes share the prefix `<` ws* `template` filler `slot` ws* `=`
/// ws* quoted-name, where the filler may not cross the tag's own `>`.
/// The first `>` after the slot value then decides the shape: preceded by
/// `/` (whitespace permitted in between) it self-closes, otherwise the
/// default-bearing form is tried, its body running to the first well-formed
/// closing tag. Leftmost-greedy alternation: the self-closing form is
/// checked first and wins when both would match.
fn match_at(source: &str, start: usize) -> Option<Occurrence> {
    let bytes = source.as_bytes();
    let pos = skip_ws(bytes, start + 1);
    if !rest_starts_with(bytes, pos, b"template") {
        return None;
    }
    let (name, after_value) = find_slot_attr(source, pos + b"template".len())?;

    if let Some(end) = seek_self_close(bytes, after_value) {
        return Some(Occurrence {
            shape: TagShape::SelfClosing,
            name,
            default: None,
            span: start..end,
        });
    }
    let (body, end) = seek_default(source, after_value)?;
    Some(Occurrence {
        shape: TagShape::WithDefault,
        name,
        default: Some(source[body].to_string()),
        span: start..end,
    })
}

/// Locate the `slot` attribute: filler, `slot` ws* `=` ws* quoted value.
///
/// The filler is matched non-greedily and may not cross the tag's closing
/// `>`, so the attribute must belong to this tag. Returns the extracted
/// name and the offset just past the closing quote. A structurally
/// complete attribute whose value is empty or contains characters outside
/// `[0-9A-Za-z_-]` rejects the whole candidate rather than retrying
/// further right.
fn find_slot_attr(source: &str, from: usize) -> Option<(String, usize)> {
    let bytes = source.as_bytes();
    let limit = match source[from..].find('>') {
        Some(rel) => from + rel,
        None => source.len(),
    };
    let mut pos = from;
    loop {
        let slot_start = pos + source[pos..].find("slot")?;
        if slot_start >= limit {
            return None;
        }
        let mut cur = skip_ws(bytes, slot_start + b"slot".len());
        if bytes.get(cur) != Some(&b'=') {
            pos = slot_start + 1;
            continue;
        }
        cur = skip_ws(bytes, cur + 1);
        let quote = match bytes.get(cur) {
            Some(&q @ (b'"' | b'\'')) => q,
            _ => {
                pos = slot_start + 1;
                continue;
            }
        };
        let value_start = cur + 1;
        let value_end = match source[value_start..].find(quote as char) {
            Some(rel) => value_start + rel,
            None => {
                pos = slot_start + 1;
                continue;
            }
        };
        let value = &source[value_start..value_end];
        if value.is_empty() || !value.bytes().all(is_name_byte) {
            return None;
        }
        return Some((value.to_string(), value_end + 1));
    }
}

/// Seek the self-closing terminator: filler, `/` ws* `>`.
///
/// The filler may not contain `>`, so this matches exactly when the first
/// `>` after the slot value is preceded, whitespace aside, by a `/`.
/// Returns the offset just past the `>`.
fn seek_self_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut gt = from;
    while gt < bytes.len() && bytes[gt] != b'>' {
        gt += 1;
    }
    if gt == bytes.len() {
        return None;
    }
    let mut slash = gt;
    while slash > from && bytes[slash - 1].is_ascii_whitespace() {
        slash -= 1;
    }
    (slash > from && bytes[slash - 1] == b'/').then_some(gt + 1)
}

/// Seek the default-bearing tail: `>`, verbatim body, then
/// `</` ws* `template` ws* `>`.
///
/// The body is captured non-greedily: the first well-formed closing tag
/// ends it. Returns the body span and the offset just past the final `>`.
fn seek_default(source: &str, from: usize) -> Option<(Span, usize)> {
    let bytes = source.as_bytes();
    let body_start = from + source[from..].find('>')? + 1;
    let mut pos = body_start;
    while let Some(rel) = source[pos..].find("</") {
        let close_start = pos + rel;
        let mut cur = skip_ws(bytes, close_start + 2);
        if rest_starts_with(bytes, cur, b"template") {
            cur = skip_ws(bytes, cur + b"template".len());
            if bytes.get(cur) == Some(&b'>') {
                return Some((body_start..close_start, cur + 1));
            }
        }
        pos = close_start + 2;
    }
    None
}

/// Slot names are one or more alphanumerics, underscores, or hyphens.
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

fn skip_ws(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn rest_starts_with(bytes: &[u8], pos: usize, lit: &[u8]) -> bool {
    bytes.len() >= pos + lit.len() && &bytes[pos..pos + lit.len()] == lit
}
