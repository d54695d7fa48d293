//! Comment location: leading comments of an element, and a full inventory.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::lines::line_number;

static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*([\s\S]*?)\*/").expect("comment pattern is valid"));

/// How strictly the gap between a comment and what follows it is checked.
///
/// Both variants chain adjacent comment blocks and return one entry per
/// block. They differ only in which bytes may fill the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// The gap may hold only space, tab, newline, carriage return or vertical
    /// tab. A form feed detaches the comment.
    Strict,
    /// Any whitespace run, form feed included.
    Loose,
}

impl Adjacency {
    fn accepts_gap(self, gap: &[u8]) -> bool {
        match self {
            Adjacency::Strict => gap
                .iter()
                .all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b)),
            Adjacency::Loose => gap.iter().copied().all(is_space),
        }
    }
}

/// Find the comment blocks immediately preceding `offset`.
///
/// Walks backward over whitespace, collecting each `/* ... */` block whose gap
/// to the element (or to the comment collected before it) passes the
/// adjacency check. Each block becomes one entry with its lines trimmed and
/// rejoined. Entries come back in source order; `None` when there are none.
pub fn leading_comments(text: &str, offset: usize, adjacency: Adjacency) -> Option<Vec<String>> {
    let bytes = text.as_bytes();
    let mut boundary = offset.min(bytes.len());
    let mut end = skip_space_back(bytes, boundary);
    let mut entries = Vec::new();

    while bytes[..end].ends_with(b"*/") {
        let close = end - 2;
        let Some(start) = text[..close].rfind("/*") else {
            break;
        };
        if !adjacency.accepts_gap(&bytes[end..boundary]) {
            break;
        }

        entries.push(normalize_block(&text[start + 2..close]));
        boundary = start;
        end = skip_space_back(bytes, start);
    }

    if entries.is_empty() {
        return None;
    }
    entries.reverse();
    Some(entries)
}

/// Trim every line of a comment body and the body as a whole.
fn normalize_block(body: &str) -> String {
    body.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn skip_space_back(bytes: &[u8], mut end: usize) -> usize {
    while end > 0 && is_space(bytes[end - 1]) {
        end -= 1;
    }
    end
}

/// Whitespace as the C locale defines it, including vertical tab.
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

// ---------------------------------------------------------------------------
// Comment inventory
// ---------------------------------------------------------------------------

/// A comment anywhere in the source, with the line its body starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub line: usize,
    pub value: String,
}

/// List every `/* ... */` comment in `text`, in source order.
pub fn collect_comments(text: &str) -> Vec<CommentRecord> {
    COMMENT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|body| CommentRecord {
            line: line_number(text, body.start()),
            value: body.as_str().trim().to_string(),
        })
        .collect()
}

/// Render comment records as `/* value */`, one per line.
pub fn render_comment_list(comments: &[CommentRecord]) -> String {
    comments
        .iter()
        .map(|comment| format!("/* {} */", comment.value))
        .collect::<Vec<_>>()
        .join("\n")
}
