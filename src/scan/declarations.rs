//! Declaration splitting for block bodies.
//!
//! Two strategies exist. Style and media blocks split on `;` and then on the
//! first `:`. Keyframe steps pattern-match `property: value;` pairs, so a
//! trailing declaration without `;` is not picked up there.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Declaration;

static INLINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*.*?\*/").expect("inline comment pattern is valid")
});

static STEP_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)([a-zA-Z-]+)(?-u:\s)*:(?-u:\s)*(.*?);")
        .expect("step declaration pattern is valid")
});

/// Split a block body on `;` then on the first `:`.
///
/// Segments that are empty or carry no `:` are dropped. Comments are kept
/// as part of the text.
pub fn split_declarations(body: &str) -> Vec<Declaration> {
    body.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(split_pair)
        .collect()
}

/// Like [`split_declarations`], but single-line `/* ... */` spans are removed
/// from each segment first.
pub fn split_declarations_without_comments(body: &str) -> Vec<Declaration> {
    body.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            if segment.contains("/*") {
                let stripped = INLINE_COMMENT.replace_all(segment, "");
                let stripped = stripped.trim();
                if stripped.is_empty() {
                    return None;
                }
                split_pair(stripped)
            } else {
                split_pair(segment)
            }
        })
        .collect()
}

/// Pattern-match `property: value;` pairs, values may span lines.
pub fn match_declarations(body: &str) -> Vec<Declaration> {
    STEP_DECLARATION
        .captures_iter(body)
        .map(|caps| Declaration::new(caps[1].trim(), caps[2].trim()))
        .collect()
}

fn split_pair(segment: &str) -> Option<Declaration> {
    let (property, value) = segment.split_once(':')?;
    Some(Declaration::new(property.trim(), value.trim()))
}
