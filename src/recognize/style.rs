//! Catch-all style rules: `selector { declarations }`.
//!
//! Unlike the pattern-driven recognizers this one walks a single byte cursor
//! over the source. At-rules are skipped wholesale so their contents are never
//! mistaken for selectors. Any unterminated comment or block ends the scan
//! with whatever was collected so far.

use regex::Regex;

use super::{render_comments, render_declarations, ParseContext, Recognizer};
use crate::document::{Document, StyleRule};
use crate::scan::comments::is_space;
use crate::scan::declarations::split_declarations_without_comments;
use crate::scan::{find_matching_close, leading_comments, line_number, Adjacency};

/// Recognizes top-level style rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleRecognizer;

impl Recognizer for StyleRecognizer {
    fn name(&self) -> &'static str {
        "style"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        None
    }

    fn recognize(&self, source: &str, _cx: &ParseContext<'_>) -> Document {
        let rules = scan_rules(source);
        Document {
            styles: (!rules.is_empty()).then_some(rules),
            ..Document::default()
        }
    }

    fn render(&self, document: &Document) -> String {
        document
            .styles
            .iter()
            .flatten()
            .map(|rule| {
                format!(
                    "{}{} {{\n{}}}\n\n",
                    render_comments(rule.comment.as_ref()),
                    rule.selector,
                    render_declarations(&rule.declarations, 1)
                )
            })
            .collect()
    }
}

fn scan_rules(source: &str) -> Vec<StyleRule> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut rules = Vec::new();
    let mut offset = 0;

    while offset < len {
        while offset < len && is_space(bytes[offset]) {
            offset += 1;
        }
        if offset >= len {
            break;
        }

        if bytes[offset..].starts_with(b"/*") {
            match source[offset + 2..].find("*/") {
                Some(rel) => {
                    offset += 2 + rel + 2;
                    continue;
                }
                None => {
                    tracing::trace!(offset, "style: unterminated comment");
                    break;
                }
            }
        }

        if bytes[offset] == b'@' {
            match skip_at_rule(source, offset) {
                Some(next) => {
                    offset = next;
                    continue;
                }
                None => {
                    tracing::trace!(offset, "style: unterminated at-rule");
                    break;
                }
            }
        }

        let Some(open) = source[offset..].find('{').map(|rel| offset + rel) else {
            break;
        };
        let selector = source[offset..open].trim();
        if selector.is_empty() {
            offset = open + 1;
            continue;
        }

        let Some(close) = find_matching_close(source, open) else {
            tracing::trace!(offset, "style: unterminated block");
            break;
        };

        rules.push(StyleRule {
            comment: leading_comments(source, offset, Adjacency::Strict),
            line: line_number(source, offset),
            selector: selector.to_string(),
            declarations: split_declarations_without_comments(&source[open + 1..close]),
        });
        offset = close + 1;
    }

    rules
}

/// Offset just past the at-rule starting at `offset`.
///
/// A `;` before any `{` ends a statement at-rule; otherwise the at-rule's
/// block is skipped to its matching `}`.
fn skip_at_rule(source: &str, offset: usize) -> Option<usize> {
    let rest = &source[offset..];
    let semicolon = rest.find(';');
    let brace = rest.find('{');

    match (semicolon, brace) {
        (Some(semi), brace) if brace.is_none_or(|b| semi < b) => Some(offset + semi + 1),
        (_, Some(b)) => find_matching_close(source, offset + b).map(|close| close + 1),
        _ => None,
    }
}
